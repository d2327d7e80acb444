//! Exact and sampled simulation of circuits.

use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use qent_ir::{Circuit, ClbitId, InstructionKind};

use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Largest register the simulator accepts unless configured otherwise.
pub const DEFAULT_MAX_QUBITS: u32 = 20;

/// Everything a simulation run reports back.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Depth of the unmeasured circuit.
    pub depth: usize,
    /// Instruction names of the unmeasured circuit.
    pub gates_used: Vec<String>,
    /// Final state before measurement.
    pub statevector: Statevector,
    /// Shot counts from the measured copy.
    pub counts: Counts,
}

/// Local statevector simulator.
#[derive(Debug, Clone)]
pub struct Simulator {
    max_qubits: u32,
    seed: Option<u64>,
}

impl Simulator {
    /// Create a simulator with the default qubit limit.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with a custom qubit limit.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            max_qubits,
            seed: None,
        }
    }

    /// Fix the sampling seed; every call then draws the same sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get the qubit limit.
    pub fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    fn check_size(&self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(SimError::TooManyQubits {
                qubits: circuit.num_qubits(),
                max: self.max_qubits,
            });
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Final statevector of an unmeasured circuit.
    #[instrument(
        skip(self, circuit),
        fields(circuit = circuit.name(), qubits = circuit.num_qubits())
    )]
    pub fn statevector(&self, circuit: &Circuit) -> SimResult<Statevector> {
        self.check_size(circuit)?;
        if circuit.has_measurements() {
            return Err(SimError::MeasurementInExactMode);
        }

        let mut sv = Statevector::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            sv.apply(inst);
        }

        debug!("Applied {} instructions", circuit.len());
        Ok(sv)
    }

    /// Sample `shots` outcomes from a circuit that already measures.
    ///
    /// Measurements must be terminal: a gate on an already measured qubit is
    /// rejected. Bitstrings are over the classical register, clbit 0
    /// rightmost.
    #[instrument(
        skip(self, circuit),
        fields(circuit = circuit.name(), qubits = circuit.num_qubits())
    )]
    pub fn counts(&self, circuit: &Circuit, shots: u32) -> SimResult<Counts> {
        self.check_size(circuit)?;
        if shots == 0 {
            return Err(SimError::InvalidShots(shots));
        }

        let mut sv = Statevector::new(circuit.num_qubits());
        // Classical bit each qubit was last measured into.
        let mut measured: Vec<Option<ClbitId>> = vec![None; circuit.num_qubits()];

        for inst in circuit.instructions() {
            match inst.kind {
                InstructionKind::Gate(gate) => {
                    if let Some(q) = inst.qubits.iter().find(|q| measured[q.index()].is_some()) {
                        return Err(SimError::MidCircuitMeasurement {
                            gate: gate.name(),
                            qubit: *q,
                        });
                    }
                    sv.apply(inst);
                }
                InstructionKind::Measure => {
                    for (q, c) in inst.qubits.iter().zip(&inst.clbits) {
                        measured[q.index()] = Some(*c);
                    }
                }
                InstructionKind::Barrier => {}
            }
        }

        if measured.iter().all(Option::is_none) {
            return Err(SimError::NoMeasurements);
        }

        let dist = WeightedIndex::new(sv.probabilities())
            .map_err(|e| SimError::Sampling(e.to_string()))?;
        let mut rng = self.rng();

        let mut tallies: FxHashMap<usize, u64> = FxHashMap::default();
        for shot in 0..shots {
            *tallies.entry(dist.sample(&mut rng)).or_insert(0) += 1;

            if shot > 0 && shot % 10_000 == 0 {
                debug!("Completed {} shots", shot);
            }
        }

        let mut counts = Counts::new();
        for (index, count) in tallies {
            counts.insert(register_bits(index, &measured, circuit.num_clbits()), count);
        }

        debug!("Sampled {} distinct outcomes", counts.len());
        Ok(counts)
    }

    /// Measure a copy of `circuit` on every qubit and sample it.
    pub fn sample(&self, circuit: &Circuit, shots: u32) -> SimResult<Counts> {
        let measured = circuit.measured()?;
        self.counts(&measured, shots)
    }

    /// Exact statevector plus sampled counts over the same circuit.
    pub fn run(&self, circuit: &Circuit, shots: u32) -> SimResult<SimulationReport> {
        let statevector = self.statevector(circuit)?;
        let counts = self.sample(circuit, shots)?;

        Ok(SimulationReport {
            depth: circuit.depth(),
            gates_used: circuit
                .gate_trace()
                .into_iter()
                .map(str::to_string)
                .collect(),
            statevector,
            counts,
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Classical register value for a basis index, clbit 0 rightmost.
fn register_bits(index: usize, measured: &[Option<ClbitId>], num_clbits: usize) -> String {
    let mut bits = vec!['0'; num_clbits];
    for (qubit, clbit) in measured.iter().enumerate() {
        if let Some(c) = clbit {
            if (index >> qubit) & 1 == 1 {
                bits[num_clbits - 1 - c.index()] = '1';
            }
        }
    }
    bits.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qent_ir::{CircuitBuilder, QubitId};

    #[test]
    fn test_register_bits_orders_clbit_zero_rightmost() {
        let measured = vec![Some(ClbitId(0)), Some(ClbitId(1)), Some(ClbitId(2))];
        assert_eq!(register_bits(0b001, &measured, 3), "001");
        assert_eq!(register_bits(0b110, &measured, 3), "110");
    }

    #[test]
    fn test_register_bits_ignores_unmeasured_qubits() {
        let measured = vec![None, Some(ClbitId(0))];
        assert_eq!(register_bits(0b01, &measured, 1), "0");
        assert_eq!(register_bits(0b10, &measured, 1), "1");
    }

    #[test]
    fn test_too_many_qubits() {
        let built = CircuitBuilder::declarative("big", 5, ["h"]).unwrap();
        let sim = Simulator::with_max_qubits(4);
        assert!(matches!(
            sim.statevector(&built.circuit),
            Err(SimError::TooManyQubits { qubits: 5, max: 4 })
        ));
    }

    #[test]
    fn test_exact_mode_rejects_measurements() {
        let built = CircuitBuilder::declarative("m", 1, ["h"]).unwrap();
        let measured = built.circuit.measured().unwrap();
        assert!(matches!(
            Simulator::new().statevector(&measured),
            Err(SimError::MeasurementInExactMode)
        ));
    }

    #[test]
    fn test_counts_requires_measurement() {
        let built = CircuitBuilder::declarative("m", 1, ["x"]).unwrap();
        assert!(matches!(
            Simulator::new().counts(&built.circuit, 10),
            Err(SimError::NoMeasurements)
        ));
    }

    #[test]
    fn test_zero_shots_rejected() {
        let built = CircuitBuilder::declarative("m", 1, ["x"]).unwrap();
        assert!(matches!(
            Simulator::new().sample(&built.circuit, 0),
            Err(SimError::InvalidShots(0))
        ));
    }

    #[test]
    fn test_gate_after_measure_rejected() {
        let mut circuit = Circuit::with_size("mid", 1, 1);
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        circuit.x(QubitId(0)).unwrap();
        assert!(matches!(
            Simulator::new().counts(&circuit, 10),
            Err(SimError::MidCircuitMeasurement { gate: "x", .. })
        ));
    }
}
