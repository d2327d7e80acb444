//! Statevector simulation engine.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use qent_ir::{Instruction, InstructionKind, StandardGate};

/// One basis-state amplitude, labelled with its bitstring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amplitude {
    /// Basis state, qubit 0 rightmost.
    pub state: String,
    /// Real part.
    pub real: f64,
    /// Imaginary part.
    pub imag: f64,
}

/// A statevector representing a quantum state.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states (2^n).
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always false; a statevector has at least one amplitude.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply an instruction to the statevector.
    ///
    /// Measurements and barriers leave the state untouched; the engine
    /// handles them.
    pub fn apply(&mut self, instruction: &Instruction) {
        match instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<usize> = instruction.qubits.iter().map(|q| q.index()).collect();
                self.apply_gate(gate, &qubits);
            }
            InstructionKind::Measure | InstructionKind::Barrier => {}
        }
    }

    /// Apply a standard gate to specific qubits.
    ///
    /// Gates given too few operands, or operands outside the register, leave
    /// the state untouched.
    pub(crate) fn apply_gate(&mut self, gate: StandardGate, qubits: &[usize]) {
        let arity = gate.num_qubits() as usize;
        if qubits.len() < arity || qubits[..arity].iter().any(|&q| q >= self.num_qubits()) {
            return;
        }
        match gate {
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Y => self.apply_y(qubits[0]),
            StandardGate::Z => self.apply_z(qubits[0]),
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
        }
    }

    // =========================================================================
    // Gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp = -*amp;
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let control_mask = 1 << control;
        let target_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }
    }

    // =========================================================================
    // Readout
    // =========================================================================

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Probability of a single basis state.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes.get(index).map_or(0.0, |a| a.norm_sqr())
    }

    /// Sum of all probabilities; 1.0 up to rounding.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Bitstring for a basis index, qubit 0 rightmost.
    pub fn basis_label(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.num_qubits)
    }

    /// Every amplitude paired with its basis label.
    pub fn to_amplitudes(&self) -> Vec<Amplitude> {
        self.amplitudes
            .iter()
            .enumerate()
            .map(|(i, a)| Amplitude {
                state: self.basis_label(i),
                real: a.re,
                imag: a.im,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qent_ir::QubitId;

    const EPS: f64 = 1e-10;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < EPS
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert_eq!(sv.len(), 4);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
        assert!((sv.norm_sqr() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_x_gate_sets_rightmost_bit() {
        let mut sv = Statevector::new(3);
        sv.apply_gate(StandardGate::X, &[0]);
        assert!((sv.probability(1) - 1.0).abs() < EPS);
        assert_eq!(sv.basis_label(1), "001");
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::H, &[0]);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(h, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(h, 0.0)));
    }

    #[test]
    fn test_y_gate() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::Y, &[0]);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, 1.0)));
    }

    #[test]
    fn test_z_after_h_flips_sign() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::H, &[0]);
        sv.apply_gate(StandardGate::Z, &[0]);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(-h, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(StandardGate::H, &[0]);
        sv.apply_gate(StandardGate::CX, &[0, 1]);

        let probs = sv.probabilities();
        assert!((probs[0] - 0.5).abs() < EPS);
        assert!(probs[1].abs() < EPS);
        assert!(probs[2].abs() < EPS);
        assert!((probs[3] - 0.5).abs() < EPS);
    }

    #[test]
    fn test_cx_respects_direction() {
        // Control on qubit 1, which is |0⟩: nothing happens.
        let mut sv = Statevector::new(2);
        sv.apply_gate(StandardGate::X, &[0]);
        sv.apply_gate(StandardGate::CX, &[1, 0]);
        assert!((sv.probability(0b01) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_malformed_operands_leave_state_untouched() {
        let mut sv = Statevector::new(2);
        sv.apply(&Instruction::gate(StandardGate::CX, [QubitId(0)]));
        sv.apply(&Instruction::gate(StandardGate::H, Vec::<QubitId>::new()));
        sv.apply(&Instruction::single_qubit_gate(StandardGate::X, QubitId(5)));
        assert!((sv.probability(0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_to_amplitudes_labels() {
        let sv = Statevector::new(2);
        let labels: Vec<String> = sv.to_amplitudes().into_iter().map(|a| a.state).collect();
        assert_eq!(labels, vec!["00", "01", "10", "11"]);
    }
}
