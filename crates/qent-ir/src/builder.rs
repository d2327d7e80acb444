//! Circuit builders used by the service endpoints.

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::dispatch::dispatch;
use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// Which qubits receive a Hadamard before the CX chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entanglement {
    /// H on every qubit, then the CX chain.
    #[default]
    HadamardAll,
    /// H on qubit 0 only, then the CX chain (a GHZ state).
    HadamardFirst,
}

/// A built circuit together with the figures echoed back to callers.
#[derive(Debug, Clone)]
pub struct BuiltCircuit {
    /// The circuit, ready for simulation.
    pub circuit: Circuit,
    /// Depth at build time.
    pub depth: usize,
    /// Names of the instructions actually applied.
    pub gates_used: Vec<String>,
}

impl BuiltCircuit {
    /// Snapshot depth and gate trace of a circuit.
    pub fn from_circuit(circuit: Circuit) -> Self {
        let depth = circuit.depth();
        let gates_used = circuit
            .gate_trace()
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            circuit,
            depth,
            gates_used,
        }
    }
}

/// Constructors for the circuits the service knows how to build.
pub struct CircuitBuilder;

impl CircuitBuilder {
    /// Build a circuit by dispatching each gate symbol in order.
    ///
    /// Unknown symbols and gates needing more qubits than available are
    /// skipped; see [`dispatch`].
    pub fn declarative<I, S>(
        name: impl Into<String>,
        qubits: i64,
        gates: I,
    ) -> IrResult<BuiltCircuit>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let num_qubits = validate_qubit_count(qubits)?;
        let mut circuit = Circuit::with_size(name, num_qubits, 0);

        for symbol in gates {
            dispatch(&mut circuit, symbol.as_ref())?;
        }

        Ok(BuiltCircuit::from_circuit(circuit))
    }

    /// H on qubit 0 followed by CX(i, i+1) along the whole register.
    pub fn hadamard_first_chain(name: impl Into<String>, qubits: i64) -> IrResult<BuiltCircuit> {
        let n = validate_qubit_count(qubits)?;
        let mut circuit = Circuit::with_size(name, n, 0);

        circuit.h(QubitId(0))?;
        cx_chain(&mut circuit, n)?;

        Ok(BuiltCircuit::from_circuit(circuit))
    }

    /// H on every qubit followed by CX(i, i+1) along the whole register.
    pub fn hadamard_all_chain(name: impl Into<String>, qubits: i64) -> IrResult<BuiltCircuit> {
        let n = validate_qubit_count(qubits)?;
        let mut circuit = Circuit::with_size(name, n, 0);

        for i in 0..n {
            circuit.h(QubitId(i))?;
        }
        cx_chain(&mut circuit, n)?;

        Ok(BuiltCircuit::from_circuit(circuit))
    }

    /// Build one of the canonical entanglement circuits.
    pub fn entangled(
        name: impl Into<String>,
        qubits: i64,
        entanglement: Entanglement,
    ) -> IrResult<BuiltCircuit> {
        match entanglement {
            Entanglement::HadamardAll => Self::hadamard_all_chain(name, qubits),
            Entanglement::HadamardFirst => Self::hadamard_first_chain(name, qubits),
        }
    }
}

fn cx_chain(circuit: &mut Circuit, n: u32) -> IrResult<()> {
    for i in 1..n {
        circuit.cx(QubitId(i - 1), QubitId(i))?;
    }
    Ok(())
}

/// Reject non-positive qubit counts before any gate is applied.
pub fn validate_qubit_count(qubits: i64) -> IrResult<u32> {
    if qubits <= 0 {
        return Err(IrError::InvalidQubitCount(qubits));
    }
    u32::try_from(qubits).map_err(|_| IrError::InvalidQubitCount(qubits))
}
