//! Error types for the sim crate.

use qent_ir::QubitId;
use thiserror::Error;

/// Errors produced while simulating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The statevector would not fit the configured limit.
    #[error("Circuit has {qubits} qubits but the simulator supports at most {max}")]
    TooManyQubits {
        /// Qubits in the circuit.
        qubits: usize,
        /// Configured maximum.
        max: u32,
    },

    /// Exact mode was asked to simulate a measured circuit.
    #[error("Exact statevector simulation does not support measurements")]
    MeasurementInExactMode,

    /// Sampled mode was given a circuit that measures nothing.
    #[error("Circuit has no measurements; nothing to sample")]
    NoMeasurements,

    /// A gate acts on a qubit after it was measured.
    #[error("Gate '{gate}' acts on {qubit} after it was measured")]
    MidCircuitMeasurement {
        /// Name of the offending gate.
        gate: &'static str,
        /// The measured qubit.
        qubit: QubitId,
    },

    /// Zero shots requested.
    #[error("Shot count must be at least 1, got {0}")]
    InvalidShots(u32),

    /// The outcome distribution could not be sampled.
    #[error("Sampling failed: {0}")]
    Sampling(String),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qent_ir::IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
