//! Records written to and read from the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use qent_sim::{Amplitude, Counts};

use crate::error::{StoreError, StoreResult};

/// A circuit about to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCircuit {
    pub name: String,
    pub qubits: u32,
    pub depth: u32,
    pub gates_used: Vec<String>,
}

/// A persisted circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitRecord {
    pub id: i64,
    pub name: String,
    pub qubits: u32,
    pub depth: u32,
    pub gates_used: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// The payload of a simulation result.
///
/// Stored as JSON: counts as an object keyed by bitstring, a statevector as
/// an array of amplitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Frequency table from a sampled run.
    Counts(Counts),
    /// Amplitudes from an exact run.
    Statevector(Vec<Amplitude>),
}

impl Outcome {
    /// Check that the outcome agrees with `shots`.
    ///
    /// Counts must sum to exactly `shots`; a statevector is only valid with
    /// zero shots.
    pub fn validate(&self, shots: u32) -> StoreResult<()> {
        match self {
            Outcome::Counts(counts) => {
                let total = counts.total_shots();
                if shots == 0 || total != u64::from(shots) {
                    return Err(StoreError::InvalidResult(format!(
                        "counts sum to {total} but shots is {shots}"
                    )));
                }
            }
            Outcome::Statevector(_) => {
                if shots != 0 {
                    return Err(StoreError::InvalidResult(format!(
                        "statevector outcome requires 0 shots, got {shots}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A result about to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResult {
    pub circuit_id: i64,
    pub shots: u32,
    pub outcome: Outcome,
}

/// A persisted result joined with its parent circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedResult {
    pub id: i64,
    pub circuit_id: i64,
    pub circuit_name: String,
    pub qubits: u32,
    pub shots: u32,
    pub results: Outcome,
    pub created_at: DateTime<Utc>,
}

/// A named business metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}
