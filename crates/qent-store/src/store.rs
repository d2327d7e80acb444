//! The store seam used by the HTTP layer.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::record::{CircuitRecord, JoinedResult, Metric, NewCircuit, NewResult, Outcome};

/// Trait for persistent circuit, result and metric storage.
#[async_trait]
pub trait CircuitStore: Send + Sync {
    /// Insert a circuit and return its identifier.
    async fn create_circuit(&self, circuit: &NewCircuit) -> StoreResult<i64>;

    /// All circuits, newest first.
    async fn list_circuits(&self) -> StoreResult<Vec<CircuitRecord>>;

    /// Number of persisted circuits.
    async fn count_circuits(&self) -> StoreResult<u64>;

    /// Insert a result for an existing circuit and return its identifier.
    async fn create_result(&self, result: &NewResult) -> StoreResult<i64>;

    /// Insert a circuit and its result in one transaction.
    ///
    /// Returns `(circuit_id, result_id)`. If the result is rejected, the
    /// circuit is not persisted either.
    async fn create_circuit_with_result(
        &self,
        circuit: &NewCircuit,
        shots: u32,
        outcome: &Outcome,
    ) -> StoreResult<(i64, i64)>;

    /// All results joined with their circuit's name and qubit count, newest first.
    async fn list_results_joined(&self) -> StoreResult<Vec<JoinedResult>>;

    /// All metrics in insertion order.
    async fn list_metrics(&self) -> StoreResult<Vec<Metric>>;

    /// Insert or update a metric by name.
    async fn set_metric(&self, name: &str, value: f64) -> StoreResult<()>;
}
