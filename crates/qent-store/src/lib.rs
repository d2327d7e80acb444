//! Qent persistence layer.
//!
//! Circuits, their simulation results and the business metric table live in
//! a single SQLite database. Access goes through the [`CircuitStore`] trait so
//! the HTTP layer never touches SQL directly.
//!
//! Identifiers come from `AUTOINCREMENT` columns and are never reused. A
//! result always references an existing circuit, and a counts outcome always
//! sums to the result's shot count.

mod error;
mod record;
mod sqlite_store;
mod store;

pub use error::{StoreError, StoreResult};
pub use record::{CircuitRecord, JoinedResult, Metric, NewCircuit, NewResult, Outcome};
pub use sqlite_store::{SEED_METRICS, SqliteStore};
pub use store::CircuitStore;
