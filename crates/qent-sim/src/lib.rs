//! Qent Local Statevector Simulator
//!
//! Exact statevector simulation of [`qent_ir::Circuit`]s, with two modes:
//!
//! - **Exact**: [`Simulator::statevector`] returns the final amplitude of
//!   every basis state. No measurement, no randomness.
//! - **Sampled**: [`Simulator::sample`] measures a copy of the circuit and
//!   draws a number of shots from the outcome distribution, returning a
//!   [`Counts`] frequency table.
//!
//! [`Simulator::run`] does both over the same circuit, which is how the
//! simulation endpoint uses it.
//!
//! # Bit ordering
//!
//! Qubit 0 is the least-significant bit of a basis index and the
//! **rightmost** character of a bitstring: on three qubits, `X` on qubit 0
//! yields `"001"`.
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//!
//! # Example
//!
//! ```rust
//! use qent_ir::CircuitBuilder;
//! use qent_sim::Simulator;
//!
//! let built = CircuitBuilder::declarative("bell", 2, ["h", "cx"]).unwrap();
//! let report = Simulator::new().with_seed(7).run(&built.circuit, 1000).unwrap();
//!
//! assert_eq!(report.counts.total_shots(), 1000);
//! assert_eq!(report.counts.get("01") + report.counts.get("10"), 0);
//! assert_eq!(report.statevector.len(), 4);
//! ```

mod counts;
mod engine;
mod error;
mod statevector;

pub use counts::Counts;
pub use engine::{DEFAULT_MAX_QUBITS, SimulationReport, Simulator};
pub use error::{SimError, SimResult};
pub use statevector::{Amplitude, Statevector};
