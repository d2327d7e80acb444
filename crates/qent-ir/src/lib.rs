//! Qent Circuit Representation
//!
//! This crate holds the circuit model shared by the simulator, the store and
//! the HTTP service. It is intentionally small: the service only ever builds
//! circuits from the five gates it knows about (H, X, Y, Z and CX) plus
//! barriers and measurements.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`]
//! - **Gates**: [`StandardGate`], the closed set of supported gates
//! - **Instructions**: [`Instruction`] combining a gate or measurement with its operands
//! - **Circuit**: [`Circuit`], a validated instruction list that tracks its own depth
//! - **Dispatch**: [`dispatch`] maps request gate symbols onto circuit mutations
//! - **Builders**: [`CircuitBuilder`] for declarative and canonical entanglement circuits
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qent_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.depth(), 2);
//! assert_eq!(circuit.gate_trace(), vec!["h", "cx"]);
//!
//! // Measuring works on a copy; the original stays unmeasured.
//! let measured = circuit.measured().unwrap();
//! assert_eq!(measured.depth(), 3);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Example: Declarative Construction
//!
//! ```rust
//! use qent_ir::CircuitBuilder;
//!
//! // Unknown symbols and unsatisfiable gates are skipped, not rejected.
//! let built = CircuitBuilder::declarative("request", 1, ["h", "cx", "foo", "z"]).unwrap();
//! assert_eq!(built.gates_used, vec!["h", "z"]);
//! assert_eq!(built.depth, 2);
//! ```

pub mod builder;
pub mod circuit;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use builder::{BuiltCircuit, CircuitBuilder, Entanglement};
pub use circuit::Circuit;
pub use dispatch::dispatch;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
