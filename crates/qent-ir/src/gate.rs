//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// The gates the service knows how to build and simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Controlled-X (CNOT) gate.
    CX,
}

impl StandardGate {
    /// Every supported gate, in symbol order.
    pub const ALL: [StandardGate; 5] = [
        StandardGate::H,
        StandardGate::X,
        StandardGate::Y,
        StandardGate::Z,
        StandardGate::CX,
    ];

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::CX => "cx",
        }
    }

    /// Look up a gate by its symbol.
    ///
    /// Matching is exact: `"H"` or `" h"` are not gate symbols.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H | StandardGate::X | StandardGate::Y | StandardGate::Z => 1,
            StandardGate::CX => 2,
        }
    }
}

impl std::fmt::Display for StandardGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for gate in StandardGate::ALL {
            assert_eq!(StandardGate::from_name(gate.name()), Some(gate));
        }
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        assert_eq!(StandardGate::from_name("H"), None);
        assert_eq!(StandardGate::from_name("CX"), None);
        assert_eq!(StandardGate::from_name("cnot"), None);
        assert_eq!(StandardGate::from_name(""), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::Z.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
    }
}
