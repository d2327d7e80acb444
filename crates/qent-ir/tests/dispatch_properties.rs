//! Property tests for gate dispatch and the circuit builders.

use proptest::prelude::*;
use qent_ir::{CircuitBuilder, StandardGate};

fn known_symbol() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["h", "x", "y", "z", "cx"]).prop_map(str::to_string)
}

fn unknown_symbol() -> impl Strategy<Value = String> {
    "[A-Za-z_]{0,6}".prop_filter("must not be a gate symbol", |s| {
        StandardGate::from_name(s).is_none()
    })
}

proptest! {
    #[test]
    fn unknown_symbols_never_change_the_circuit(
        qubits in 1i64..6,
        known in prop::collection::vec(known_symbol(), 0..12),
        noise in prop::collection::vec(unknown_symbol(), 1..12),
    ) {
        let clean = CircuitBuilder::declarative("clean", qubits, &known).unwrap();

        // Interleave unknown symbols between the known ones.
        let mut mixed: Vec<String> = Vec::new();
        let mut noise_iter = noise.iter().cycle();
        for symbol in &known {
            mixed.push(noise_iter.next().cloned().unwrap_or_default());
            mixed.push(symbol.clone());
        }
        mixed.extend(noise.iter().cloned());

        let noisy = CircuitBuilder::declarative("noisy", qubits, &mixed).unwrap();

        prop_assert_eq!(&noisy.gates_used, &clean.gates_used);
        prop_assert_eq!(noisy.depth, clean.depth);
    }

    #[test]
    fn one_qubit_circuits_never_contain_cx(
        gates in prop::collection::vec(known_symbol(), 0..20),
    ) {
        let built = CircuitBuilder::declarative("one", 1, &gates).unwrap();
        let expected: Vec<&String> = gates.iter().filter(|g| g.as_str() != "cx").collect();

        prop_assert!(!built.gates_used.iter().any(|g| g == "cx"));
        prop_assert_eq!(built.gates_used.len(), expected.len());
        // Every applied gate lands on qubit 0, so each one adds a layer.
        prop_assert_eq!(built.depth, expected.len());
    }

    #[test]
    fn trace_fits_within_depth_times_width(
        qubits in 1i64..6,
        gates in prop::collection::vec(known_symbol(), 0..20),
    ) {
        let built = CircuitBuilder::declarative("bounded", qubits, &gates).unwrap();
        prop_assert!(built.gates_used.len() <= built.depth * qubits as usize);
    }
}
