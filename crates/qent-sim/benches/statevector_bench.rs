//! Benchmarks for the statevector simulator
//!
//! Run with: cargo bench -p qent-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qent_ir::CircuitBuilder;
use qent_sim::Simulator;

/// Benchmark exact simulation of the canonical entangling circuit
fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    let sim = Simulator::new();

    for num_qubits in &[2i64, 6, 10, 14] {
        let built = CircuitBuilder::hadamard_all_chain("bench", *num_qubits).unwrap();
        group.bench_with_input(
            BenchmarkId::new("hadamard_all_chain", num_qubits),
            &built.circuit,
            |b, circuit| {
                b.iter(|| sim.statevector(black_box(circuit)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark shot sampling
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let sim = Simulator::new().with_seed(7);
    let built = CircuitBuilder::hadamard_all_chain("bench", 8).unwrap();

    for shots in &[1024u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("shots", shots), shots, |b, &s| {
            b.iter(|| sim.sample(black_box(&built.circuit), s).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_exact, bench_sampling);
criterion_main!(benches);
