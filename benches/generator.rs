//! Data generation benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use optbench::generator::DataGenerator;

fn benchmark_clients(c: &mut Criterion) {
    c.bench_function("generate_clients_10k", |b| {
        b.iter(|| {
            let mut gen = DataGenerator::with_seed(42);
            black_box(gen.generate_clients(10_000))
        })
    });
}

fn benchmark_orders(c: &mut Criterion) {
    let mut gen = DataGenerator::with_seed(42);
    let clients = gen.generate_clients(1_000);

    c.bench_function("generate_orders_100k", |b| {
        b.iter(|| {
            let mut gen = DataGenerator::with_seed(42);
            black_box(gen.generate_orders(100_000, &clients, 1_000))
        })
    });
}

criterion_group!(benches, benchmark_clients, benchmark_orders);
criterion_main!(benches);
