//! Benchmarks for drift computation
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use data_drift_sdk::engine::compute_drift;
use data_drift_sdk::metrics::{categorical_shift, ks_2samp, psi_numeric};
use data_drift_sdk::models::{Column, Table, Value};

/// Deterministic pseudo-random floats in [0, 1)
fn sample(seed: u64, n: usize) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

fn wide_table(seed: u64, rows: usize, shift: f64) -> Table {
    let mut columns = Vec::new();
    for i in 0..10 {
        let values: Vec<Option<f64>> = sample(seed + i, rows).into_iter().map(|v| Some(v + shift)).collect();
        columns.push(Column::from_floats(format!("num_{i}"), &values));
    }
    for i in 0..5 {
        let labels = ["a", "b", "c", "d", "e", "f"];
        let values: Vec<Option<&str>> = sample(seed + 100 + i, rows)
            .into_iter()
            .map(|v| Some(labels[((v + shift).fract() * labels.len() as f64) as usize]))
            .collect();
        columns.push(Column::from_strs(format!("cat_{i}"), &values));
    }
    Table::new(columns).unwrap()
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    for size in [1_000usize, 10_000, 50_000].iter() {
        let baseline = sample(1, *size);
        let current: Vec<f64> = sample(2, *size).into_iter().map(|v| v * 1.1).collect();
        let baseline_values: Vec<Value> = baseline.iter().copied().map(Value::Float).collect();
        let current_values: Vec<Value> = current.iter().copied().map(Value::Float).collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("psi", size), size, |b, _| {
            b.iter(|| psi_numeric(black_box(&baseline_values), black_box(&current_values), 10, 1e-6))
        });
        group.bench_with_input(BenchmarkId::new("ks", size), size, |b, _| {
            b.iter(|| ks_2samp(black_box(&baseline), black_box(&current)))
        });
    }

    let labels: Vec<Value> = (0..10_000).map(|i| Value::from(format!("c{}", i % 40))).collect();
    let shifted: Vec<Value> = (0..10_000).map(|i| Value::from(format!("c{}", (i * 7) % 45))).collect();
    group.bench_function("categorical_shift", |b| {
        b.iter(|| categorical_shift(black_box(&labels), black_box(&shifted), 12))
    });

    group.finish();
}

fn bench_compute_drift(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_drift");
    group.sample_size(10);

    for rows in [1_000usize, 10_000].iter() {
        let baseline = wide_table(1, *rows, 0.0);
        let current = wide_table(50, *rows, 0.1);

        group.throughput(Throughput::Elements((*rows * baseline.n_cols()) as u64));
        group.bench_with_input(BenchmarkId::new("table", rows), rows, |b, _| {
            b.iter(|| compute_drift(black_box(&baseline), black_box(&current)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_metrics, bench_compute_drift);
criterion_main!(benches);
