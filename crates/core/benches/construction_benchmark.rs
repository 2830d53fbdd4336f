//! Benchmarks pour la construction de codes ADN

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dnacode_core::{build_dna_code, linear_code, minimum_distance, ConstraintSet, GeneratorMatrix};
use std::time::Duration;

/// Matrice systématique k×2k avec une partie de parité circulante
fn systematic_generator(k: usize) -> GeneratorMatrix {
    let rows = (0..k)
        .map(|i| {
            let mut row = vec![0u8; 2 * k];
            row[i] = 1;
            for j in 0..k {
                if (i + j) % 3 != 0 {
                    row[k + j] = 1;
                }
            }
            row
        })
        .collect();
    GeneratorMatrix::new(rows).unwrap()
}

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("DNA Code Construction");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for k in [8usize, 12, 16] {
        let generator = systematic_generator(k);
        group.bench_with_input(BenchmarkId::new("linear_code", k), &generator, |b, g| {
            b.iter(|| linear_code(black_box(g)));
        });
        group.bench_with_input(BenchmarkId::new("all_constraints", k), &generator, |b, g| {
            b.iter(|| build_dna_code(black_box(g), ConstraintSet::all(), Some(k / 2)));
        });
    }

    group.finish();
}

fn benchmark_minimum_distance(c: &mut Criterion) {
    let generator = systematic_generator(10);
    let code = linear_code(&generator).unwrap();

    c.bench_function("minimum_distance_k10", |b| {
        b.iter(|| minimum_distance(black_box(&code)));
    });
}

criterion_group!(benches, benchmark_construction, benchmark_minimum_distance);
criterion_main!(benches);
