//! Generation benchmarks for both generators.
//!
//! The rank graph's attachment scan is quadratic in `N * M`, so shapes stay
//! modest; Kronecker inputs use the same vertex and edge counts.
#![allow(missing_docs, reason = "Criterion macros generate undocumented items")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use brg_benches::{error::BenchSetupError, fixtures::FIXTURE_SEED, params::GraphBenchParams};
use brg_core::BrgBuilder;

const SHAPES: &[GraphBenchParams] = &[
    GraphBenchParams {
        vertex_count: 256,
        block_size: 4,
    },
    GraphBenchParams {
        vertex_count: 1024,
        block_size: 4,
    },
    GraphBenchParams {
        vertex_count: 1024,
        block_size: 16,
    },
];

fn generation_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("generation");
    group.sample_size(10);

    for params in SHAPES {
        let brg = BrgBuilder::new()
            .with_vertex_count(params.vertex_count)
            .with_block_size(params.block_size)
            .with_seed(FIXTURE_SEED)
            .build()?;
        group.bench_with_input(BenchmarkId::new("brg", params), &brg, |b, brg| {
            b.iter(|| black_box(brg.generate()));
        });

        brg_kronecker::validate_for_vertices(params.vertex_count, params.block_size)?;
        group.bench_with_input(BenchmarkId::new("skg", params), params, |b, params| {
            b.iter(|| {
                black_box(brg_kronecker::generate_for_vertices(
                    params.vertex_count,
                    params.block_size,
                    (FIXTURE_SEED, FIXTURE_SEED + 1),
                ))
            });
        });
    }

    group.finish();
    Ok(())
}

fn generation(c: &mut Criterion) {
    if let Err(err) = generation_impl(c) {
        panic!("generation benchmark setup failed: {err}");
    }
}

criterion_group!(benches, generation);
criterion_main!(benches);
