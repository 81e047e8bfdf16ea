//! Performance benchmarks for law evaluation
//!
//! # What We're Measuring
//!
//! 1. **Scalar evaluation**: one `scrit` and one `SFR_ff` per law, the
//!    cost of the closed forms themselves
//! 2. **Vector sweeps**: evaluation over growing parameter arrays
//! 3. **Parallel sweeps**: the same arrays with the rayon path forced on
//!    (only with `--features parallel`)
//!
//! # Expected Results
//!
//! - KM2005 and PN2011 are a handful of `ln`/`erf` calls
//! - Burkhart2018 is slower: its SFR_ff has a power-law tail term
//! - Sweeps scale linearly with the number of values
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench law_evaluation
//!
//! # Only sweeps
//! cargo bench --bench law_evaluation sweep
//!
//! # With the parallel comparison
//! cargo bench --bench law_evaluation --features parallel
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use sflaws::models::LawKind;
use sflaws::physics::{LawData, LawQuantity};
use sflaws::sweep::{self, SweepParameter};

// =================================================================================================
// Scalar Evaluation
// =================================================================================================

/// Benchmark the closed forms of every law at its default cloud
fn benchmark_scalar_laws(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scalar Evaluation");

    for kind in LawKind::ALL {
        let law = kind.build(kind.default_cloud());

        group.bench_function(BenchmarkId::new("scrit", kind), |b| {
            b.iter(|| black_box(law.as_ref()).scrit())
        });

        if kind.has_sfr() {
            group.bench_function(BenchmarkId::new("sfr_ff", kind), |b| {
                b.iter(|| black_box(law.as_ref()).sfr_ff())
            });
        }
    }

    group.finish();
}

// =================================================================================================
// Sweeps
// =================================================================================================

/// Benchmark Mach sweeps of growing size
///
/// The parallel threshold is raised above every size so this group always
/// measures the sequential path.
fn benchmark_mach_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mach sweep");
    let previous = sweep::parallel_threshold();
    sweep::set_parallel_threshold(usize::MAX);

    for kind in [LawKind::KM2005, LawKind::PN2011, LawKind::Burkhart2018] {
        let law = kind.build(kind.default_cloud());

        for size in [10, 100, 1_000, 10_000] {
            let machs = LawData::linspace(1.0, 30.0, size);
            group.throughput(Throughput::Elements(size as u64));

            group.bench_with_input(BenchmarkId::new(kind.name(), size), &machs, |b, machs| {
                b.iter(|| {
                    sweep::evaluate(
                        law.as_ref(),
                        LawQuantity::SfrFf,
                        SweepParameter::Mach,
                        black_box(machs),
                    )
                    .unwrap()
                })
            });
        }
    }

    sweep::set_parallel_threshold(previous);
    group.finish();
}

/// Benchmark a Beta x Mach grid, the layout of the density panels
fn benchmark_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Beta x Mach grid");
    let law = LawKind::KM2005.build(LawKind::KM2005.default_cloud());

    for size in [10, 50, 100] {
        let machs = LawData::linspace(1.0, 30.0, size).to_vec();
        let betas = LawData::logspace(0.1, 2.0, size).to_vec();
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                sweep::evaluate_grid(
                    law.as_ref(),
                    LawQuantity::Scrit,
                    (SweepParameter::Beta, black_box(betas.as_slice())),
                    (SweepParameter::Mach, black_box(machs.as_slice())),
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

/// Sequential versus rayon evaluation of the same sweep
#[cfg(feature = "parallel")]
fn benchmark_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequential vs Parallel");
    let previous = sweep::parallel_threshold();
    let law = LawKind::Burkhart2018.build(LawKind::Burkhart2018.default_cloud());

    for size in [1_000, 10_000, 100_000] {
        let machs = LawData::linspace(1.0, 30.0, size);
        group.throughput(Throughput::Elements(size as u64));

        for (label, threshold) in [("sequential", usize::MAX), ("parallel", 1)] {
            sweep::set_parallel_threshold(threshold);
            group.bench_with_input(BenchmarkId::new(label, size), &machs, |b, machs| {
                b.iter(|| {
                    sweep::evaluate(
                        law.as_ref(),
                        LawQuantity::SfrFf,
                        SweepParameter::Mach,
                        black_box(machs),
                    )
                    .unwrap()
                })
            });
        }
    }

    sweep::set_parallel_threshold(previous);
    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    benchmark_scalar_laws,
    benchmark_mach_sweep,
    benchmark_grid,
    benchmark_parallel
);

#[cfg(not(feature = "parallel"))]
criterion_group!(benches, benchmark_scalar_laws, benchmark_mach_sweep, benchmark_grid);

criterion_main!(benches);
