//! Criterion benchmarks for hydroecon_models hot paths.
//!
//! Measures expected annual damage integration across curve sizes, project
//! annualisation with and without an expenditure schedule, and one seasonal
//! flood simulation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hydroecon_models::agriculture::{AgriculturalDamageLibrary, SeasonalSimulation};
use hydroecon_models::finance::{annualizer, AnnualizerInputs, ExpenditureSchedule, FutureCost};
use hydroecon_models::flood::ead;

/// Generate an exceedance curve with `n` points in shuffled order.
fn generate_curve(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let p = 0.99 * (1.0 - i as f64 / n as f64) + 0.001;
            (p, 1_000.0 * (1.0 - p).powi(2))
        })
        .collect();
    // Deterministic interleave so the sort has work to do
    points.sort_by_key(|&(p, _)| ((p * 1e6) as u64).wrapping_mul(0x9e37_79b9) % 1_000_003);
    points.into_iter().unzip()
}

fn bench_ead(c: &mut Criterion) {
    let mut group = c.benchmark_group("ead");

    for size in [8, 64, 1024] {
        let (probabilities, damages) = generate_curve(size);
        group.bench_with_input(
            BenchmarkId::new("compute", size),
            &(&probabilities, &damages),
            |b, (p, d)| {
                b.iter(|| ead::compute(black_box(p), black_box(d)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_annualizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("annualizer");

    let even = AnnualizerInputs::new(25_000_000.0, 0.0275, 150_000.0, 2_400_000.0)
        .with_periods(50)
        .with_construction_months(36);
    group.bench_function("even_spread", |b| {
        b.iter(|| annualizer::compute(black_box(&even)).unwrap());
    });

    let scheduled = even
        .clone()
        .with_idc_schedule(ExpenditureSchedule::new(vec![25_000_000.0 / 36.0; 36]))
        .with_future_costs((1..=10).map(|i| FutureCost::new(500_000.0, i * 5)).collect());
    group.bench_function("scheduled", |b| {
        b.iter(|| annualizer::compute(black_box(&scheduled)).unwrap());
    });

    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let library = AgriculturalDamageLibrary::global();
    let region = library.region("Upper Midwest").unwrap();
    let resolved = library
        .crop("Corn (Grain)")
        .unwrap()
        .resolve_for_region(region.growing_season_shift_days);
    let simulation = SeasonalSimulation::new(1_000).with_seed(42);

    c.bench_function("seasonal_simulation_1000", |b| {
        b.iter(|| simulation.run(black_box(&resolved), black_box(region)).unwrap());
    });
}

criterion_group!(benches, bench_ead, bench_annualizer, bench_simulation);
criterion_main!(benches);
