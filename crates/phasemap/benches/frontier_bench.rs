//! Criterion benchmarks for the start-point frontier.
//! Focus sizes: n in {10, 100, 500} candidate points, roughly half of them duplicates.
//! Results: by default under target/criterion.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::DVector;
use phasemap::compset::{CompositionSet, EqTol};
use phasemap::search::find_three_phase_start_points;
use phasemap::start_point::{Direction, StartPoint, StartPointsList};
use rand::{rngs::StdRng, Rng, SeedableRng};

const PHASES: [&str; 4] = ["LIQUID", "FCC_A1", "BCC_A2", "HCP_A3"];

fn random_point(rng: &mut StdRng) -> StartPoint {
    // coarse grid so that a good share of draws collide within tolerance
    let t = 300.0 + 10.0 * rng.gen_range(0..50) as f64;
    let x = 0.05 * rng.gen_range(0..20) as f64;
    let a = rng.gen_range(0..PHASES.len());
    let b = (a + 1 + rng.gen_range(0..PHASES.len() - 1)) % PHASES.len();
    let direction = if rng.gen::<bool>() {
        Direction::Positive
    } else {
        Direction::Negative
    };
    StartPoint::from_owned(
        t,
        direction,
        vec![
            CompositionSet::new(PHASES[a], t, x, DVector::from_element(2, 0.5)),
            CompositionSet::new(PHASES[b], t, x + 0.1, DVector::from_element(2, 0.5)),
        ],
    )
}

fn candidates(n: usize, seed: u64) -> Vec<StartPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| random_point(&mut rng)).collect()
}

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier");
    for &n in &[10usize, 100, 500] {
        group.bench_with_input(BenchmarkId::new("add_start_point", n), &n, |b, &n| {
            b.iter_batched(
                || candidates(n, 41),
                |pts| {
                    let mut frontier = StartPointsList::new(EqTol::default());
                    for sp in pts {
                        let _ = frontier.add_start_point(sp);
                    }
                    frontier
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("drain", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut frontier = StartPointsList::new(EqTol::default());
                    for sp in candidates(n, 42) {
                        frontier.force_add_start_point(sp);
                    }
                    frontier
                },
                |mut frontier| {
                    let mut popped = 0usize;
                    while frontier.get_next_start_point().is_some() {
                        popped += 1;
                    }
                    popped
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let cs = |p: &str, t: f64, x: f64| Arc::new(CompositionSet::new(p, t, x, DVector::zeros(2)));
    let prev = vec![cs("FCC_A1", 1001.0, 0.1), cs("LIQUID", 1001.0, 0.4)];
    let new = vec![
        cs("FCC_A1", 1000.0, 0.1),
        cs("LIQUID", 1000.0, 0.4),
        cs("BCC_A2", 1000.0, 0.8),
    ];
    c.bench_function("split_three_phase", |b| {
        b.iter(|| find_three_phase_start_points(&new, &prev, Direction::Negative))
    });
}

criterion_group!(benches, bench_frontier, bench_split);
criterion_main!(benches);
