//! Criterion benchmarks for u-tsp move finders and drivers.
//!
//! Uses uniformly random scenarios with fixed seeds so runs compare
//! like with like.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::aco::{AcoConfig, AcoRunner};
use u_tsp::construct::{greedy, random_walk};
use u_tsp::deadline::Deadline;
use u_tsp::geometry::Scenario;
use u_tsp::ls::{LocalSearchConfig, LocalSearchRunner};
use u_tsp::moves::{Acceptance, MoveFinder, NodeRelocationFinder, SegmentFlipFinder};
use u_tsp::random::create_rng;
use u_tsp::sa::{SaConfig, SaRunner, SwapAnnealer, SwapSaConfig};
use u_tsp::tour::Tour;

fn scenario(n: usize) -> Scenario {
    let mut rng = create_rng(42);
    Scenario::generate(n, 1000.0, &mut rng)
}

/// Exhaustive scans of a 2-opt-optimal tour, so every pair is visited.
fn bench_finders(c: &mut Criterion) {
    let mut group = c.benchmark_group("finders");
    group.sample_size(20);

    for &n in &[50usize, 200, 500] {
        let scenario = scenario(n);
        let config = LocalSearchConfig::default().with_seed(42);
        let optimum = LocalSearchRunner::run(&scenario, &config).unwrap();
        let tour = Tour::from_order(&scenario, &optimum.tour).unwrap();
        let deadline = Deadline::unlimited();

        group.bench_with_input(BenchmarkId::new("flip", n), &tour, |b, t| {
            let mut rng = create_rng(1);
            b.iter(|| {
                let outcome = SegmentFlipFinder.find(
                    black_box(t),
                    Acceptance::improving(),
                    &deadline,
                    &mut rng,
                );
                black_box(outcome)
            })
        });
        group.bench_with_input(BenchmarkId::new("relocation", n), &tour, |b, t| {
            let mut rng = create_rng(1);
            b.iter(|| {
                let outcome = NodeRelocationFinder.find(
                    black_box(t),
                    Acceptance::improving(),
                    &deadline,
                    &mut rng,
                );
                black_box(outcome)
            })
        });
    }
    group.finish();
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for &n in &[100usize, 1000] {
        let scenario = scenario(n);
        group.bench_with_input(BenchmarkId::new("greedy", n), &scenario, |b, s| {
            b.iter(|| black_box(greedy(black_box(s))))
        });
        group.bench_with_input(BenchmarkId::new("random_walk", n), &scenario, |b, s| {
            let mut rng = create_rng(7);
            b.iter(|| black_box(random_walk(black_box(s), &mut rng)))
        });
    }
    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");
    group.sample_size(10);

    for &n in &[50usize, 100, 200] {
        let scenario = scenario(n);
        let config = LocalSearchConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(scenario, config),
            |b, (s, c)| {
                b.iter(|| {
                    let result = LocalSearchRunner::run(black_box(s), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealing");
    group.sample_size(10);

    for &n in &[50usize, 100] {
        let scenario = scenario(n);
        let config = SaConfig::default().with_time_limit_ms(50).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(scenario, config), |b, (s, c)| {
            b.iter(|| {
                let result = SaRunner::run(black_box(s), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_swap_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_annealing");
    group.sample_size(10);

    for &n in &[50usize, 100] {
        let scenario = scenario(n);
        let config = SwapSaConfig::default().with_time_limit_ms(50).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(scenario, config), |b, (s, c)| {
            b.iter(|| {
                let result = SwapAnnealer::run(black_box(s), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_ant_colony(c: &mut Criterion) {
    let mut group = c.benchmark_group("ant_colony");
    group.sample_size(10);

    for &n in &[30usize, 60] {
        let scenario = scenario(n);
        let config = AcoConfig::default().with_max_iterations(20).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(scenario, config), |b, (s, c)| {
            b.iter(|| {
                let result = AcoRunner::run(black_box(s), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_finders,
    bench_construct,
    bench_local_search,
    bench_annealing,
    bench_swap_annealing,
    bench_ant_colony
);
criterion_main!(benches);
