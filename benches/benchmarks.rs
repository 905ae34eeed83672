use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rsheat::log::create_logger;
use rsheat::sim::boundary::BoundaryConfig;
use rsheat::sim::config::SimulationConfigBuilder;
use rsheat::sim::grid::GridState;
use rsheat::sim::stepper::{ExecutionMode, Simulator};
use rsheat::types::Dimension2;

fn make_grid(n: usize) -> GridState {
    let config = SimulationConfigBuilder::default()
        .dim(Dimension2::new(n, n))
        .time_steps(2)
        .diffusivity(4.0)
        .spatial_step(0.5)
        .initial_temperature(20.0)
        .boundaries(BoundaryConfig::uniform(30.0))
        .build()
        .unwrap();

    return GridState::new(config).unwrap();
}

fn criterion_benchmark(c: &mut Criterion) {
    let log = create_logger();

    let mut group = c.benchmark_group("Stencil Single vs. Parallel");

    for n in [50usize, 200, 800].iter() {
        group.bench_with_input(BenchmarkId::new("Single", n), n, |b, n| {
            let mut sim = Simulator::new(&log, make_grid(*n), ExecutionMode::Single, false);
            b.iter(|| sim.step(0).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("Parallel", n), n, |b, n| {
            let mut sim = Simulator::new(&log, make_grid(*n), ExecutionMode::Parallel, false);
            b.iter(|| sim.step(0).unwrap())
        });
    }

    group.measurement_time(Duration::from_secs(10));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
