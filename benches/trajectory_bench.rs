//! Benchmarks for trajectory integration, coloring, and the reveal tick.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lorenz_viz::animation::RevealAnimation;
use lorenz_viz::lorenz::{IntegrationConfig, SimulationParameters, Trajectory};
use lorenz_viz::renderer::lines::trajectory_vertices;
use lorenz_viz::util::color::{color_for, ColorMode};
use web_time::{Duration, Instant};

fn integration_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("trajectory_compute");
    for count in [5_000, 50_000, 200_000] {
        let Ok(config) = IntegrationConfig::new(count, 0.001) else {
            continue;
        };
        group.bench_function(format!("{count}_points"), |b| {
            b.iter(|| {
                black_box(Trajectory::compute(
                    SimulationParameters::default(),
                    config,
                ))
            });
        });
    }
    group.finish();
}

fn recompute_benchmark(c: &mut Criterion) {
    let mut trajectory = Trajectory::compute(
        SimulationParameters::default(),
        IntegrationConfig::default(),
    );
    let mut rho = 28.0;
    c.bench_function("trajectory_recompute_50k", |b| {
        b.iter(|| {
            rho += 0.001;
            trajectory.recompute(SimulationParameters {
                rho,
                ..SimulationParameters::default()
            });
            black_box(trajectory.len())
        });
    });
}

fn color_benchmark(c: &mut Criterion) {
    for mode in ColorMode::ALL {
        c.bench_function(&format!("color_for_{mode}"), |b| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for i in 0..50_000 {
                    acc += color_for(black_box(i), 50_000, mode)[0];
                }
                black_box(acc)
            });
        });
    }
}

fn vertex_build_benchmark(c: &mut Criterion) {
    let trajectory = Trajectory::compute(
        SimulationParameters::default(),
        IntegrationConfig::default(),
    );
    c.bench_function("trajectory_vertices_50k_fade", |b| {
        b.iter(|| {
            black_box(trajectory_vertices(
                trajectory.points(),
                trajectory.len(),
                ColorMode::Fade,
            ))
        });
    });
}

fn reveal_tick_benchmark(c: &mut Criterion) {
    let start = Instant::now();
    let mut reveal = RevealAnimation::new(true, 20.0, start);
    let now = start + Duration::from_secs(5);
    c.bench_function("reveal_tick", |b| {
        b.iter(|| black_box(reveal.tick(black_box(now), 50_000)));
    });
}

criterion_group!(
    benches,
    integration_benchmark,
    recompute_benchmark,
    color_benchmark,
    vertex_build_benchmark,
    reveal_tick_benchmark
);
criterion_main!(benches);
