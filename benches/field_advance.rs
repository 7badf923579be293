//! Benchmarks for the particle field frame loop.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparkfeed::{FieldConfig, ParticleField, Surface, Rgb, Vec2};

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for bursts in [1usize, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(bursts), &bursts, |b, &bursts| {
            b.iter_batched(
                || {
                    let mut field =
                        ParticleField::mount(1280, 720, FieldConfig::default()).with_seed(1);
                    for i in 0..bursts {
                        field.spawn(100.0 + i as f32 * 20.0, 360.0);
                    }
                    field
                },
                |mut field| black_box(field.advance()),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface");

    group.bench_function("fade_1280x720", |b| {
        let mut surface = Surface::new(1280, 720, Rgb::BLACK);
        b.iter(|| surface.fade(Rgb::BLACK, black_box(0.15)))
    });

    group.bench_function("fill_circle_r2", |b| {
        let mut surface = Surface::new(1280, 720, Rgb::BLACK);
        b.iter(|| surface.fill_circle(black_box(Vec2::new(640.0, 360.0)), 2.0, Rgb([255, 51, 51])))
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_surface);
criterion_main!(benches);
