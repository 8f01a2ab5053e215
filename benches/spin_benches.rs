use bevy::prelude::*;
use bevy_rotating_body::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_tick(c: &mut Criterion) {
    let n = 10_000;
    let dt = 1.0 / 60.0;

    let bodies: Vec<RotatingBody> = (0..n)
        .map(|i| RotatingBody::new(i as f32 * 0.5 - 2500.0))
        .collect();
    let mut transforms = vec![Transform::IDENTITY; n];

    c.bench_function("tick_10k", |b| {
        b.iter(|| {
            for (body, transform) in bodies.iter().zip(transforms.iter_mut()) {
                body.on_frame_tick(transform, dt);
            }
        })
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
