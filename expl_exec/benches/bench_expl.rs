//! # Exploration Benchmark

use criterion::{criterion_group, criterion_main, Criterion};

use expl_lib::auto::{
    frontier::{AttemptedSet, Frontier},
    path::Path,
    select::select_best,
    traj::{synthesize, TrajParams, YawPolicy},
};
use nalgebra::Vector3;

fn expl_benchmark(c: &mut Criterion) {
    // ---- Build a field of frontiers on a grid ----

    let frontiers: Vec<Frontier> = (0..50)
        .flat_map(|i| {
            (0..50).map(move |j| {
                Frontier::new(Vector3::new(
                    (i as f64) * 0.8 - 20.0,
                    (j as f64) * 0.8 - 20.0,
                    1.5,
                ))
            })
        })
        .collect();

    // Attempt every other frontier
    let mut attempted = AttemptedSet::new(0.2);
    for f in frontiers.iter().step_by(2) {
        attempted.mark(f.center_m);
    }

    let position = Vector3::new(0.3, -0.7, 1.5);

    c.bench_function("select_best", |b| {
        b.iter(|| select_best(&position, 0.6, &frontiers, &attempted))
    });

    // ---- Long path for trajectory synthesis ----

    let path = Path::direct(position, Vector3::new(40.0, 25.0, 6.0), 0.05).unwrap();

    for &policy in &[
        YawPolicy::PointFacing,
        YawPolicy::FollowVelocity,
        YawPolicy::AnticipateVelocity,
        YawPolicy::Constant,
    ] {
        let params = TrajParams {
            yaw_policy: policy,
            ..Default::default()
        };

        c.bench_function(&format!("synthesize::{:?}", policy), |b| {
            b.iter(|| synthesize(&path, &params, 0.6))
        });
    }
}

criterion_group!(benches, expl_benchmark);
criterion_main!(benches);
