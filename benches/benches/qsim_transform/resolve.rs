use benches::bench;
use core::hint::black_box;
use criterion::{criterion_group, BenchmarkId, Criterion};
use glam::DVec3;
use qsim_math::Quaternion;
use qsim_transform::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

criterion_group!(benches, resolve_world_poses, pose_of);

/// Builds a random tree of `count` frames below `fixed`.
fn random_graph(count: usize) -> FrameManager {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut manager = FrameManager::new(Frame::root("fixed"));
    let mut names = vec!["fixed".to_owned()];

    for i in 0..count {
        let parent = names[rng.random_range(0..names.len())].clone();
        let axis = DVec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        let pose = Pose::new(
            Quaternion::from_axis_angle(axis, rng.random_range(-3.0..3.0)),
            DVec3::new(rng.random(), rng.random(), rng.random()),
        );
        let name = format!("frame_{i}");
        manager.add_frame(Frame::new(name.clone(), pose, parent)).unwrap();
        names.push(name);
    }
    manager
}

fn resolve_world_poses(c: &mut Criterion) {
    let mut group = c.benchmark_group(bench!("resolve_world_poses"));
    for count in [10, 100, 1_000] {
        let manager = random_graph(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &manager, |b, manager| {
            b.iter(|| black_box(manager).resolve_world_poses());
        });
    }
    group.finish();
}

fn pose_of(c: &mut Criterion) {
    let mut group = c.benchmark_group(bench!("pose_of"));
    for count in [10, 100, 1_000] {
        let manager = random_graph(count);
        let last = format!("frame_{}", count - 1);
        let solid = Solid::new("solid", Pose::from_xyz(0.0, 0.0, 1.0), last);
        group.bench_with_input(BenchmarkId::from_parameter(count), &manager, |b, manager| {
            b.iter(|| black_box(manager).pose_of(&solid, "frame_0"));
        });
    }
    group.finish();
}
