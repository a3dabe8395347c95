use benches::bench;
use core::hint::black_box;
use criterion::{criterion_group, BenchmarkId, Criterion};
use glam::DVec3;
use qsim_math::{interpolation, Quaternion};

criterion_group!(benches, rotate, rotation_matrix, interpolate);

fn rotate(c: &mut Criterion) {
    let q = Quaternion::from_axis_angle(DVec3::new(1.0, 2.0, 3.0), 0.8);
    let v = DVec3::new(0.5, -1.0, 2.0);

    c.bench_function(bench!("rotate"), |b| {
        b.iter(|| black_box(q).rotate(black_box(v)));
    });
    c.bench_function(bench!("hamilton_product"), |b| {
        b.iter(|| black_box(q) * black_box(q));
    });
}

fn rotation_matrix(c: &mut Criterion) {
    let q = Quaternion::from_euler(0.1, 0.2, 0.3);
    c.bench_function(bench!("to_rotation_matrix"), |b| {
        b.iter(|| black_box(q).to_rotation_matrix());
    });
}

fn interpolate(c: &mut Criterion) {
    let start = Quaternion::from_rotation_x(0.2);
    let end = Quaternion::from_axis_angle(DVec3::new(0.0, 1.0, 1.0), 2.5);

    let mut group = c.benchmark_group(bench!("interpolate"));
    for t in [0.25, 0.5, 0.75] {
        group.bench_with_input(BenchmarkId::new("slerp", t), &t, |b, &t| {
            b.iter(|| interpolation::slerp(black_box(start), black_box(end), t, true));
        });
        group.bench_with_input(BenchmarkId::new("log", t), &t, |b, &t| {
            b.iter(|| {
                interpolation::log_interpolation(black_box(start), black_box(end), t, true)
            });
        });
    }
    group.finish();
}
