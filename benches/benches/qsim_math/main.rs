use criterion::criterion_main;

mod quaternion;

criterion_main!(quaternion::benches);
