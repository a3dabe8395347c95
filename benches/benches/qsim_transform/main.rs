use criterion::criterion_main;

mod resolve;

criterion_main!(resolve::benches);
