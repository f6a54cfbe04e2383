use criterion::criterion_main;

pub mod registerbench;
pub mod tagbench;

criterion_main!(registerbench::register_benches, tagbench::tag_benches);
