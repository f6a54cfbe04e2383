use criterion::{criterion_group, BenchmarkId, Criterion};
use rg_registry::tags::BlockTagRegistry;

use crate::registerbench::{block_names, filled_registries};

fn bench_build_tags(c: &mut Criterion) {
    let names = block_names(4096);
    let registries = filled_registries(&names);
    for tag_count in [8, 64, 512] {
        let source: Vec<(String, Vec<String>)> = (0..tag_count)
            .map(|tag| {
                let members = names.iter().skip(tag).step_by(tag_count).cloned().collect();
                (format!("minecraft:tag_{tag:04}"), members)
            })
            .collect();
        c.bench_with_input(
            BenchmarkId::new("Build block tag registry", tag_count.to_string()),
            &source,
            |b, source| {
                b.iter(|| {
                    BlockTagRegistry::build(source.iter().map(|(name, members)| (name, members)), registries.block_types())
                        .unwrap()
                })
            },
        );
    }
}

criterion_group!(tag_benches, bench_build_tags);
