use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use rg_registry::identifier::LegacyId;
use rg_registry::types::TypeRegistries;

pub fn block_names(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("minecraft:block_{idx:05}")).collect()
}

pub fn filled_registries(names: &[String]) -> TypeRegistries {
    let mut registries = TypeRegistries::new();
    for (idx, name) in names.iter().enumerate() {
        registries.register_block(name.as_str(), LegacyId(idx as i32));
    }
    registries
}

fn bench_register_blocks(c: &mut Criterion) {
    for count in [64, 1024, 16384] {
        let names = block_names(count);
        c.bench_with_input(
            BenchmarkId::new("Register blocks with item shadows", count.to_string()),
            &names,
            |b, names| b.iter(|| filled_registries(names)),
        );
    }
}

fn bench_lookup(c: &mut Criterion) {
    for count in [64, 1024, 16384] {
        let names = block_names(count);
        let registries = filled_registries(&names);
        c.bench_with_input(
            BenchmarkId::new("Lookup block by identifier and legacy id", count.to_string()),
            &names,
            |b, names| {
                b.iter(|| {
                    let mut found = 0usize;
                    for (idx, name) in names.iter().enumerate() {
                        found += registries.block_types().get(black_box(name)).is_some() as usize;
                        found += registries
                            .item_types()
                            .get_from_legacy(black_box(LegacyId(idx as i32)))
                            .is_some() as usize;
                    }
                    found
                })
            },
        );
    }
}

criterion_group!(register_benches, bench_register_blocks, bench_lookup);
