use criterion::{criterion_group, criterion_main, Criterion};
use quartz_nbt::io::{write_nbt, Flavor};
use quartz_nbt::{NbtCompound, NbtTag};

use minecraft_blueprint_utils::{
    load_blueprint, placement_sequence, plan, MemoryLegacyTable,
};

fn modern_fixture(edge: i16) -> Vec<u8> {
    let mut root = NbtCompound::new();
    root.insert("Width", NbtTag::Short(edge));
    root.insert("Height", NbtTag::Short(edge));
    root.insert("Length", NbtTag::Short(edge));

    let mut palette = NbtCompound::new();
    palette.insert("minecraft:air", NbtTag::Int(0));
    palette.insert("minecraft:stone", NbtTag::Int(1));
    palette.insert("minecraft:dirt", NbtTag::Int(2));
    root.insert("Palette", NbtTag::Compound(palette));

    let volume = edge as usize * edge as usize * edge as usize;
    let cells: Vec<i8> = (0..volume).map(|i| (i % 3) as i8).collect();
    root.insert("Blocks", NbtTag::ByteArray(cells));

    let mut buffer = Vec::new();
    write_nbt(&mut buffer, None, &root, Flavor::Uncompressed).unwrap();
    buffer
}

fn benchmark_modern_decode(c: &mut Criterion) {
    let data = modern_fixture(32);
    let table = MemoryLegacyTable::new();

    c.bench_function("decode 32x32x32 modern", |b| {
        b.iter(|| load_blueprint(&data, "bench.nbt", &table).unwrap())
    });
}

fn benchmark_plan(c: &mut Criterion) {
    let data = modern_fixture(32);
    let table = MemoryLegacyTable::new();
    let blueprint = load_blueprint(&data, "bench.nbt", &table).unwrap();

    c.bench_function("plan 32x32x32 blueprint", |b| {
        b.iter(|| plan(&blueprint.blocks))
    });
}

fn benchmark_placement_sequence(c: &mut Criterion) {
    let data = modern_fixture(32);
    let table = MemoryLegacyTable::new();
    let blueprint = load_blueprint(&data, "bench.nbt", &table).unwrap();

    c.bench_function("placement sequence 32x32x32", |b| {
        b.iter(|| placement_sequence(&blueprint))
    });
}

criterion_group!(
    benches,
    benchmark_modern_decode,
    benchmark_plan,
    benchmark_placement_sequence
);
criterion_main!(benches);
