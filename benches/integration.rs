use std::fs;

use criterion::{criterion_group, criterion_main, Criterion};
use huffman::{decode_file, encode_file};
use tempfile::tempdir;

fn criterion_benchmark(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir err");
    let raw = dir.path().join("raw.txt");
    let coded = dir.path().join("raw_encoded.hc");
    let decoded = dir.path().join("raw_decoded.txt");
    let text: Vec<u8> = (0..20_000u32)
        .flat_map(|i| format!("line {i}: {}\n", i.wrapping_mul(2654435761)).into_bytes())
        .collect();
    fs::write(&raw, text).expect("file err");

    let mut integration = c.benchmark_group("integration");

    integration.bench_function("encode", |bencher| {
        bencher.iter(|| encode_file(&raw, &coded).expect("io err"))
    });

    // make sure the container exists
    encode_file(&raw, &coded).expect("io err");

    integration.bench_function("decode", |bencher| {
        bencher.iter(|| decode_file(&coded, &decoded).expect("io err"))
    });

    integration.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
