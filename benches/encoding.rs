use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffman::{decode, encode};

fn corpus(len: usize) -> Vec<u8> {
    b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
      incididunt ut labore et dolore magna aliqua. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    for len in [1 << 10, 1 << 14, 1 << 18] {
        let raw = corpus(len);
        let encoded = encode(&raw).expect("encoding failed");
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("encode", len), &raw, |bencher, raw| {
            bencher.iter(|| encode(raw).expect("encoding failed"))
        });

        group.bench_with_input(BenchmarkId::new("decode", len), &encoded, |bencher, encoded| {
            bencher.iter(|| decode(encoded).expect("decoding failed"))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
