use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffcode::cs::compression::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, encode, HuffmanCodec,
};

const SIZES: &[usize] = &[256, 4096, 65536];

fn sample_text(len: usize) -> String {
    "the quick brown fox jumps over the lazy dog - 0123456789 "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    for &size in SIZES {
        let text = sample_text(size);
        group.throughput(Throughput::Bytes(size as u64));

        let tree = build_huffman_tree(&build_frequency_table(&text)).unwrap();
        let codes = build_code_table(&tree);

        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            b.iter(|| encode(black_box(text), &codes).unwrap());
        });

        let encoded = encode(&text, &codes).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded), &tree).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("pipeline", size), &text, |b, text| {
            b.iter(|| HuffmanCodec::compress(black_box(text)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_huffman);
criterion_main!(benches);
