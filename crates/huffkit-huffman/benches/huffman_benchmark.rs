//! Huffman codec benchmarks.
//!
//! Measures compression and decompression throughput over text-like,
//! binary, and skewed inputs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffkit_core::{Compressor, Decompressor};
use huffkit_huffman::{HuffmanCompressor, HuffmanDecompressor};

fn generate_text_data(size: usize) -> Vec<u8> {
    let pattern = b"The quick brown fox jumps over the lazy dog. ";
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        result.extend_from_slice(pattern);
    }
    result.truncate(size);
    result
}

fn generate_binary_data(size: usize) -> Vec<u8> {
    let pattern: Vec<u8> = (0..=255).collect();
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        result.extend_from_slice(&pattern);
    }
    result.truncate(size);
    result
}

fn generate_skewed_data(size: usize) -> Vec<u8> {
    let pattern = b"aaaaaabbbbcccdde";
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        result.extend_from_slice(pattern);
    }
    result.truncate(size);
    result
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    let compressor = HuffmanCompressor::new();

    for size in [4 * 1024, 64 * 1024] {
        for (name, data) in [
            ("text", generate_text_data(size)),
            ("binary", generate_binary_data(size)),
            ("skewed", generate_skewed_data(size)),
        ] {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(name, size),
                &data,
                |b, data| b.iter(|| compressor.compress(black_box(data)).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    let compressor = HuffmanCompressor::new();
    let decompressor = HuffmanDecompressor::new();

    for size in [4 * 1024, 64 * 1024] {
        for (name, data) in [
            ("text", generate_text_data(size)),
            ("skewed", generate_skewed_data(size)),
        ] {
            let compressed = compressor.compress(&data).unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(name, size),
                &compressed,
                |b, compressed| b.iter(|| decompressor.decompress(black_box(compressed)).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
