//! Benchmarks for per-request media parsing
//!
//! Covers the work done before any file I/O: range header parsing,
//! segment decoding, and content-type lookup.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio_media::{content_type_for_path, parse_range_header, MediaRequest};
use std::path::Path;

fn bench_range_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_header");
    let file_size = 250 * 1024 * 1024;

    for header in ["bytes=0-", "bytes=1048576-2097151", "bytes=-65536", "bytes=abc-def"] {
        group.bench_with_input(BenchmarkId::from_parameter(header), header, |b, header| {
            b.iter(|| {
                let range = parse_range_header(black_box(header)).map(|spec| spec.resolve(file_size));
                black_box(range)
            });
        });
    }

    group.finish();
}

fn bench_segment_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_decoding");

    let paths = [
        ("plain", "Football/images/field.png"),
        ("spaces", "Football%20AI/images/shot%201.png"),
        ("unicode", "Caf%C3%A9%20Project/d%C3%A9mo/%E2%9C%93%20final.mp4"),
    ];

    for (name, raw) in paths {
        group.bench_with_input(BenchmarkId::from_parameter(name), raw, |b, raw| {
            b.iter(|| black_box(MediaRequest::from_raw_path(black_box(raw)).map(|r| r.relative_path())));
        });
    }

    group.finish();
}

fn bench_content_type(c: &mut Criterion) {
    let paths = [
        Path::new("a/shot.png"),
        Path::new("a/clip.MOV"),
        Path::new("a/archive.tar.gz"),
        Path::new("a/README"),
    ];

    c.bench_function("content_type_for_path", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(content_type_for_path(black_box(path)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_range_header,
    bench_segment_decoding,
    bench_content_type
);
criterion_main!(benches);
