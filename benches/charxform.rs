use criterion::{criterion_group, criterion_main, Criterion};

use core::hint::black_box;

use charxform::tag::{Utf16Le, Utf32, Utf8};
use charxform::{convert, length_for};

fn bench(c: &mut Criterion) {
    // 64 MB of mixed ASCII/non-ASCII UTF-8 text, repeated.
    let size = 64_000_000;
    let text = "Hello, 世界! 🌍 This is a UTF-8 benchmark with emoji 🚀 and Unicode characters: αβγδε ñ\n";

    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        data.extend_from_slice(text.as_bytes());
    }

    let ascii = "the quick brown fox jumps over the lazy dog\n".repeat(size / 45);

    let mut group = c.benchmark_group("convert");
    group.throughput(criterion::Throughput::BytesDecimal(data.len() as u64));
    group.sample_size(10);

    group.bench_function("utf8_to_utf32/mixed", |b| {
        let len = length_for::<Utf8, Utf32>(black_box(&data));
        let mut out = vec![0u32; len];
        b.iter(|| {
            let r = convert::<Utf8, Utf32>(black_box(&data), &mut out);
            assert!(r.error.is_none());
        })
    });

    group.bench_function("utf8_to_utf32/ascii_fast_path", |b| {
        let len = length_for::<Utf8, Utf32>(ascii.as_bytes());
        let mut out = vec![0u32; len];
        b.iter(|| {
            let r = convert::<Utf8, Utf32>(black_box(ascii.as_bytes()), &mut out);
            assert!(r.error.is_none());
        })
    });

    group.bench_function("utf8_to_utf16le/mixed", |b| {
        let len = length_for::<Utf8, Utf16Le>(black_box(&data));
        let mut out = vec![0u16; len];
        b.iter(|| {
            let r = convert::<Utf8, Utf16Le>(black_box(&data), &mut out);
            assert!(r.error.is_none());
        })
    });

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
