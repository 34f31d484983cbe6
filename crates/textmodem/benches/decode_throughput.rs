//! Benchmark – streaming UTF-8 decoding.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use textmodem::{
    PolicyFn, decode_latin1, decode_utf8, decode_utf8_lenient, produce_chunks, replacing,
    stream_decode_utf8_with,
};

/// Produce a deterministic payload of exactly `target_len` bytes mixing
/// ASCII runs with two-, three- and four-byte sequences, ending on a code
/// point boundary so that the whole payload is well-formed.
fn make_payload(target_len: usize) -> Vec<u8> {
    let pattern = "streaming text: wörld ☃ 💖 ".as_bytes();
    let mut payload = Vec::with_capacity(target_len + pattern.len());
    while payload.len() < target_len {
        payload.extend_from_slice(pattern);
    }
    payload.truncate(target_len);
    // Drop any partial trailing code point.
    while core::str::from_utf8(&payload).is_err() {
        payload.pop();
    }
    payload
}

/// Feed `payload` to the streaming decoder in `parts` chunks and return the
/// total number of bytes produced, so Criterion can black-box the work.
fn run_streaming(payload: &[u8], parts: usize) -> usize {
    let mut total = 0;
    let mut decoding =
        stream_decode_utf8_with(replacing as PolicyFn, &[]).expect("replacing never raises");
    for chunk in produce_chunks(payload, parts) {
        decoding = decoding.resume(chunk).expect("replacing never raises");
        total += decoding.produced().len();
    }
    total
}

fn bench_decode(c: &mut Criterion) {
    let payload = make_payload(64 * 1024);
    let ascii: Vec<u8> = payload.iter().map(|&b| b & 0x7F).collect();

    let mut group = c.benchmark_group("utf8");
    group.bench_function("one_shot_strict", |b| {
        b.iter(|| decode_utf8(black_box(&payload)).unwrap().len());
    });
    group.bench_function("one_shot_lenient", |b| {
        b.iter(|| decode_utf8_lenient(black_box(&payload)).len());
    });
    for parts in [4usize, 64, 1024] {
        group.bench_with_input(BenchmarkId::new("streaming", parts), &parts, |b, &parts| {
            b.iter(|| run_streaming(black_box(&payload), parts));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("single_byte");
    group.bench_function("latin1", |b| {
        b.iter(|| decode_latin1(black_box(&payload)).len());
    });
    group.bench_function("ascii_via_utf8", |b| {
        b.iter(|| decode_utf8(black_box(&ascii)).unwrap().len());
    });
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
