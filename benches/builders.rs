//! Builder benchmarks over synthetic buffers.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{criterion_group, criterion_main, Criterion};
use samf::matcher::{find_matches, MatchConfig};
use samf::suffix::{build_lcp_array, build_suffix_array, invert_suffix_array};
use std::hint::black_box;

const BENCH_LEN: usize = 64 * 1024;

/// Log-like text: heavy repetition with varying fields.
fn synthetic_log(len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len + 64);
    let mut seq = 0u64;
    while out.len() < len {
        seq = seq.wrapping_mul(6364136223846793005).wrapping_add(1);
        out.extend_from_slice(
            format!(
                "ts={} level=info module=ingest msg=\"batch flushed\" rows={}\n",
                seq >> 40,
                seq % 9973
            )
            .as_bytes(),
        );
    }
    out.truncate(len);
    out
}

/// Xorshift bytes over a 16-symbol alphabet; few long repeats.
fn pseudo_random(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 16) as u8
        })
        .collect()
}

fn bench_suffix_sort(c: &mut Criterion) {
    let log = synthetic_log(BENCH_LEN);
    let random = pseudo_random(BENCH_LEN);

    let mut group = c.benchmark_group("suffix_sort");
    group.bench_function("log_64k", |b| {
        b.iter(|| build_suffix_array(black_box(&log)))
    });
    group.bench_function("random_64k", |b| {
        b.iter(|| build_suffix_array(black_box(&random)))
    });
    group.finish();
}

fn bench_lcp(c: &mut Criterion) {
    let text = synthetic_log(BENCH_LEN);
    let sa = build_suffix_array(&text);
    let isa = invert_suffix_array(&sa);

    c.bench_function("lcp_log_64k", |b| {
        b.iter(|| build_lcp_array(black_box(&text), &sa, &isa))
    });
}

fn bench_match_finder(c: &mut Criterion) {
    let text = synthetic_log(BENCH_LEN);
    let sa = build_suffix_array(&text);
    let isa = invert_suffix_array(&sa);
    let lcp = build_lcp_array(&text, &sa, &isa);
    let config = MatchConfig::default();

    c.bench_function("match_finder_log_64k", |b| {
        b.iter(|| find_matches(black_box(&sa), black_box(&lcp), &config))
    });
}

criterion_group!(benches, bench_suffix_sort, bench_lcp, bench_match_finder);
criterion_main!(benches);
