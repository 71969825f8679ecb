//! Benchmarks for needleset multi-pattern search

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use needleset::AhoCorasick;

fn keyword_set() -> Vec<String> {
    // 100 keyword-ish patterns with heavy prefix sharing.
    (0..100).map(|i| format!("keyword_{i:03}")).collect()
}

fn haystack(len: usize) -> Vec<u8> {
    let mut text = Vec::with_capacity(len);
    let filler = b"the quick brown fox keyword_042 jumps over keyword_777 ";
    while text.len() < len {
        text.extend_from_slice(filler);
    }
    text.truncate(len);
    text
}

fn bench_construction(c: &mut Criterion) {
    let patterns = keyword_set();
    c.bench_function("construct_100_patterns", |b| {
        b.iter(|| AhoCorasick::new(black_box(&patterns)))
    });
}

fn bench_search_cold(c: &mut Criterion) {
    let patterns = keyword_set();
    let text = haystack(64 * 1024);
    c.bench_function("search_64k_cold_cache", |b| {
        b.iter(|| {
            let ac = AhoCorasick::new(&patterns);
            ac.search_in(black_box(&text))
        })
    });
}

fn bench_search_warm(c: &mut Criterion) {
    let patterns = keyword_set();
    let text = haystack(64 * 1024);
    let ac = AhoCorasick::new(&patterns);
    // Resolve the transitions this text needs before timing.
    let _ = ac.search_in(&text);
    c.bench_function("search_64k_warm_cache", |b| {
        b.iter(|| ac.search_in(black_box(&text)))
    });
}

fn bench_membership(c: &mut Criterion) {
    let patterns = keyword_set();
    let ac = AhoCorasick::new(&patterns);
    c.bench_function("has_string_hit", |b| {
        b.iter(|| ac.has_string(black_box(b"keyword_042")))
    });
    c.bench_function("has_string_miss", |b| {
        b.iter(|| ac.has_string(black_box(b"keyword_1000")))
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_search_cold,
    bench_search_warm,
    bench_membership
);
criterion_main!(benches);
