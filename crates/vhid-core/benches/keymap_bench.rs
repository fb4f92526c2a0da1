//! Criterion benchmarks for the keysym translation table.
//!
//! The translator sits on the per-keystroke hot path of the injector, so a
//! lookup must stay in the nanosecond class.  Measures the range-table fast
//! paths, the enumerated tail, and the unmapped worst case.
//!
//! Run with:
//! ```bash
//! cargo bench --package vhid-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vhid_core::keysym_to_stroke;

// ── Representative keysyms for benchmarking ───────────────────────────────────

/// A spread of keysyms covering every branch of the priority chain.
const BENCH_KEYSYMS: &[u32] = &[
    'a' as u32,
    'Z' as u32,
    '5' as u32,
    '0' as u32,
    ' ' as u32,
    '?' as u32,
    '{' as u32,
    0xff08, // backspace
    0xff0d, // enter
    0xff1b, // escape -> back
    0xff51, // left arrow
    0xffc5, // F8 -> mail
    233,    // e acute (latin-1)
    50089,  // e acute (composed)
    213,    // Hungarian O
    0x01,   // Ctrl-A
    0x20ac, // euro: unmapped
    0xffbe, // F1: unmapped
    u32::MAX,
];

fn bench_keysym_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_keysym");

    // Single lookup (typical per-event cost): the letter fast path.
    group.bench_function("letter_single", |b| {
        b.iter(|| keysym_to_stroke(black_box('a' as u32)))
    });

    // The enumerated tail is the slowest mapped branch.
    group.bench_with_input(BenchmarkId::new("special", "F8"), &0xffc5u32, |b, &k| {
        b.iter(|| keysym_to_stroke(black_box(k)))
    });

    // Worst case: falls through every range and the whole match.
    group.bench_with_input(
        BenchmarkId::new("unmapped", "u32_max"),
        &u32::MAX,
        |b, &k| b.iter(|| keysym_to_stroke(black_box(k))),
    );

    // Batch of diverse keysyms (simulates a typing burst).
    group.bench_function("batch_19", |b| {
        b.iter(|| {
            BENCH_KEYSYMS
                .iter()
                .map(|&k| keysym_to_stroke(black_box(k)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_keysym_lookup);
criterion_main!(benches);
