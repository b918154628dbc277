//! Criterion benchmarks for key name lookup and report decoding.
//!
//! Both run once per input report on the dispatch loop, so they should stay
//! in the tens-of-nanoseconds range.
//!
//! Run with:
//! ```bash
//! cargo bench --package keydump-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keydump_core::{key_name, BootKeyboardReport};

/// Reports of increasing density: idle, one key, modifiers plus a chord,
/// every slot and modifier in use.
const BENCH_REPORTS: &[(&str, [u8; 8])] = &[
    ("idle", [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ("single_key", [0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ("ctrl_shift_chord", [0x03, 0x00, 0x06, 0x19, 0x00, 0x00, 0x00, 0x00]),
    ("full_rollover", [0xFF, 0x00, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09]),
];

fn bench_key_name(c: &mut Criterion) {
    c.bench_function("key_name/all_256_codes", |b| {
        b.iter(|| {
            for code in 0..=u8::MAX {
                black_box(key_name(black_box(code)));
            }
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_report");
    for (label, report) in BENCH_REPORTS {
        group.bench_with_input(BenchmarkId::from_parameter(label), report, |b, report| {
            b.iter(|| {
                let parsed = BootKeyboardReport::parse(black_box(report)).unwrap();
                parsed.pressed_keys().count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key_name, bench_decode);
criterion_main!(benches);
