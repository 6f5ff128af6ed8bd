//! Performance benchmarks for Segmenter
//!
//! Run with: cargo bench --bench segmenter_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pretok_core::{Config, Mode, RuleSet, Segmenter};
use std::hint::black_box;

/// Generate a corpus of the given number of lines
fn generate_lines(count: usize) -> Vec<String> {
    let base = [
        "אבא הלך לעבודה.",
        "כשהאנשים הגיעו לבית הספר שמחו כולם מאוד.",
        "ושמה ראינו את הילדים משחקים בגן.",
        "אבא שלי שמח .",
    ];
    (0..count).map(|i| base[i % base.len()].to_string()).collect()
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    let lines = generate_lines(1_000);
    let bytes: usize = lines.iter().map(String::len).sum();
    group.throughput(Throughput::Bytes(bytes as u64));

    for mode in [Mode::Classic, Mode::Improved] {
        let segmenter =
            Segmenter::with_config(Config::builder().mode(mode).build().unwrap()).unwrap();

        group.bench_with_input(BenchmarkId::new("segment_line", mode), &lines, |b, lines| {
            b.iter(|| {
                for line in lines {
                    black_box(segmenter.segment_line(black_box(line)));
                }
            });
        });
    }

    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let segmenter = Segmenter::new();

    for count in [1_000, 10_000, 100_000] {
        let lines = generate_lines(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("sequential", count), &lines, |b, lines| {
            b.iter(|| segmenter.segment_lines(black_box(lines)).count());
        });
        group.bench_with_input(BenchmarkId::new("parallel", count), &lines, |b, lines| {
            b.iter(|| segmenter.par_segment_lines(black_box(lines)).len());
        });
    }

    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_bundled", |b| {
        b.iter(|| RuleSet::bundled(black_box(true)).len());
    });
}

criterion_group!(benches, bench_modes, bench_parallel, bench_compile);
criterion_main!(benches);
