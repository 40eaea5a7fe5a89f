//! Benchmarks for the combined boundary engine and the helpers built on it

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use textseg_core::{
    grapheme_cluster_count, step, word_count, words, Graphemes, State,
};

/// Generate test text of specified size
fn generate_text(base: &str, size_kb: usize) -> String {
    let target_size = size_kb * 1024;
    let repeat_count = target_size / base.len() + 1;
    let mut text = base.repeat(repeat_count);
    let mut cut = target_size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

const SAMPLES: &[(&str, &str)] = &[
    (
        "latin",
        "This is a test sentence. It has multiple words! Does it work? 3.14 isn't pi.\n",
    ),
    (
        "cjk",
        "\u{65E5}\u{672C}\u{8A9E}\u{306E}\u{6587}\u{7AE0}\u{3067}\u{3059}\u{3002}\u{300C}\u{5F15}\u{7528}\u{300D}\u{3082}\u{3042}\u{308B}\u{3002}\n",
    ),
    (
        "emoji",
        "Flags \u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7} and \u{1F44D}\u{1F3FC} \u{1F3F3}\u{FE0F}\u{200D}\u{1F308}!\n",
    ),
];

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for (name, base) in SAMPLES {
        let text = generate_text(base, 64);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("str", name), &text, |b, text| {
            b.iter(|| {
                let mut rest = black_box(text.as_str());
                let mut state = State::START;
                let mut n = 0usize;
                while let Some(s) = step(rest, state) {
                    n += usize::from(s.boundaries.bits());
                    rest = s.rest;
                    state = s.state;
                }
                n
            });
        });

        group.bench_with_input(BenchmarkId::new("bytes", name), &text, |b, text| {
            b.iter(|| {
                let mut rest = black_box(text.as_bytes());
                let mut state = State::START;
                let mut n = 0usize;
                while let Some(s) = step(rest, state) {
                    n += usize::from(s.boundaries.bits());
                    rest = s.rest;
                    state = s.state;
                }
                n
            });
        });
    }

    group.finish();
}

fn bench_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("helpers");
    let text = generate_text(SAMPLES[0].1, 64);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("grapheme_cluster_count", |b| {
        b.iter(|| grapheme_cluster_count(black_box(text.as_str())));
    });
    group.bench_function("word_count", |b| {
        b.iter(|| word_count(black_box(text.as_str())));
    });
    group.bench_function("words", |b| {
        b.iter(|| words(black_box(text.as_str())).count());
    });
    group.bench_function("cursor", |b| {
        b.iter(|| {
            let mut g = Graphemes::new(black_box(text.as_str()));
            let mut sentences = 0;
            while g.advance() {
                if g.is_sentence_boundary() {
                    sentences += 1;
                }
            }
            sentences
        });
    });

    group.finish();
}

criterion_group!(benches, bench_step, bench_helpers);
criterion_main!(benches);
