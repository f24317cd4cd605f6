use criterion::{Criterion, criterion_group, criterion_main};
use epigraph_view_engine::correlation::{TranslationLines, parse_line_range};
use epigraph_view_engine::markup::parse_markup;
use epigraph_view_engine::rendering::{render_transcription, segment, walk_document};
mod common;

fn bench_render_transcription(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(10);

    for lines in [10, 100, 1000] {
        let markup = common::generate_transcription(lines);
        group.bench_function(format!("render_{lines}_lines"), |b| {
            b.iter(|| render_transcription(std::hint::black_box(&markup)));
        });
    }

    let markup = common::generate_transcription(100);
    group.bench_function("parse_only_100_lines", |b| {
        b.iter(|| parse_markup(std::hint::black_box(&markup)));
    });

    let tree = parse_markup(&markup);
    group.bench_function("walk_and_segment_100_lines", |b| {
        b.iter(|| segment(walk_document(std::hint::black_box(&tree))));
    });

    group.finish();
}

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    let translation = common::generate_translation(1000);
    group.bench_function("split_translation_1000_lines", |b| {
        b.iter(|| TranslationLines::from_text(std::hint::black_box(&translation)));
    });

    group.bench_function("parse_line_range", |b| {
        b.iter(|| parse_line_range(std::hint::black_box("12-40")));
    });

    group.finish();
}

criterion_group!(benches, bench_render_transcription, bench_correlation);
criterion_main!(benches);
