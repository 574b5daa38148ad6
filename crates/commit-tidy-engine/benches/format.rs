use commit_tidy_engine::{Formatter, Rope, parse_message};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    for paragraphs in [10, 100, 1000] {
        let rope = Rope::from(common::generate_message(paragraphs).as_str());
        group.bench_function(format!("parse_{paragraphs}_paragraphs"), |b| {
            b.iter(|| {
                let parsed = parse_message(std::hint::black_box(&rope));
                std::hint::black_box(parsed);
            });
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    group.sample_size(10);

    let formatter = Formatter::default();
    let content = common::generate_message(100);
    group.bench_function("whole_document", |b| {
        b.iter(|| std::hint::black_box(formatter.format(std::hint::black_box(&content))));
    });

    let formatted = formatter.format(&content);
    group.bench_function("already_formatted", |b| {
        b.iter(|| std::hint::black_box(formatter.format(std::hint::black_box(&formatted))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_format);
criterion_main!(benches);
