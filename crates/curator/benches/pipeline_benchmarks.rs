//! Curation pipeline benchmarks.
//!
//! Measures preparation and catalog rendering across batch sizes.

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use curator::catalog::{CATALOG_HEADER, DEFAULT_INDENT, render_titles};
use curator::pipeline::prepare_on;
use curator::Article;

/// Generate a batch with a mix of complete, undated, blank and duplicate articles.
fn generate_batch(size: usize) -> Vec<Article> {
    (0..size)
        .map(|i| match i % 5 {
            0 => Article::new(),
            1 => Article::new()
                .with_title(format!("Статья {}", i))
                .with_content("text")
                .with_author("noBrain"),
            // The last slot of every five repeats the one before it.
            _ => Article::new()
                .with_title(format!("Статья {}", i - i % 5 / 4))
                .with_content("text")
                .with_author("noBrain")
                .with_creation_date(NaiveDate::from_ymd_opt(2023, 10, 16).unwrap()),
        })
        .collect()
}

fn generate_titles(count: usize) -> Vec<String> {
    (0..count).rev().map(|i| format!("Заголовок {:06}", i)).collect()
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for size in [100, 1_000, 10_000].iter() {
        let batch = generate_batch(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("articles", size), &batch, |b, batch| {
            b.iter(|| black_box(prepare_on(batch, today)))
        });
    }

    group.finish();
}

fn bench_render_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_catalog");

    for count in [100, 1_000, 10_000].iter() {
        let titles = generate_titles(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("titles", count), &titles, |b, titles| {
            b.iter_with_setup(
                || titles.clone(),
                |titles| black_box(render_titles(titles, CATALOG_HEADER, DEFAULT_INDENT)),
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prepare, bench_render_catalog);
criterion_main!(benches);
