use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use svg_charts::api::{ChartType, LayoutEngine, LayoutOptions};
use svg_charts::core::DataSet;

fn generated_dataset(count: usize) -> DataSet {
    DataSet::from_pairs((0..count).map(|i| {
        let value = 10.0 + (i % 17) as f64 * 3.5;
        (format!("entry-{i}"), value)
    }))
    .expect("valid generated dataset")
}

fn bench_bar_layout_500(c: &mut Criterion) {
    let engine = LayoutEngine::new();
    let dataset = generated_dataset(500);
    let options = LayoutOptions::new(ChartType::Bar)
        .with_height(600)
        .with_bar_margin_right(1.0);

    c.bench_function("bar_layout_500", |b| {
        b.iter(|| {
            let _ = engine
                .compute(
                    ChartType::Bar,
                    black_box(&dataset),
                    black_box(&options),
                    black_box(20_000.0),
                )
                .expect("bar layout should succeed");
        })
    });
}

fn bench_doughnut_layout_2k(c: &mut Criterion) {
    let engine = LayoutEngine::new();
    let dataset = generated_dataset(2_000);
    let options = LayoutOptions::new(ChartType::Doughnut).with_centroid_padding(120.0);

    c.bench_function("doughnut_layout_2k", |b| {
        b.iter(|| {
            let _ = engine
                .compute(
                    ChartType::Doughnut,
                    black_box(&dataset),
                    black_box(&options),
                    black_box(1_080.0),
                )
                .expect("doughnut layout should succeed");
        })
    });
}

criterion_group!(benches, bench_bar_layout_500, bench_doughnut_layout_2k);
criterion_main!(benches);
