use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use scatter_core::dataset::{DataRecord, Dataset};
use scatter_core::dimension::XDimension;
use scatter_core::{scale, ChartState, Layout};

fn gen_dataset(n: usize) -> Dataset {
    let mut records = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64;
        records.push(DataRecord {
            state: format!("State {i}"),
            abbr: format!("S{i}"),
            poverty: 9.0 + (t * 0.37).sin().abs() * 12.0,
            age: 30.0 + (t * 0.11).cos().abs() * 14.0,
            income: 40_000.0 + (t * 0.05).sin().abs() * 35_000.0,
            obesity: 20.0 + (t * 0.23).sin().abs() * 16.0,
            smokes: 9.0 + (t * 0.17).cos().abs() * 17.0,
            healthcare: 5.0 + (t * 0.29).sin().abs() * 17.0,
        });
    }
    Dataset::from_records(records)
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_x");
    for &n in &[51usize, 1_000usize, 10_000usize] {
        let ds = gen_dataset(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let s = scale::fit_x(&ds, XDimension::Income, 110.0, 860.0).unwrap();
                black_box(s);
            })
        });
    }
    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_at");
    for &n in &[51usize, 1_000usize, 10_000usize] {
        let ds = gen_dataset(n);
        let state = ChartState::new(&ds, Layout::default()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter_batched(
                || state.clone(),
                |st| {
                    let scene = st.scene_at(&ds, Duration::ZERO);
                    black_box(scene.marks.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit, bench_scene);
criterion_main!(benches);
