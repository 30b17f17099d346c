use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use temp_core::{ChartConfig, ChartModel, DatasetMetadata, Sample};

fn gen_samples(n: usize) -> Vec<Sample> {
    let start = Utc.with_ymd_and_hms(2022, 6, 29, 8, 0, 0).unwrap().fixed_offset();
    (0..n)
        .map(|i| {
            let x = i as f64;
            Sample {
                timestamp: start + Duration::seconds(i as i64),
                light_percent: 50.0 + (x * 0.01).sin() * 40.0,
                internal_temp: 80.0 + (x * 0.001).sin() * 25.0,
                external_temp: 75.0 + (x * 0.002).cos() * 10.0,
            }
        })
        .collect()
}

fn bench_metadata(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset");
    for &n in &[3_600usize, 43_200usize] {
        let samples = gen_samples(n);
        group.bench_function(format!("metadata_{n}"), |b| {
            b.iter(|| black_box(DatasetMetadata::compute(&samples)))
        });
        let cfg = ChartConfig { max_points: Some(1_000), ..ChartConfig::default() };
        group.bench_function(format!("chart_model_{n}"), |b| {
            b.iter(|| black_box(ChartModel::build(&samples, &cfg)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_metadata);
criterion_main!(benches);
