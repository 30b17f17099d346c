use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use temp_core::downsample::lttb;

// a day of one-second readings: slow warm-up with sensor jitter
fn gen_day(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let y = 70.0 + (x / n as f64) * 40.0 + (x * 0.07).sin() * 1.5;
            (x, y)
        })
        .collect()
}

fn bench_lttb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lttb");
    for &n in &[21_600usize, 86_400usize] {
        let data = gen_day(n);
        for &target in &[370usize, 1_000usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_t{target}")), &target, |b, &t| {
                b.iter_batched(
                    || data.clone(),
                    |d| { let _ = black_box(lttb(&d, t)); },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lttb);
criterion_main!(benches);
