use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sn_stats::strided::stdev;
use sn_stats::{MovingStdDev, WindowedStatistic};

fn samples(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(-100.0..100.0)).collect()
}

fn bench_moving_stdev(c: &mut Criterion) {
    let data = samples(10_000);
    let mut group = c.benchmark_group("moving_stdev");
    for &w in &[4usize, 64, 1_024] {
        group.bench_with_input(BenchmarkId::new("estimated_mean", w), &w, |b, &w| {
            b.iter(|| {
                let mut acc = MovingStdDev::new(w).unwrap();
                for &x in &data {
                    black_box(acc.push(x));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("known_mean", w), &w, |b, &w| {
            b.iter(|| {
                let mut acc = MovingStdDev::with_mean(w, 0.0).unwrap();
                for &x in &data {
                    black_box(acc.push(x));
                }
            })
        });
        // Recomputing every window from scratch, for comparison.
        group.bench_with_input(BenchmarkId::new("rescan", w), &w, |b, &w| {
            b.iter(|| {
                for end in w..=data.len() {
                    black_box(stdev(w as isize, 1.0, &data[end - w..end], 1));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_moving_stdev);
criterion_main!(benches);
