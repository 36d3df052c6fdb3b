use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use transpose::registry::Registry;

fn bench_transpose(c: &mut Criterion) {
    let registry = Registry::standard();
    let mut group = c.benchmark_group("transpose");

    for (m, n) in [(32, 32), (64, 64), (61, 67), (256, 256)] {
        let a: Vec<i32> = (0..(m * n) as i32).collect();
        let mut b = vec![0; m * n];

        for strategy in &registry {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), format!("{}x{}", m, n)),
                &(m, n),
                |bench, &(m, n)| {
                    bench.iter(|| strategy.apply(m, n, black_box(&a), black_box(&mut b)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_transpose);
criterion_main!(benches);
