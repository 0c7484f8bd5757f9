use chained_sequence::{Arg, ChainedSequence, IntoChained};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_map_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_filter");

    for size in [1_000u64, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("chained", size), size, |b, &size| {
            b.iter(|| {
                let result = (0..size)
                    .chained()
                    .map(|x| black_box(x * 2))
                    .filter(|x| black_box(x % 4 == 0))
                    .sum(Arg::Omitted);
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_iter", size), size, |b, &size| {
            b.iter(|| {
                let result: u64 = (0..size)
                    .map(|x| black_box(x * 2))
                    .filter(|x| black_box(x % 4 == 0))
                    .sum();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_routed_recipes(c: &mut Criterion) {
    let mut group = c.benchmark_group("routed_recipes");

    for size in [1_000i64, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("groupby", size), size, |b, &size| {
            b.iter(|| {
                let groups = ChainedSequence::range(0, Arg::Present(size), Arg::Omitted)
                    .map(|seq| seq.groupby(|x| x / 10).len())
                    .unwrap_or(0);
                black_box(groups)
            });
        });

        group.bench_with_input(BenchmarkId::new("pairwise_tail", size), size, |b, &size| {
            b.iter(|| {
                let tail = ChainedSequence::count(0i64, 1)
                    .take(size as usize)
                    .pairwise()
                    .map(|(a, b)| a + b)
                    .tail(10)
                    .list();
                black_box(tail)
            });
        });

        group.bench_with_input(BenchmarkId::new("get", size), size, |b, &size| {
            b.iter(|| {
                let value = ChainedSequence::count(0i64, 3).get(black_box(size as i128));
                black_box(value)
            });
        });
    }

    group.finish();
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");
    let data: Vec<i64> = (0..10_000).map(|x| (x * 7919) % 1_000).collect();

    group.bench_function("sorted_by_key", |b| {
        b.iter(|| black_box(data.clone().chained().sorted_by_key(|x| x % 97, false)))
    });

    group.bench_function("max_by_key", |b| {
        b.iter(|| black_box(data.clone().chained().max_by_key(|x| x % 97, Arg::Omitted)))
    });

    group.bench_function("median", |b| {
        b.iter(|| black_box(data.clone().chained().median()))
    });

    group.finish();
}

criterion_group!(benches, bench_map_filter, bench_routed_recipes, bench_reductions);
criterion_main!(benches);
