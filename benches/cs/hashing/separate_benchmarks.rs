use algos::cs::hashing::fnv::FnvBuildHasher;
use algos::cs::hashing::separate::ChainedHashMap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashMap;

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("chained", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = ChainedHashMap::new();
                for i in 0..size {
                    map.put(black_box(i), black_box(i * 2));
                }
                map
            });
        });

        group.bench_with_input(BenchmarkId::new("chained_fnv", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = ChainedHashMap::with_hasher(FnvBuildHasher);
                for i in 0..size {
                    map.put(black_box(i), black_box(i * 2));
                }
                map
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = HashMap::new();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            });
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let chained: ChainedHashMap<usize, usize> = (0..size).map(|i| (i, i)).collect();
        group.bench_with_input(BenchmarkId::new("chained", size), &size, |b, &size| {
            b.iter(|| {
                let mut hits = 0;
                for i in 0..size {
                    if chained.get(&black_box(i)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });

        let std_map: HashMap<usize, usize> = (0..size).map(|i| (i, i)).collect();
        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter(|| {
                let mut hits = 0;
                for i in 0..size {
                    if std_map.get(&black_box(i)).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_put, bench_get);
criterion_main!(benches);
