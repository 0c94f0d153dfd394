//! Criterion benchmark for store / fetch under eviction pressure

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use weight_cache::{Mode, WeightCache};

const OPS: u64 = 10_000;

fn bench_store(c: &mut Criterion) {
  let mut group = c.benchmark_group("store");
  group.throughput(Throughput::Elements(OPS));

  for mode in [Mode::Lru, Mode::Rr] {
    for cap in [1_000usize, 100_000] {
      group.bench_with_input(BenchmarkId::new(mode.name(), cap), &cap, |b, &cap| {
        let mut cache: WeightCache<u64, Vec<u8>> = WeightCache::new(Some(cap * 16), mode);
        let mut rng = fastrand::Rng::with_seed(42);
        b.iter(|| {
          for _ in 0..OPS {
            let k = rng.u64(0..cap as u64 * 2);
            black_box(cache.store(k, vec![0; 16]));
          }
        })
      });
    }
  }

  group.finish();
}

fn bench_fetch(c: &mut Criterion) {
  let mut group = c.benchmark_group("fetch");
  group.throughput(Throughput::Elements(OPS));

  for mode in [Mode::Lru, Mode::Rr] {
    let cap = 10_000u64;
    let mut cache: WeightCache<u64, u64> = WeightCache::new(Some(cap as usize), mode);
    for k in 0..cap {
      cache.store(k, k);
    }
    let mut rng = fastrand::Rng::with_seed(42);
    let keys: Vec<u64> = (0..OPS).map(|_| rng.u64(0..cap * 2)).collect();

    group.bench_function(mode.name(), |b| {
      b.iter(|| {
        for k in &keys {
          black_box(cache.fetch(k));
        }
      })
    });
  }

  group.finish();
}

criterion_group!(benches, bench_store, bench_fetch);
criterion_main!(benches);
