use collatzcache::batch::generate_inputs;
use collatzcache::{steps, MemoCache, StepCache};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_cached_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_steps");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("steps_hot_100", |b| {
        let mut cache = StepCache::new(100).unwrap();
        let inputs: Vec<u64> = (1..=100).collect();

        // Warm the cache
        for &n in &inputs {
            cache.steps(n).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.steps(inputs[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.bench_function("steps_uncached", |b| {
        let mut counter = 0u64;
        b.iter(|| {
            black_box(steps(1 + counter % 10_000).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_lru_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_evicting", |b| {
        let mut cache = MemoCache::new(100).unwrap();
        let mut key = 0u64;
        b.iter(|| {
            cache.put(black_box(key), key);
            key += 1;
        });
    });

    group.bench_function("50_get_50_put", |b| {
        let mut cache = MemoCache::new(100).unwrap();
        for key in 0..100 {
            cache.put(key, key);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(counter % 150));
            } else {
                cache.put(counter % 150, counter);
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_random_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);

    let inputs = generate_inputs(10_000, 1, 500, &mut StdRng::seed_from_u64(42)).unwrap();
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("random_10k_range_500", |b| {
        b.iter(|| {
            let mut cache = StepCache::new(100).unwrap();
            for &n in &inputs {
                black_box(cache.steps(n).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_steps,
    bench_lru_churn,
    bench_random_batch
);
criterion_main!(benches);
