use std::sync::Arc;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use itemproc::prelude::*;
use tokio::runtime::Runtime;

/// Build a store with `num_items` items, every `processed_every`-th already processed
fn seeded_store(num_items: usize, processed_every: usize) -> Arc<ConcurrentItemStore> {
    let store = Arc::new(ConcurrentItemStore::new());

    // ConcurrentItemStore never suspends, so a plain executor is enough here
    futures::executor::block_on(async {
        for i in 0..num_items {
            let status = if processed_every > 0 && i % processed_every == 0 {
                ItemStatus::Processed
            } else {
                ItemStatus::New
            };
            let item = Item::new(format!("item{}", i), "bench", status, "bench@mail.com");
            store.save(item).await.expect("seed item");
        }
    });

    store
}

/// Benchmark a full run as the batch size grows
fn bench_batch_size_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_size_scaling");
    let runtime = Runtime::new().unwrap();

    for num_items in [10, 100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_items),
            &num_items,
            |b, &num_items| {
                b.to_async(&runtime).iter_batched(
                    || BatchProcessor::new(seeded_store(num_items, 0)),
                    |processor| async move {
                        black_box(processor.run().await.unwrap());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark the effect of the pool bound on a fixed batch
fn bench_pool_concurrency(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_concurrency");
    let runtime = Runtime::new().unwrap();

    for concurrency in [1, 4, 10, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(concurrency),
            &concurrency,
            |b, &concurrency| {
                b.to_async(&runtime).iter_batched(
                    || BatchProcessor::new(seeded_store(1_000, 0)).with_concurrency(concurrency),
                    |processor| async move {
                        black_box(processor.run().await.unwrap());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark a rerun where every item is skipped
fn bench_idempotent_rerun(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();

    c.bench_function("idempotent_rerun_1000", |b| {
        b.to_async(&runtime).iter_batched(
            || BatchProcessor::new(seeded_store(1_000, 1)),
            |processor| async move {
                let processed = processor.run().await.unwrap();
                assert!(processed.is_empty());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_batch_size_scaling,
    bench_pool_concurrency,
    bench_idempotent_rerun
);
criterion_main!(benches);
