use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stock_core::{Category, InMemoryProductStore, Product, StockManager};
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion

fn stocked_manager(rt: &Runtime, products: usize) -> StockManager {
  let manager = StockManager::new(Arc::new(InMemoryProductStore::new()));
  rt.block_on(async {
    for i in 0..products {
      manager
        .create(Product::new(format!("product-{}", i), 2, 50, Category::ALL[i % Category::ALL.len()]))
        .await
        .expect("seed product");
    }
  });
  manager
}

fn bench_adjustments(c: &mut Criterion) {
  let rt = Runtime::new().expect("tokio runtime");
  let manager = stocked_manager(&rt, 100);

  let mut group = c.benchmark_group("stock_adjustment");
  group.throughput(Throughput::Elements(2));
  group.bench_function("increment_then_decrement", |b| {
    b.to_async(&rt).iter(|| async {
      manager.increment(50, 10).await.expect("increment");
      manager.decrement(50, 10).await.expect("decrement");
    })
  });
  group.bench_function("rejected_decrement", |b| {
    b.to_async(&rt).iter(|| async {
      let _ = manager.decrement(50, 100).await;
    })
  });
  group.finish();
}

fn bench_lookups(c: &mut Criterion) {
  let rt = Runtime::new().expect("tokio runtime");
  let mut group = c.benchmark_group("stock_lookup");

  for size in [10usize, 100, 1000] {
    let manager = stocked_manager(&rt, size);
    let target = format!("product-{}", size - 1);
    group.throughput(Throughput::Elements(1));
    group.bench_with_input(BenchmarkId::new("find_by_name", size), &target, |b, name| {
      b.to_async(&rt).iter(|| async { manager.find_by_name(name).await.expect("lookup") })
    });
    group.bench_with_input(BenchmarkId::new("list_all", size), &size, |b, _| {
      b.to_async(&rt).iter(|| async { manager.list_all().await.expect("list") })
    });
  }
  group.finish();
}

criterion_group!(benches, bench_adjustments, bench_lookups);
criterion_main!(benches);
