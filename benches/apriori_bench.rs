use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use apriori::{apriori_algorithm, MiningConfig, TransactionStore};

/// Generate synthetic transaction data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
fn generate_store(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
) -> TransactionStore {
    let mut rng = rand::thread_rng();
    let mut store = TransactionStore::new();

    for _ in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let width = ((avg_transaction_size as f64) * (0.5 + random_factor)).round() as usize;
        let width = width.clamp(1, num_items);

        let tx: Vec<usize> = (0..width).map(|_| rng.gen_range(0..num_items)).collect();
        store.push(tx);
    }
    store
}

/// Benchmark Apriori with different dataset sizes
fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let store = generate_store(num_tx, num_items, avg_size);
        let config = MiningConfig::new(2, num_tx / 10);

        group.bench_with_input(BenchmarkId::from_parameter(name), &store, |b, store| {
            b.iter(|| apriori_algorithm(black_box(store), black_box(&config)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark Apriori with different sigma thresholds
fn bench_apriori_sigma(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_sigma");

    let store = generate_store(1000, 50, 10);
    let sigmas = vec![50, 100, 200, 300, 500];

    for &sigma in &sigmas {
        let config = MiningConfig::new(2, sigma);
        group.bench_with_input(BenchmarkId::from_parameter(sigma), &store, |b, store| {
            b.iter(|| apriori_algorithm(black_box(store), black_box(&config)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apriori_scaling, bench_apriori_sigma);
criterion_main!(benches);
