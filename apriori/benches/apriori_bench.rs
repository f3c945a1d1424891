use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use apriori::mining::{intersect_sorted, resolve_minsup, run, ItemId, TransactionIndex};

/// Generate synthetic basket data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Item ids are drawn from 1..=num_items
/// - avg_transaction_size: Average items per transaction
/// - density: Probability that each drawn slot keeps its item
fn generate_transactions(
    num_transactions: usize,
    num_items: ItemId,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<ItemId>> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.gen();
            let slots = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;

            let mut transaction: Vec<ItemId> = Vec::with_capacity(slots);
            for _ in 0..slots {
                let density_check: f64 = rng.gen();
                if density_check < density {
                    transaction.push(rng.gen_range(1..=num_items));
                }
            }
            transaction.sort_unstable();
            transaction.dedup();
            transaction
        })
        .collect()
}

fn mine(index: &TransactionIndex, minsup: f64) -> usize {
    let minsup_count = resolve_minsup(index, minsup).unwrap_or(1);
    run(index, minsup_count).num_frequent_itemsets()
}

/// Index construction cost alone
fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");

    for num_tx in [1_000, 10_000, 50_000] {
        let transactions = generate_transactions(num_tx, 100, 10, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(num_tx), &transactions, |b, tx| {
            b.iter(|| TransactionIndex::from_transactions(black_box(tx).iter().cloned()));
        });
    }

    group.finish();
}

/// Two-pointer intersection over lists of growing length
fn bench_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect_sorted");

    for len in [1_000usize, 100_000] {
        let evens: Vec<usize> = (0..len).map(|i| i * 2).collect();
        let thirds: Vec<usize> = (0..len).map(|i| i * 3).collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| intersect_sorted(black_box(&evens), black_box(&thirds)));
        });
    }

    group.finish();
}

/// Full runs over different dataset sizes
fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let index = TransactionIndex::from_transactions(generate_transactions(
            num_tx, num_items, avg_size, 0.7,
        ));

        group.bench_with_input(BenchmarkId::from_parameter(name), &index, |b, index| {
            b.iter(|| mine(black_box(index), black_box(0.1)));
        });
    }

    group.finish();
}

/// Full runs at different thresholds
fn bench_apriori_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_min_support");

    let index = TransactionIndex::from_transactions(generate_transactions(1000, 50, 10, 0.7));

    for min_sup in [0.05, 0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| mine(black_box(&index), black_box(sup)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_index,
    bench_intersection,
    bench_apriori_scaling,
    bench_apriori_min_support
);
criterion_main!(benches);
