#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use apriori::{ItemId, MiningResult};

pub type Itemsets = BTreeMap<Vec<ItemId>, usize>;

/// Support of every itemset over the observed items, by scanning each
/// transaction. Only suitable for small item universes.
pub fn brute_force(transactions: &[Vec<ItemId>], minsup_count: usize) -> Itemsets {
    let universe: Vec<ItemId> = transactions
        .iter()
        .flatten()
        .copied()
        .filter(|&item| item >= 1)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    assert!(universe.len() <= 16, "universe too large for brute force");

    let mut frequent = Itemsets::new();
    for mask in 1u32..(1 << universe.len()) {
        let itemset: Vec<ItemId> = universe
            .iter()
            .enumerate()
            .filter(|&(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &item)| item)
            .collect();

        let support = transactions
            .iter()
            .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
            .count();

        if support >= minsup_count.max(1) {
            frequent.insert(itemset, support);
        }
    }
    frequent
}

pub fn mined(result: &MiningResult) -> Itemsets {
    result
        .levels
        .iter()
        .flat_map(|level| level.iter())
        .map(|(itemset, support)| (itemset.to_vec(), support))
        .collect()
}

/// Every transaction over `items` exactly once: the power set.
pub fn power_set(items: &[ItemId]) -> Vec<Vec<ItemId>> {
    (0u32..(1 << items.len()))
        .map(|mask| {
            items
                .iter()
                .enumerate()
                .filter(|&(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, &item)| item)
                .collect()
        })
        .collect()
}
