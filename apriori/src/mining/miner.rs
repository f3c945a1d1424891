use std::path::Path;
use std::time::Instant;

use ahash::AHashMap;
use tracing::{debug, info};

use super::candidates::for_each_confirmed_candidate;
use super::index::{build_index, TransactionIndex};
use super::memory::{bytes_to_mib, estimate_run_size};
use super::support::{resolve_minsup, support_count};
use super::utils::FrequentLevel;
use super::{ItemId, Itemset};
use crate::error::Result;
use crate::reader::open_transactions;

/// Levels in increasing itemset size plus a support lookup over all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiningResult {
    pub levels: Vec<FrequentLevel>,
    pub counts: AHashMap<Itemset, usize>,
}

impl MiningResult {
    pub fn num_frequent_itemsets(&self) -> usize {
        self.counts.len()
    }

    pub fn support_of(&self, itemset: &[ItemId]) -> Option<usize> {
        self.counts.get(itemset).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    fn push_level(&mut self, level: FrequentLevel) {
        for (itemset, support) in level.iter() {
            self.counts.insert(Itemset::from_slice(itemset), support);
        }
        self.levels.push(level);
    }
}

/// Frequent single items, in ascending item order.
fn seed_level(index: &TransactionIndex, minsup_count: usize) -> FrequentLevel {
    let mut level = FrequentLevel::with_capacity(1, index.num_items());

    // item ids start at 1
    for (item, transactions) in index.iter().filter(|&(item, _)| item >= 1) {
        if transactions.len() >= minsup_count {
            level.add_itemset(&[item], transactions.len());
        }
    }

    level
}

/// Frequent itemsets one item larger than those of `level`.
fn next_level(
    index: &TransactionIndex,
    level: &FrequentLevel,
    minsup_count: usize,
) -> FrequentLevel {
    let mut next = FrequentLevel::new(level.itemset_size + 1);
    let mut confirmed = 0usize;

    let produced = for_each_confirmed_candidate(level, |candidate| {
        confirmed += 1;
        let support = support_count(index, &candidate);
        if support >= minsup_count {
            next.add_itemset(&candidate, support);
        }
    });

    debug!(
        size = next.itemset_size,
        produced,
        confirmed,
        frequent = next.len(),
        "mined level"
    );
    next
}

/// Mines every frequent itemset of `index` at the absolute threshold
/// `minsup_count`.
pub fn run(index: &TransactionIndex, minsup_count: usize) -> MiningResult {
    let mut result = MiningResult::default();
    if index.is_empty() {
        return result;
    }

    let first = seed_level(index, minsup_count);
    debug!(size = 1, frequent = first.len(), "mined level");
    if first.is_empty() {
        return result;
    }
    result.push_level(first);

    while let Some(current) = result.levels.last() {
        let next = next_level(index, current, minsup_count);
        if next.is_empty() {
            break;
        }

        // pairing at the following level needs more itemsets than their size
        let keep_going = next.len() > next.itemset_size;
        result.push_level(next);
        if !keep_going {
            break;
        }
    }

    result
}

/// Stateful driver: load transactions, set the threshold, run, inspect.
#[derive(Debug, Default)]
pub struct Apriori {
    index: Option<TransactionIndex>,
    minsup: f64,
    minsup_count: usize,
    result: MiningResult,
}

impl Apriori {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(index: TransactionIndex) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }

    /// Replaces the index with the contents of a transaction file.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.clear();
        let index = build_index(open_transactions(path)?)?;
        self.replace_index(index);
        Ok(())
    }

    /// Replaces the index with the given fallible transaction source.
    pub fn load<I, T>(&mut self, transactions: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<T>>,
        T: IntoIterator<Item = ItemId>,
    {
        self.clear();
        let index = build_index(transactions)?;
        self.replace_index(index);
        Ok(())
    }

    /// Drops the index and every figure derived from it. The fractional
    /// threshold is kept.
    fn clear(&mut self) {
        self.index = None;
        self.minsup_count = 0;
        self.result = MiningResult::default();
    }

    fn replace_index(&mut self, index: TransactionIndex) {
        // the absolute threshold follows the new transaction count
        if self.minsup != 0.0 {
            self.minsup_count = resolve_minsup(&index, self.minsup).unwrap_or(0);
        }
        self.index = Some(index);
    }

    /// Applies a fractional threshold; ignored until a non-empty index exists.
    pub fn set_minsup(&mut self, minsup: f64) {
        let Some(index) = &self.index else {
            return;
        };

        if let Some(count) = resolve_minsup(index, minsup) {
            self.minsup = minsup;
            self.minsup_count = count;
        }
    }

    /// Mines the loaded index. A missing index or unset threshold is a no-op.
    pub fn run(&mut self) {
        self.result = MiningResult::default();
        let Some(index) = &self.index else {
            return;
        };
        if index.is_empty() || self.minsup == 0.0 {
            return;
        }

        info!(
            transactions = index.len(),
            minsup = self.minsup,
            minsup_count = self.minsup_count,
            "run Apriori process"
        );
        let start = Instant::now();
        self.result = run(index, self.minsup_count);

        info!(elapsed = ?start.elapsed(), "finish Apriori process");
        info!(
            memory = bytes_to_mib(estimate_run_size(index, &self.result.levels)),
            "estimated memory held MiB"
        );
    }

    pub fn index(&self) -> Option<&TransactionIndex> {
        self.index.as_ref()
    }

    pub fn result(&self) -> &MiningResult {
        &self.result
    }

    pub fn frequent_levels(&self) -> &[FrequentLevel] {
        &self.result.levels
    }

    pub fn frequent_itemset_counts(&self) -> &AHashMap<Itemset, usize> {
        &self.result.counts
    }

    pub fn support_of(&self, itemset: &[ItemId]) -> Option<usize> {
        self.result.support_of(itemset)
    }

    pub fn len_of_db(&self) -> usize {
        self.index.as_ref().map_or(0, TransactionIndex::len)
    }

    pub fn num_items(&self) -> usize {
        self.index.as_ref().map_or(0, TransactionIndex::num_items)
    }

    pub fn num_frequent_itemsets(&self) -> usize {
        self.result.num_frequent_itemsets()
    }

    pub fn minsup(&self) -> f64 {
        self.minsup
    }

    pub fn minsup_count(&self) -> usize {
        self.minsup_count
    }
}
