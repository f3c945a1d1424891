use std::collections::BTreeMap;

use super::ItemId;
use crate::error::Result;

/// Inverted index from item to the ascending list of transactions holding it.
///
/// Built once through [`TransactionIndexBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionIndex {
    tid_lists: BTreeMap<ItemId, Box<[usize]>>,
    num_transactions: usize,
    max_item: ItemId,
}

#[derive(Debug, Default)]
pub struct TransactionIndexBuilder {
    tid_lists: BTreeMap<ItemId, Vec<usize>>,
    num_transactions: usize,
    max_item: ItemId,
}

impl TransactionIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one transaction under the next sequential index.
    pub fn push_transaction<T>(&mut self, items: T) -> usize
    where
        T: IntoIterator<Item = ItemId>,
    {
        let tid = self.num_transactions;

        for item in items {
            if item > self.max_item {
                self.max_item = item;
            }

            let list = self.tid_lists.entry(item).or_default();
            // an item repeated within one transaction is recorded once
            if list.last() != Some(&tid) {
                list.push(tid);
            }
        }

        self.num_transactions += 1;
        tid
    }

    pub fn len(&self) -> usize {
        self.num_transactions
    }

    pub fn is_empty(&self) -> bool {
        self.num_transactions == 0
    }

    pub fn finish(self) -> TransactionIndex {
        let tid_lists = self
            .tid_lists
            .into_iter()
            .map(|(item, list)| (item, list.into_boxed_slice()))
            .collect();

        TransactionIndex {
            tid_lists,
            num_transactions: self.num_transactions,
            max_item: self.max_item,
        }
    }
}

/// Builds the index from a fallible transaction source.
///
/// The first error aborts ingestion; no partial index is returned.
pub fn build_index<I, T>(transactions: I) -> Result<TransactionIndex>
where
    I: IntoIterator<Item = Result<T>>,
    T: IntoIterator<Item = ItemId>,
{
    let mut builder = TransactionIndexBuilder::new();
    for transaction in transactions {
        builder.push_transaction(transaction?);
    }
    Ok(builder.finish())
}

impl TransactionIndex {
    pub fn from_transactions<I, T>(transactions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = ItemId>,
    {
        let mut builder = TransactionIndexBuilder::new();
        for transaction in transactions {
            builder.push_transaction(transaction);
        }
        builder.finish()
    }

    /// Number of transactions ingested, including empty ones.
    pub fn len(&self) -> usize {
        self.num_transactions
    }

    pub fn is_empty(&self) -> bool {
        self.num_transactions == 0
    }

    /// Number of distinct items observed.
    pub fn num_items(&self) -> usize {
        self.tid_lists.len()
    }

    pub fn max_item(&self) -> ItemId {
        self.max_item
    }

    /// Transactions containing `item`; empty when the item was never seen.
    pub fn transactions(&self, item: ItemId) -> &[usize] {
        match self.tid_lists.get(&item) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Items with their transaction lists in ascending item order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &[usize])> {
        self.tid_lists.iter().map(|(&item, list)| (item, &list[..]))
    }

    /// Total number of (item, transaction) entries.
    pub fn num_entries(&self) -> usize {
        self.tid_lists.values().map(|list| list.len()).sum()
    }
}
