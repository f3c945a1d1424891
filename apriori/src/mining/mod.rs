pub mod candidates;
pub mod index;
pub mod memory;
pub mod miner;
pub mod support;
pub mod utils;


use smallvec::SmallVec;

/// Item identifier as it appears in the transaction source.
pub type ItemId = u64;

/// Strictly ascending, duplicate-free set of items.
pub type Itemset = SmallVec<[ItemId; 8]>;

pub use index::{build_index, TransactionIndex, TransactionIndexBuilder};
pub use miner::{run, Apriori, MiningResult};
pub use support::{intersect_sorted, resolve_minsup, support_count};
pub use utils::{FrequentLevel, ItemsetStorage};
