//! Rough byte accounting for run logs.

use std::mem::size_of;

use super::index::TransactionIndex;
use super::utils::FrequentLevel;
use super::ItemId;

const MIB: f64 = 1024.0 * 1024.0;

pub fn estimate_index_size(index: &TransactionIndex) -> usize {
    // BTreeMap nodes are not exposed; charge a key plus a boxed slice per item
    let per_item = size_of::<ItemId>() + size_of::<Box<[usize]>>();
    let header_overhead = 64;
    index.num_items() * per_item + index.num_entries() * size_of::<usize>() + header_overhead
}

pub fn estimate_level_size(level: &FrequentLevel) -> usize {
    let offset_size = size_of::<(usize, usize)>();
    let support_size = size_of::<usize>();
    let item_size = size_of::<ItemId>();
    level.len() * (offset_size + support_size) + level.storage.num_items() * item_size
}

pub fn estimate_run_size(index: &TransactionIndex, levels: &[FrequentLevel]) -> usize {
    estimate_index_size(index) + levels.iter().map(estimate_level_size).sum::<usize>()
}

pub fn bytes_to_mib(bytes: usize) -> f64 {
    bytes as f64 / MIB
}
