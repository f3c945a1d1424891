use std::cmp::Ordering;

use ahash::AHashMap;

use super::utils::FrequentLevel;
use super::{ItemId, Itemset};

/// Joins two same-size itemsets into a candidate one item larger.
///
/// The walk tolerates a single position where `one` holds an item that `two`
/// lacks (and that item must be the smaller of the two heads). The result is
/// `one` plus the last item of `two`. Any other shape of difference yields
/// `None`, as do identical inputs.
pub fn merge_itemsets(one: &[ItemId], two: &[ItemId]) -> Option<Itemset> {
    debug_assert_eq!(one.len(), two.len());
    let length = one.len();
    if length == 0 {
        return None;
    }

    let mut merged = Itemset::with_capacity(length + 1);
    let (mut i, mut j) = (0, 0);
    let mut diverged = false;

    while i < length && j < length {
        match one[i].cmp(&two[j]) {
            Ordering::Equal => {
                merged.push(one[i]);
                i += 1;
                j += 1;
            }
            Ordering::Less if !diverged => {
                diverged = true;
                merged.push(one[i]);
                i += 1;
            }
            _ => return None,
        }
    }

    if !diverged {
        return None;
    }

    // i == length, j == length - 1
    merged.push(two[j]);
    debug_assert!(merged.windows(2).all(|w| w[0] < w[1]));
    Some(merged)
}

/// Per-level tally of how many subset pairs produced each candidate.
///
/// A candidate of size k+1 is produced once for every k-subset that still
/// contains its largest item, so a count of k means all of its k-subsets were
/// present in the level.
#[derive(Debug, Default)]
pub struct CandidateTracker {
    seen: AHashMap<Itemset, usize>,
}

impl CandidateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one production of `candidate`; true once it reaches `needed`.
    pub fn confirm(&mut self, candidate: &Itemset, needed: usize) -> bool {
        let count = match self.seen.get_mut(candidate) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                self.seen.insert(candidate.clone(), 1);
                1
            }
        };
        count == needed
    }

    /// Distinct candidates produced so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Enumerates every ordered pair of `level` once and hands each fully
/// confirmed candidate to `callback`, in generation order.
///
/// Returns the number of distinct candidates that were produced.
pub fn for_each_confirmed_candidate<F>(level: &FrequentLevel, mut callback: F) -> usize
where
    F: FnMut(Itemset),
{
    let needed = level.itemset_size;
    let mut tracker = CandidateTracker::new();

    for i in 0..level.len() {
        let one = level.get_itemset(i);

        for j in i + 1..level.len() {
            let two = level.get_itemset(j);

            if let Some(candidate) = merge_itemsets(one, two) {
                if tracker.confirm(&candidate, needed) {
                    callback(candidate);
                }
            }
        }
    }

    tracker.len()
}
