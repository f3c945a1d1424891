use super::index::TransactionIndex;
use super::ItemId;

/// Absolute minimum support for `minsup` over the index.
///
/// Returns `None` when the index holds no transactions; the caller keeps its
/// previous setting in that case.
pub fn resolve_minsup(index: &TransactionIndex, minsup: f64) -> Option<usize> {
    if index.is_empty() {
        return None;
    }
    Some((index.len() as f64 * minsup).ceil() as usize)
}

/// Linear merge of two ascending transaction lists.
pub fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            out.push(a[i]);
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }

    out
}

/// Number of transactions containing every item of `itemset`.
pub fn support_count(index: &TransactionIndex, itemset: &[ItemId]) -> usize {
    let Some((&first, rest)) = itemset.split_first() else {
        return 0;
    };

    let first_transactions = index.transactions(first);
    if rest.is_empty() {
        return first_transactions.len();
    }

    let mut shared = intersect_sorted(first_transactions, index.transactions(rest[0]));
    for &item in &rest[1..] {
        if shared.is_empty() {
            break;
        }
        shared = intersect_sorted(&shared, index.transactions(item));
    }

    shared.len()
}
