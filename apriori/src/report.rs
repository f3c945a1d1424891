//! Human-readable rendering of a finished run.

use std::io::{self, Write};

use crate::mining::{Apriori, ItemId};

/// Canonical display form: ascending items joined by commas, e.g. `1,2,3`.
pub fn itemset_to_string(itemset: &[ItemId]) -> String {
    let mut out = String::with_capacity(itemset.len() * 4);
    for (i, item) in itemset.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&item.to_string());
    }
    out
}

/// Database summary printed before mining starts.
pub fn write_summary<W: Write>(out: &mut W, apriori: &Apriori) -> io::Result<()> {
    writeln!(out, "The size of transactions DB:\t{}", apriori.len_of_db())?;
    writeln!(out, "The number of items:\t{}", apriori.num_items())
}

/// Result count followed by one `itemset:\tcount` line per frequent itemset,
/// level by level in discovery order.
pub fn write_report<W: Write>(out: &mut W, apriori: &Apriori) -> io::Result<()> {
    writeln!(
        out,
        "The number of frequent itemsets:\t{}",
        apriori.num_frequent_itemsets()
    )?;
    writeln!(out, "(over or equal to {})", apriori.minsup_count())?;

    for level in apriori.frequent_levels() {
        for (itemset, support) in level.iter() {
            writeln!(out, "{}:\t{}", itemset_to_string(itemset), support)?;
        }
    }
    Ok(())
}
