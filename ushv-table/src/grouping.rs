//! Keyed grouping and reindexing against canonical category orders.

use std::collections::BTreeMap;
use ushv_utils::math::percentage;

/// Count occurrences of each key. The map iterates in key order.
pub fn count_keys<K: Ord>(keys: impl IntoIterator<Item = K>) -> BTreeMap<K, u64> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0u64) += 1;
    }
    counts
}

/// Lay `counts` out in `canonical` order, filling absent keys with 0.
///
/// Keys not in `canonical` are dropped.
pub fn reindex<K: Ord + Copy>(counts: &BTreeMap<K, u64>, canonical: &[K]) -> Vec<(K, u64)> {
    canonical
        .iter()
        .map(|key| (*key, counts.get(key).copied().unwrap_or(0)))
        .collect()
}

/// Like [`reindex`], but keys outside `canonical` are kept after the
/// canonical ones, in key order.
pub fn reindex_with_extras<K: Ord + Copy>(
    counts: &BTreeMap<K, u64>,
    canonical: &[K],
) -> Vec<(K, u64)> {
    let mut rows = reindex(counts, canonical);
    rows.extend(
        counts
            .iter()
            .filter(|(key, _)| !canonical.contains(key))
            .map(|(key, count)| (*key, *count)),
    );
    rows
}

/// One cell of a ratio-of-population table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioCell<K> {
    pub key: K,
    pub population: u64,
    pub cases: u64,
    pub ratio: f64,
}

/// Divide case counts by population counts cell by cell.
///
/// Cells come from the population grid (canonical first, then extras);
/// a cell with no population gets a ratio of 0.
pub fn case_ratios<K: Ord + Copy>(
    population: &BTreeMap<K, u64>,
    cases: &BTreeMap<K, u64>,
    canonical: &[K],
) -> Vec<RatioCell<K>> {
    reindex_with_extras(population, canonical)
        .into_iter()
        .map(|(key, residents)| {
            let case_count = cases.get(&key).copied().unwrap_or(0);
            RatioCell {
                key,
                population: residents,
                cases: case_count,
                ratio: percentage(case_count, residents),
            }
        })
        .collect()
}
