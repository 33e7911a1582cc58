//! Co-occurrence pair generation and aggregation
//!
//! Tags that appear in the same prompt form unordered id pairs. Each pair
//! is stored once, keyed with the smaller id first, and counted every
//! time it is recorded. Edge weight is `pair_count / distinct_edge_count`,
//! so weights are relative to edge cardinality and need not sum to 1.

use crate::error::{TagnetError, TagnetResult};
use crate::index::TagId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Unordered pair of distinct tag ids, stored with the smaller id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    low: TagId,
    high: TagId,
}

impl EdgeKey {
    /// Build the key for `{a, b}`. Self-pairs are rejected.
    pub fn new(a: TagId, b: TagId) -> TagnetResult<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Ok(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => Err(TagnetError::InvalidInput(format!(
                "a tag cannot pair with itself ({})",
                a
            ))),
        }
    }

    pub fn low(&self) -> TagId {
        self.low
    }

    pub fn high(&self) -> TagId {
        self.high
    }

    pub fn as_tuple(&self) -> (TagId, TagId) {
        (self.low, self.high)
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.low, self.high)
    }
}

/// A recorded pair with its normalized weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub edge: EdgeKey,
    /// How many times the pair was recorded
    pub count: u64,
    /// `count / distinct_edge_count` at snapshot time
    pub weight: f64,
}

/// All distinct unordered pairs of the given ids, smaller id first.
///
/// Duplicate ids collapse, so `n` distinct ids always yield
/// `n * (n - 1) / 2` pairs in ascending lexicographic order, and fewer
/// than two distinct ids yield none.
pub fn generate_pairs<I>(ids: I) -> Vec<EdgeKey>
where
    I: IntoIterator<Item = TagId>,
{
    let distinct: Vec<TagId> = ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    let mut pairs = Vec::with_capacity(distinct.len() * distinct.len().saturating_sub(1) / 2);
    for (i, &low) in distinct.iter().enumerate() {
        for &high in &distinct[i + 1..] {
            pairs.push(EdgeKey { low, high });
        }
    }
    pairs
}

/// Accumulates co-occurrence counts for unordered tag pairs.
///
/// Pairs keep the order in which they were first recorded.
#[derive(Debug, Clone, Default)]
pub struct PairAggregator {
    /// Pair records in first-recorded order
    records: Vec<(EdgeKey, u64)>,
    /// Pair -> position in `records`
    positions: HashMap<EdgeKey, usize>,
    /// Every `record_pair` call, repeats included
    update_count: u64,
}

impl PairAggregator {
    /// Create a new empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every pair of tags that co-occur in one context
    pub fn record_pairs<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = TagId>,
    {
        for key in generate_pairs(ids) {
            self.record_key(key);
        }
    }

    /// Record one co-occurrence of `a` and `b`, in either orientation
    pub fn record_pair(&mut self, a: TagId, b: TagId) -> TagnetResult<()> {
        let key = EdgeKey::new(a, b)?;
        self.record_key(key);
        Ok(())
    }

    fn record_key(&mut self, key: EdgeKey) {
        match self.positions.get(&key) {
            Some(&position) => self.records[position].1 += 1,
            None => {
                self.positions.insert(key, self.records.len());
                self.records.push((key, 1));
            }
        }
        self.update_count += 1;
    }

    /// Total number of recorded pair updates, repeats included
    pub fn total_updates(&self) -> u64 {
        self.update_count
    }

    /// Number of unique unordered pairs recorded so far
    pub fn distinct_edge_count(&self) -> usize {
        self.records.len()
    }

    /// Count recorded for `{a, b}`, if any
    pub fn pair_count(&self, a: TagId, b: TagId) -> Option<u64> {
        let key = EdgeKey::new(a, b).ok()?;
        self.positions.get(&key).map(|&position| self.records[position].1)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every recorded pair with its weight, in first-recorded order.
    ///
    /// Returns nothing when no pair has been recorded.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        if self.records.is_empty() {
            return Vec::new();
        }
        let edge_count = self.records.len() as f64;
        self.records
            .iter()
            .map(|&(edge, count)| WeightedEdge {
                edge,
                count,
                weight: count as f64 / edge_count,
            })
            .collect()
    }
}
