//! Tag representation in the index

use serde::{Deserialize, Serialize};

/// Stable numeric identity of a tag, assigned in first-seen order from 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(usize);

impl TagId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the tag in its index
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercase form of a tag, used for identity and deduplication
pub fn canonical_key(tag: &str) -> String {
    tag.to_lowercase()
}

/// A distinct, case-insensitive tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    /// Lowercase identity key
    pub canonical_key: String,
    /// Casing captured on the first occurrence
    pub display_name: String,
    /// Every occurrence counts, including repeats within one prompt
    pub occurrence_count: u64,
}

impl Tag {
    pub(crate) fn new(id: TagId, raw: &str) -> Self {
        Self {
            id,
            canonical_key: canonical_key(raw),
            display_name: raw.to_string(),
            occurrence_count: 0,
        }
    }
}

/// A tag with its share of all tag occurrences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTag {
    pub id: TagId,
    pub name: String,
    pub rank: f64,
}

/// One row of the usage table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagUsage {
    pub name: String,
    pub count: u64,
}

impl std::fmt::Display for TagUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.name, self.count)
    }
}
