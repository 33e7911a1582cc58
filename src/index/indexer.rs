//! TagIndex: assigns stable ids to case-insensitive tags and counts their usage

use super::tag::{canonical_key, RankedTag, Tag, TagId, TagUsage};
use crate::error::{TagnetError, TagnetResult};
use std::collections::HashMap;
use tracing::debug;

/// Case-insensitive tag index owned by a single ingestion run.
///
/// Ids are handed out sequentially in first-seen order and never change
/// for the lifetime of the index. Each id maps to exactly one canonical
/// key, and the display name is frozen at the first casing seen.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    /// Tags in id order
    tags: Vec<Tag>,
    /// Canonical key -> id
    ids: HashMap<String, TagId>,
    /// Sum of every occurrence of every tag
    global_occurrences: u64,
}

impl TagIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one occurrence of `tag` and return its id.
    ///
    /// Unseen canonical keys get the next sequential id. Empty or
    /// whitespace-only tags are rejected.
    pub fn register(&mut self, tag: &str) -> TagnetResult<TagId> {
        validate(tag)?;
        Ok(self.register_unchecked(tag))
    }

    /// Register every tag in order, returning ids in the same order.
    ///
    /// Repeated tags are counted each time. The whole batch is validated
    /// before anything is registered, so a rejected batch leaves the index
    /// untouched.
    pub fn register_many<S: AsRef<str>>(&mut self, tags: &[S]) -> TagnetResult<Vec<TagId>> {
        for tag in tags {
            validate(tag.as_ref())?;
        }
        Ok(tags
            .iter()
            .map(|tag| self.register_unchecked(tag.as_ref()))
            .collect())
    }

    fn register_unchecked(&mut self, raw: &str) -> TagId {
        let key = canonical_key(raw);
        let id = match self.ids.get(&key) {
            Some(id) => *id,
            None => {
                let id = TagId::new(self.tags.len());
                debug!(%id, tag = raw, "registered new tag");
                self.tags.push(Tag::new(id, raw));
                self.ids.insert(key, id);
                id
            }
        };
        self.tags[id.index()].occurrence_count += 1;
        self.global_occurrences += 1;
        id
    }

    /// Share of all occurrences that belong to `id`.
    ///
    /// Fails with `DivisionUndefined` before the first registration.
    pub fn rank_of(&self, id: TagId) -> TagnetResult<f64> {
        if self.global_occurrences == 0 {
            return Err(TagnetError::DivisionUndefined(
                "rank requested before any tag was registered",
            ));
        }
        let tag = self.get(id).ok_or(TagnetError::UnknownTag(id))?;
        Ok(tag.occurrence_count as f64 / self.global_occurrences as f64)
    }

    /// One entry per distinct tag, ascending by id
    pub fn all_tags(&self) -> Vec<RankedTag> {
        // An empty index yields no entries, so the denominator is never zero here
        let total = self.global_occurrences as f64;
        self.tags
            .iter()
            .map(|tag| RankedTag {
                id: tag.id,
                name: tag.display_name.clone(),
                rank: tag.occurrence_count as f64 / total,
            })
            .collect()
    }

    /// Display names with counts, most used first; ties keep first-seen order
    pub fn usage_table(&self) -> Vec<TagUsage> {
        let mut rows: Vec<TagUsage> = self
            .tags
            .iter()
            .map(|tag| TagUsage {
                name: tag.display_name.clone(),
                count: tag.occurrence_count,
            })
            .collect();
        // sort_by is stable
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    /// Get a tag by id
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.tags.get(id.index())
    }

    /// Look up the id of a tag, ignoring case
    pub fn lookup(&self, tag: &str) -> Option<TagId> {
        self.ids.get(&canonical_key(tag)).copied()
    }

    /// Occurrence count of a tag, if it exists
    pub fn occurrence_count(&self, id: TagId) -> Option<u64> {
        self.get(id).map(|tag| tag.occurrence_count)
    }

    /// Check if an id belongs to this index
    pub fn contains(&self, id: TagId) -> bool {
        id.index() < self.tags.len()
    }

    /// Total occurrences across all tags
    pub fn global_occurrences(&self) -> u64 {
        self.global_occurrences
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// All tags in id order
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }
}

fn validate(tag: &str) -> TagnetResult<()> {
    if tag.trim().is_empty() {
        return Err(TagnetError::InvalidInput(format!(
            "tag must be a non-empty string, got {:?}",
            tag
        )));
    }
    Ok(())
}
