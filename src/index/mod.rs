//! Tag canonicalization and indexing

mod indexer;
mod tag;

pub use indexer::TagIndex;
pub use tag::{canonical_key, RankedTag, Tag, TagId, TagUsage};
