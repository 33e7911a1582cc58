//! Error type shared by every tagnet component

use crate::index::TagId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while indexing tags or building a tag graph
#[derive(Debug, Error)]
pub enum TagnetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division undefined: {0}")]
    DivisionUndefined(&'static str),

    #[error("Integrity violation: edge {low}-{high} references unknown tag {missing}")]
    IntegrityViolation {
        low: TagId,
        high: TagId,
        missing: TagId,
    },

    #[error("Tag not found: {0}")]
    UnknownTag(TagId),

    #[error("Wrong number filter value: {0:?}. Provide an input like \"<x\", \"= x\" or \">=x\", where x is an integer")]
    InvalidFilter(String),

    #[error("{} is not a readable directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for tagnet operations
pub type TagnetResult<T> = Result<T, TagnetError>;
