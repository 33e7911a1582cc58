//! Tagnet: tag co-occurrence networks for text prompt corpora
//!
//! Extracts tags from prompts, indexes them case-insensitively, ranks them
//! by popularity, and aggregates tags that appear together into a weighted
//! undirected graph.
//!
//! # Core Concepts
//!
//! - **Tags**: case-insensitive labels with stable ids in first-seen order
//! - **Rank**: a tag's share of all tag occurrences
//! - **Edges**: unordered tag pairs weighted by `pair_count / distinct_edge_count`
//!
//! # Example
//!
//! ```
//! use tagnet::TagNetwork;
//!
//! let mut network = TagNetwork::new();
//! network
//!     .ingest_all([".imagine the night ; vray ; HDR", ".imagine omicron ; VRAY ; PBR"])
//!     .unwrap();
//!
//! let graph = network.graph().unwrap();
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! ```

mod error;
pub mod export;
pub mod filter;
mod graph;
mod index;
mod network;
pub mod prompt;

pub use error::{TagnetError, TagnetResult};
pub use export::{export_graph, write_node_link, NodeLinkData};
pub use filter::{Comparison, NumberFilter};
pub use graph::{
    generate_pairs, EdgeKey, Graph, GraphEdge, GraphNode, PairAggregator, WeightedEdge,
};
pub use index::{canonical_key, RankedTag, Tag, TagId, TagIndex, TagUsage};
pub use network::TagNetwork;
pub use prompt::{extract_tags, load_prompts};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
