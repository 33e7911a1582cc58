//! Co-occurrence aggregation and graph assembly

mod assemble;
mod pairs;

pub use assemble::{Graph, GraphEdge, GraphNode};
pub use pairs::{generate_pairs, EdgeKey, PairAggregator, WeightedEdge};
