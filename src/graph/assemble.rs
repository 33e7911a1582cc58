//! Graph: tags as nodes and weighted co-occurrence pairs as edges

use super::pairs::PairAggregator;
use crate::error::{TagnetError, TagnetResult};
use crate::index::{TagId, TagIndex};
use serde::{Deserialize, Serialize};

/// A tag node; every node carries its display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: TagId,
    pub name: String,
    pub rank: f64,
}

/// An undirected weighted edge, `source < target`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: TagId,
    pub target: TagId,
    pub weight: f64,
}

/// Undirected tag co-occurrence graph.
///
/// Built once from a finished ingestion run; it holds no reference to the
/// index or aggregator it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl Graph {
    /// Translate an index and an aggregator into a graph.
    ///
    /// Every edge endpoint must be a tag of `index`; an edge that names an
    /// unknown id is an `IntegrityViolation`.
    pub fn assemble(index: &TagIndex, pairs: &PairAggregator) -> TagnetResult<Self> {
        let nodes: Vec<GraphNode> = index
            .all_tags()
            .into_iter()
            .map(|tag| GraphNode {
                id: tag.id,
                name: tag.name,
                rank: tag.rank,
            })
            .collect();

        let mut edges = Vec::with_capacity(pairs.distinct_edge_count());
        for weighted in pairs.edges() {
            let (low, high) = weighted.edge.as_tuple();
            for endpoint in [low, high] {
                if !index.contains(endpoint) {
                    return Err(TagnetError::IntegrityViolation {
                        low,
                        high,
                        missing: endpoint,
                    });
                }
            }
            edges.push(GraphEdge {
                source: low,
                target: high,
                weight: weighted.weight,
            });
        }

        Ok(Self { nodes, edges })
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a node by id
    pub fn node(&self, id: TagId) -> Option<&GraphNode> {
        self.nodes.get(id.index()).filter(|node| node.id == id)
    }

    /// Edges sorted by descending weight; equal weights keep insertion order
    pub fn heaviest_edges(&self, limit: usize) -> Vec<&GraphEdge> {
        let mut sorted: Vec<&GraphEdge> = self.edges.iter().collect();
        sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        sorted.truncate(limit);
        sorted
    }
}
