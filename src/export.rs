//! Node-link JSON export
//!
//! Writes the layout used by graph tooling such as d3 and networkx:
//!
//! ```json
//! {
//!     "directed": false,
//!     "multigraph": false,
//!     "graph": {},
//!     "nodes": [{ "name": "VFX", "rank": 0.5, "id": 0 }],
//!     "links": [{ "weight": 1.0, "source": 0, "target": 1 }]
//! }
//! ```

use crate::error::TagnetResult;
use crate::graph::Graph;
use crate::index::TagId;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    pub name: String,
    pub rank: f64,
    pub id: TagId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkLink {
    pub weight: f64,
    pub source: TagId,
    pub target: TagId,
}

/// Serializable node-link document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkData {
    pub directed: bool,
    pub multigraph: bool,
    pub graph: Map<String, Value>,
    pub nodes: Vec<NodeLinkNode>,
    pub links: Vec<NodeLinkLink>,
}

impl From<&Graph> for NodeLinkData {
    fn from(graph: &Graph) -> Self {
        Self {
            directed: false,
            multigraph: false,
            graph: Map::new(),
            nodes: graph
                .nodes()
                .iter()
                .map(|node| NodeLinkNode {
                    name: node.name.clone(),
                    rank: node.rank,
                    id: node.id,
                })
                .collect(),
            links: graph
                .edges()
                .iter()
                .map(|edge| NodeLinkLink {
                    weight: edge.weight,
                    source: edge.source,
                    target: edge.target,
                })
                .collect(),
        }
    }
}

/// Write `graph` as pretty-printed node-link JSON, four-space indented
pub fn write_node_link<W: Write>(graph: &Graph, writer: W) -> TagnetResult<()> {
    let data = NodeLinkData::from(graph);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    data.serialize(&mut serializer)?;
    Ok(())
}

/// Export `graph` to a file, replacing any existing content
pub fn export_graph(graph: &Graph, path: &Path) -> TagnetResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_node_link(graph, &mut writer)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        links = graph.edge_count(),
        "exported graph"
    );
    Ok(())
}
