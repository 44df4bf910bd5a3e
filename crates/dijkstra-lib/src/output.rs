use std::fmt::Write;

use serde::Serialize;

use crate::graph::{EdgeRecord, Graph, Label};
use crate::path::{Distance, DistanceTable};

/// Render the distances file, one line per node in input order.
pub fn render_distances(graph: &Graph, table: &DistanceTable) -> String {
    let mut buffer = String::new();
    let source = graph.label(table.source()).unwrap_or('?');
    let _ = writeln!(buffer, "Shortest distances from node {source}:");
    for (index, distance) in table.iter() {
        let label = graph.label(index).unwrap_or('?');
        let _ = writeln!(buffer, "To node {label}: {distance}");
    }
    buffer
}

/// Render the adjacency matrix as a tab separated table with row and column labels.
///
/// Absent edges print as `0`.
pub fn render_adjacency_table(graph: &Graph) -> String {
    let mut buffer = String::from("\t");
    for label in graph.labels() {
        let _ = write!(buffer, "{label}\t");
    }
    buffer.push('\n');

    for (index, label) in graph.labels().iter().enumerate() {
        let _ = write!(buffer, "{label}\t");
        for cell in graph.row(index) {
            let _ = write!(buffer, "{}\t", cell.unwrap_or(0));
        }
        buffer.push('\n');
    }
    buffer
}

/// Per-node entry of a [`DistanceSummary`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NodeDistance {
    pub label: Label,
    pub distance: Distance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Label>>,
}

/// Structured representation of a run that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DistanceSummary {
    pub source: Label,
    pub reachable: usize,
    pub nodes: Vec<NodeDistance>,
    pub edges: Vec<EdgeRecord>,
}

impl DistanceSummary {
    /// Pair a distance table with the graph's labels and edge log.
    pub fn new(graph: &Graph, table: &DistanceTable) -> Self {
        let to_labels = |path: Vec<usize>| -> Vec<Label> {
            path.into_iter().filter_map(|index| graph.label(index)).collect()
        };

        let nodes = table
            .iter()
            .filter_map(|(index, distance)| {
                Some(NodeDistance {
                    label: graph.label(index)?,
                    distance,
                    path: table.path_to(index).map(to_labels),
                })
            })
            .collect();

        Self {
            source: graph.label(table.source()).unwrap_or('?'),
            reachable: table.reachable_count(),
            nodes,
            edges: graph.edge_log().to_vec(),
        }
    }

    /// Render the summary as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
