use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Hard upper bound on the number of nodes a graph may declare.
pub const MAX_NODES: usize = 100;

/// Hard upper bound on the number of edges a single run may request.
pub const MAX_EDGES: usize = 100;

/// Single character node label.
pub type Label = char;

/// Non-negative edge weight stored in the adjacency matrix.
pub type Weight = u32;

/// Verbatim `(from, to, weight)` triple supplied to [`Graph::insert_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub from: Label,
    pub to: Label,
    pub weight: Weight,
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.to, self.weight)
    }
}

/// Outcome of an edge that resolved to two declared nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsertion {
    /// No edge existed between the pair yet.
    Inserted,
    /// A heavier parallel edge was replaced.
    Lowered { previous: Weight },
    /// A lighter or equal parallel edge was already stored.
    Kept { existing: Weight },
}

/// Label to dense index mapping, built once when the graph is constructed.
#[derive(Debug, Clone, Default)]
struct NodeIndex {
    labels: Vec<Label>,
    positions: HashMap<Label, usize>,
}

impl NodeIndex {
    fn new(labels: &[Label]) -> Result<Self> {
        check_node_count(labels.len())?;

        let mut positions = HashMap::with_capacity(labels.len());
        for (index, &label) in labels.iter().enumerate() {
            if positions.insert(label, index).is_some() {
                return Err(Error::DuplicateLabel { label });
            }
        }

        Ok(Self {
            labels: labels.to_vec(),
            positions,
        })
    }

    fn get(&self, label: Label) -> Option<usize> {
        self.positions.get(&label).copied()
    }

    fn label(&self, index: usize) -> Option<Label> {
        self.labels.get(index).copied()
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

/// Undirected weighted graph backed by a dense, symmetric adjacency matrix.
///
/// Cells hold `None` when no edge exists, so zero-weight edges are kept as
/// real connections. Every triple that passes the weight check is appended
/// to the edge log, even when one of its labels turns out to be unknown.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: NodeIndex,
    matrix: Vec<Option<Weight>>,
    edge_log: Vec<EdgeRecord>,
}

impl Graph {
    /// Build an edgeless graph over `labels`, preserving their input order.
    pub fn new(labels: &[Label]) -> Result<Self> {
        let nodes = NodeIndex::new(labels)?;
        let n = nodes.len();
        debug!(nodes = n, "initialised adjacency matrix");
        Ok(Self {
            nodes,
            matrix: vec![None; n * n],
            edge_log: Vec::new(),
        })
    }

    /// Insert an undirected edge, coalescing parallel edges to the minimum weight.
    pub fn insert_edge(&mut self, from: Label, to: Label, weight: i64) -> Result<EdgeInsertion> {
        let weight = Weight::try_from(weight).map_err(|_| Error::InvalidEdgeWeight { weight })?;
        self.edge_log.push(EdgeRecord { from, to, weight });

        let (Some(u), Some(v)) = (self.nodes.get(from), self.nodes.get(to)) else {
            debug!(%from, %to, "edge references unknown node");
            return Err(Error::UnknownNodeLabel { from, to });
        };

        let outcome = match self.weight(u, v) {
            None => EdgeInsertion::Inserted,
            Some(existing) if weight < existing => EdgeInsertion::Lowered { previous: existing },
            Some(existing) => EdgeInsertion::Kept { existing },
        };

        if !matches!(outcome, EdgeInsertion::Kept { .. }) {
            let n = self.len();
            self.matrix[u * n + v] = Some(weight);
            self.matrix[v * n + u] = Some(weight);
        }

        debug!(%from, %to, weight, ?outcome, "processed edge");
        Ok(outcome)
    }

    /// Number of declared nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node labels in their original input order.
    pub fn labels(&self) -> &[Label] {
        &self.nodes.labels
    }

    pub fn index_of(&self, label: Label) -> Option<usize> {
        self.nodes.get(label)
    }

    pub fn label(&self, index: usize) -> Option<Label> {
        self.nodes.label(index)
    }

    /// Weight stored between two node indices, `None` when absent or out of range.
    pub fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        let n = self.len();
        if u >= n || v >= n {
            return None;
        }
        self.matrix[u * n + v]
    }

    /// Weight stored between two labels.
    pub fn weight_between(&self, from: Label, to: Label) -> Option<Weight> {
        self.weight(self.index_of(from)?, self.index_of(to)?)
    }

    /// Present edges leaving `u`, in ascending index order.
    pub fn neighbours(&self, u: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, cell)| cell.map(|weight| (v, weight)))
    }

    /// Matrix row for `u`; empty when `u` is out of range.
    pub fn row(&self, u: usize) -> &[Option<Weight>] {
        let n = self.len();
        if u >= n {
            return &[];
        }
        &self.matrix[u * n..(u + 1) * n]
    }

    /// Every accepted-weight triple in input order.
    pub fn edge_log(&self) -> &[EdgeRecord] {
        &self.edge_log
    }
}

/// Validate a requested edge count against [`MAX_EDGES`].
pub fn check_edge_count(requested: usize) -> Result<()> {
    if requested > MAX_EDGES {
        return Err(Error::CapacityExceeded {
            what: "edge",
            requested,
            max: MAX_EDGES,
        });
    }
    Ok(())
}

/// Validate a requested node count against [`MAX_NODES`].
pub fn check_node_count(requested: usize) -> Result<()> {
    if requested > MAX_NODES {
        return Err(Error::CapacityExceeded {
            what: "node",
            requested,
            max: MAX_NODES,
        });
    }
    Ok(())
}
