use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, Label};

/// Accumulated shortest-path weight for a single node.
///
/// Serializes as a plain number, or `null` when unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    Reachable(u64),
    /// Sorts after every finite distance.
    Unreachable,
}

impl Distance {
    pub fn as_option(self) -> Option<u64> {
        match self {
            Distance::Reachable(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Reachable(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reachable(value) => write!(f, "{value}"),
            Distance::Unreachable => f.write_str("INF"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Distance::Reachable(value) => serializer.serialize_u64(*value),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}

/// Result of a single-source run over a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    source: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
    visit_order: Vec<usize>,
}

impl DistanceTable {
    /// Index of the node the run started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance to `index`; out-of-range indices are unreachable.
    pub fn distance(&self, index: usize) -> Distance {
        self.distances
            .get(index)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Distance to the node labelled `label`, `None` when the label is unknown.
    pub fn distance_of(&self, graph: &Graph, label: Label) -> Option<Distance> {
        graph.index_of(label).map(|index| self.distance(index))
    }

    /// Distances in node index order.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Distance)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Node indices in the order they were finalized.
    pub fn visit_order(&self) -> &[usize] {
        &self.visit_order
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_reachable()).count()
    }

    /// Reconstruct the lowest-cost path from the source to `target`.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distance(target).is_reachable() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Run Dijkstra's algorithm from the node labelled `source`.
pub fn shortest_paths(graph: &Graph, source: Label) -> Result<DistanceTable> {
    let index = graph.index_of(source).ok_or_else(|| Error::SourceNotFound {
        label: source.to_string(),
    })?;
    shortest_paths_from(graph, index)
}

/// Run Dijkstra's algorithm from a node index.
///
/// Selection is a linear scan over the unvisited nodes with a strict
/// comparison, so the lowest index wins ties. The scan runs `n - 1` rounds
/// and stops early once no finite unvisited node remains.
pub fn shortest_paths_from(graph: &Graph, source: usize) -> Result<DistanceTable> {
    let n = graph.len();
    if source >= n {
        return Err(Error::SourceIndexOutOfRange { index: source, len: n });
    }

    let mut distances = vec![Distance::Unreachable; n];
    let mut predecessors = vec![None; n];
    let mut visited = vec![false; n];
    let mut visit_order = Vec::with_capacity(n);
    distances[source] = Distance::Reachable(0);

    for round in 0..n.saturating_sub(1) {
        let Some((u, base)) = closest_unvisited(&distances, &visited) else {
            debug!(round, "remaining nodes unreachable from source");
            break;
        };

        visited[u] = true;
        visit_order.push(u);

        for (v, weight) in graph.neighbours(u) {
            if visited[v] {
                continue;
            }
            let candidate = Distance::Reachable(base + u64::from(weight));
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
            }
        }
    }

    debug!(
        source,
        reachable = distances.iter().filter(|d| d.is_reachable()).count(),
        "computed shortest paths"
    );

    Ok(DistanceTable {
        source,
        distances,
        predecessors,
        visit_order,
    })
}

fn closest_unvisited(distances: &[Distance], visited: &[bool]) -> Option<(usize, u64)> {
    let mut best: Option<(usize, u64)> = None;
    for (index, distance) in distances.iter().enumerate() {
        if visited[index] {
            continue;
        }
        if let Distance::Reachable(value) = *distance {
            if best.map_or(true, |(_, current)| value < current) {
                best = Some((index, value));
            }
        }
    }
    best
}
