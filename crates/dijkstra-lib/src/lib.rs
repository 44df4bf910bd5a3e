//! Dense-matrix shortest-path library entry points.
//!
//! This crate builds small undirected weighted graphs keyed by single
//! character labels, runs Dijkstra's algorithm from a chosen source, and
//! renders the results. Front ends (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod output;
pub mod path;

pub use error::{Error, Result};
pub use graph::{
    check_edge_count, check_node_count, EdgeInsertion, EdgeRecord, Graph, Label, Weight,
    MAX_EDGES, MAX_NODES,
};
pub use output::{render_adjacency_table, render_distances, DistanceSummary, NodeDistance};
pub use path::{shortest_paths, shortest_paths_from, Distance, DistanceTable};
