use thiserror::Error;

use crate::graph::Label;

/// Convenient result alias for the shortest-path library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised when an edge weight is negative or does not fit the matrix cell type.
    #[error("invalid edge weight {weight}; negative weights not allowed in Dijkstra's algorithm")]
    InvalidEdgeWeight { weight: i64 },

    /// Raised when an edge references a label that was never declared.
    #[error("invalid node name in edge: {from} {to}")]
    UnknownNodeLabel { from: Label, to: Label },

    /// Raised when the requested source label is not part of the graph.
    #[error("source node {label} not found")]
    SourceNotFound { label: String },

    /// Raised when a source index lies outside the declared nodes.
    #[error("source index {index} is out of range for {len} nodes")]
    SourceIndexOutOfRange { index: usize, len: usize },

    /// Raised when a node or edge count exceeds the fixed capacity bound.
    #[error("{what} count {requested} exceeds the maximum of {max}")]
    CapacityExceeded {
        what: &'static str,
        requested: usize,
        max: usize,
    },

    /// Raised when the same label is declared for two nodes.
    #[error("duplicate node name encountered: {label}")]
    DuplicateLabel { label: Label },
}
