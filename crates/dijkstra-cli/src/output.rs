//! Console rendering for a completed shortest-path run.

use std::io::{self, Write};

use clap::ValueEnum;

use dijkstra_lib::{render_adjacency_table, DistanceSummary, DistanceTable, Graph};

/// Console presentation of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab separated adjacency matrix.
    #[default]
    Text,
    /// Pretty-printed JSON distance summary.
    Json,
}

/// Print the result in the requested format.
pub fn print_result<W: Write>(
    out: &mut W,
    format: OutputFormat,
    graph: &Graph,
    table: &DistanceTable,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => out.write_all(render_adjacency_table(graph).as_bytes()),
        OutputFormat::Json => {
            let summary = DistanceSummary::new(graph, table);
            let json = summary.to_json().map_err(io::Error::other)?;
            writeln!(out, "{json}")
        }
    }
}
