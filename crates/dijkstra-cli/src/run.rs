//! Run handler: drives a session, persists the edge record and distances.

use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use dijkstra_lib::{render_distances, shortest_paths, Error as GraphError};

use crate::output::{print_result, OutputFormat};
use crate::session::{single_char, Session};

/// Arguments for a run.
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Destination of the edge record.
    pub edges_file: PathBuf,
    /// Destination of the distances file.
    pub output_file: PathBuf,
    /// Console presentation of the result.
    pub format: OutputFormat,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Distances were written and the result printed.
    Completed,
    /// The requested source label was not declared; no distances were written.
    SourceNotFound { label: String },
}

impl RunOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Completed => 0,
            RunOutcome::SourceNotFound { .. } => 1,
        }
    }
}

/// Handle a full run over `session`.
///
/// The edge record is created up front and filled while edges are read, so
/// it holds every edge read so far even when input ends early or the source
/// turns out to be unknown.
pub fn handle_run<R: BufRead, W: Write>(
    args: &RunArgs,
    session: &mut Session<R, W>,
) -> Result<RunOutcome> {
    let edges_file = File::create(&args.edges_file).with_context(|| {
        format!(
            "failed to create edge record {}",
            args.edges_file.display()
        )
    })?;
    let mut edge_sink = BufWriter::new(edges_file);
    let graph = session
        .read_graph(&mut edge_sink)
        .context("failed to read the graph")?;
    edge_sink.flush().with_context(|| {
        format!(
            "failed to write edge record to {}",
            args.edges_file.display()
        )
    })?;
    info!(path = %args.edges_file.display(), edges = graph.edge_log().len(), "wrote edge record");

    let source = session
        .read_source()
        .context("failed to read the source node")?;
    let lookup = match single_char(&source) {
        Some(label) => shortest_paths(&graph, label),
        None => Err(GraphError::SourceNotFound {
            label: source.clone(),
        }),
    };

    let out = session.output();
    let table = match lookup {
        Ok(table) => table,
        Err(GraphError::SourceNotFound { label }) => {
            writeln!(out, "Source node not found!")?;
            return Ok(RunOutcome::SourceNotFound { label });
        }
        Err(err) => return Err(err.into()),
    };

    fs::write(&args.output_file, render_distances(&graph, &table)).with_context(|| {
        format!(
            "failed to write distances to {}",
            args.output_file.display()
        )
    })?;
    info!(path = %args.output_file.display(), reachable = table.reachable_count(), "wrote distances");

    print_result(out, args.format, &graph, &table)?;
    writeln!(
        out,
        "\nShortest paths written to {}",
        args.output_file.display()
    )?;
    writeln!(out, "Graph edges written to {}", args.edges_file.display())?;

    Ok(RunOutcome::Completed)
}
