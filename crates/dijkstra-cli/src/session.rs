//! Interactive prompting that feeds the shortest-path engine.
//!
//! The session asks for the node count, the node labels, the edge count and
//! the edges themselves, then the source label. Invalid answers are reported
//! on the output stream and solicited again; only an unknown edge label
//! consumes one of the requested edge slots.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, warn};

use dijkstra_lib::{
    check_edge_count, check_node_count, Error as GraphError, Graph, Label, Weight, MAX_EDGES,
    MAX_NODES,
};

use crate::input::TokenReader;

/// Errors that end a session before the graph is complete.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input ran out while the session still expected an answer.
    #[error("input ended while reading {expected}")]
    UnexpectedEndOfInput { expected: &'static str },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Parse a token that must be exactly one character.
pub fn single_char(token: &str) -> Option<Label> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(label), None) => Some(label),
        _ => None,
    }
}

/// Prompt driver over an input reader and an output writer.
pub struct Session<R, W> {
    tokens: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            tokens: TokenReader::new(reader),
            out,
        }
    }

    /// Writer the session prints prompts and diagnostics to.
    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    /// Run the node and edge prompts and return the populated graph.
    ///
    /// Every edge that enters the graph's edge log is also written to
    /// `edge_sink` as a `from to weight` line as soon as it is read.
    pub fn read_graph<E: Write>(&mut self, edge_sink: &mut E) -> SessionResult<Graph> {
        let node_count =
            self.read_count("Enter number of nodes: ", "node count", MAX_NODES, check_node_count)?;
        let labels = self.read_labels(node_count)?;
        let mut graph = Graph::new(&labels)?;

        let edge_count =
            self.read_count("Enter number of edges: ", "edge count", MAX_EDGES, check_edge_count)?;
        self.read_edges(&mut graph, edge_count, edge_sink)?;

        Ok(graph)
    }

    /// Prompt for the source label and return the raw answer.
    pub fn read_source(&mut self) -> SessionResult<String> {
        self.prompt("Enter source node: ")?;
        self.expect_token("source node")
    }

    fn read_count(
        &mut self,
        prompt: &str,
        expected: &'static str,
        max: usize,
        check: fn(usize) -> dijkstra_lib::Result<()>,
    ) -> SessionResult<usize> {
        loop {
            self.prompt(prompt)?;
            let token = self.expect_token(expected)?;
            let Ok(count) = token.parse::<usize>() else {
                warn!(%token, "rejected {}", expected);
                writeln!(self.out, "Please enter a whole number between 0 and {max}.")?;
                continue;
            };
            match check(count) {
                Ok(()) => return Ok(count),
                Err(err) => {
                    warn!(%err, "rejected {}", expected);
                    writeln!(self.out, "{}", capitalise(&err.to_string()))?;
                }
            }
        }
    }

    fn read_labels(&mut self, count: usize) -> SessionResult<Vec<Label>> {
        writeln!(self.out, "Enter node names (single letters/numbers):")?;
        self.out.flush()?;

        let mut labels = Vec::with_capacity(count);
        while labels.len() < count {
            let token = self.expect_token("node names")?;
            match single_char(&token) {
                Some(label) if labels.contains(&label) => {
                    warn!(%label, "rejected duplicate node name");
                    writeln!(self.out, "Duplicate node name: {label}")?;
                }
                Some(label) => labels.push(label),
                None => {
                    warn!(%token, "rejected node name");
                    writeln!(self.out, "Node names must be a single character: {token}")?;
                }
            }
        }
        debug!(?labels, "read node labels");
        Ok(labels)
    }

    fn read_edges<E: Write>(
        &mut self,
        graph: &mut Graph,
        count: usize,
        edge_sink: &mut E,
    ) -> SessionResult<()> {
        writeln!(self.out, "Enter edges (from to weight):")?;
        self.out.flush()?;

        let mut consumed = 0;
        while consumed < count {
            let from = self.expect_token("edge")?;
            let to = self.expect_token("edge")?;
            let weight = self.expect_token("edge")?;

            let (Some(from), Some(to), Ok(weight)) =
                (single_char(&from), single_char(&to), weight.parse::<i64>())
            else {
                warn!(%from, %to, %weight, "rejected malformed edge");
                writeln!(
                    self.out,
                    "Invalid edge '{from} {to} {weight}'; expected: from to weight"
                )?;
                continue;
            };

            let logged_before = graph.edge_log().len();
            let insertion = graph.insert_edge(from, to, weight);
            if let Some(edge) = graph.edge_log().get(logged_before) {
                writeln!(edge_sink, "{edge}")?;
                edge_sink.flush()?;
            }

            match insertion {
                Ok(_) => consumed += 1,
                Err(GraphError::InvalidEdgeWeight { weight }) if weight < 0 => {
                    warn!(%from, %to, weight, "rejected negative edge weight");
                    writeln!(self.out, "Negative weights not allowed in Dijkstra's algorithm.")?;
                }
                Err(GraphError::InvalidEdgeWeight { weight }) => {
                    warn!(%from, %to, weight, "rejected oversized edge weight");
                    writeln!(
                        self.out,
                        "Edge weight {weight} exceeds the maximum of {}.",
                        Weight::MAX
                    )?;
                }
                Err(GraphError::UnknownNodeLabel { from, to }) => {
                    warn!(%from, %to, weight, "edge references unknown node");
                    writeln!(self.out, "Invalid node name in edge: {from} {to}")?;
                    consumed += 1;
                }
                Err(other) => return Err(other.into()),
            }
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn expect_token(&mut self, expected: &'static str) -> SessionResult<String> {
        self.tokens
            .next_token()?
            .ok_or(SessionError::UnexpectedEndOfInput { expected })
    }
}

fn capitalise(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (SessionResult<Graph>, String) {
        let (result, out, _) = run_with_edges(input);
        (result, out)
    }

    fn run_with_edges(input: &str) -> (SessionResult<Graph>, String, String) {
        let mut out = Vec::new();
        let mut edges = Vec::new();
        let result = {
            let mut session = Session::new(Cursor::new(input.to_string()), &mut out);
            session.read_graph(&mut edges)
        };
        (
            result,
            String::from_utf8(out).expect("utf8 output"),
            String::from_utf8(edges).expect("utf8 edges"),
        )
    }

    #[test]
    fn reads_a_complete_graph() {
        let (graph, out) = run("3\nA B C\n2\nA B 4\nB C 3\n");
        let graph = graph.expect("graph read");

        assert_eq!(graph.labels(), &['A', 'B', 'C']);
        assert_eq!(graph.weight_between('B', 'C'), Some(3));
        assert!(out.starts_with("Enter number of nodes: Enter node names"));
    }

    #[test]
    fn negative_weight_is_resolicited() {
        let (graph, out) = run("2\nA B\n1\nA B -5\nA B 6\n");
        let graph = graph.expect("graph read");

        assert!(out.contains("Negative weights not allowed in Dijkstra's algorithm."));
        assert_eq!(graph.edge_log().len(), 1);
        assert_eq!(graph.weight_between('A', 'B'), Some(6));
    }

    #[test]
    fn unknown_label_consumes_a_slot() {
        let (graph, out) = run("2\nA B\n1\nA Z 3\n");
        let graph = graph.expect("graph read");

        assert!(out.contains("Invalid node name in edge: A Z"));
        assert_eq!(graph.edge_log().len(), 1);
        assert_eq!(graph.weight_between('A', 'B'), None);
    }

    #[test]
    fn oversized_counts_are_reprompted() {
        let (graph, out) = run("101\n1\nA\n500\n0\n");
        let graph = graph.expect("graph read");

        assert_eq!(graph.len(), 1);
        assert!(out.contains("Node count 101 exceeds the maximum of 100."));
        assert!(out.contains("Edge count 500 exceeds the maximum of 100."));
    }

    #[test]
    fn malformed_answers_are_reported() {
        let (graph, out) = run("two\n2\nAB A A B\n1\nA B x\nA B 1\n");
        let graph = graph.expect("graph read");

        assert!(out.contains("Please enter a whole number between 0 and 100."));
        assert!(out.contains("Node names must be a single character: AB"));
        assert!(out.contains("Duplicate node name: A"));
        assert!(out.contains("Invalid edge 'A B x'"));
        assert_eq!(graph.labels(), &['A', 'B']);
        assert_eq!(graph.weight_between('A', 'B'), Some(1));
    }

    #[test]
    fn early_end_of_input_is_an_error() {
        let (result, _) = run("2\nA\n");
        assert!(matches!(
            result,
            Err(SessionError::UnexpectedEndOfInput {
                expected: "node names"
            })
        ));
    }

    #[test]
    fn oversized_weight_is_resolicited() {
        let (graph, out) = run("2\nA B\n1\nA B 4294967296\nA B 8\n");
        let graph = graph.expect("graph read");

        assert!(out.contains("Edge weight 4294967296 exceeds the maximum of 4294967295."));
        assert_eq!(graph.edge_log().len(), 1);
        assert_eq!(graph.weight_between('A', 'B'), Some(8));
    }

    #[test]
    fn edges_are_streamed_as_they_are_read() {
        let (result, _, edges) = run_with_edges("2\nA B\n3\nA B -1\nA B 4\nA Z 2\n");

        assert!(matches!(
            result,
            Err(SessionError::UnexpectedEndOfInput { expected: "edge" })
        ));
        assert_eq!(edges, "A B 4\nA Z 2\n");
    }

    #[test]
    fn single_char_rejects_longer_tokens() {
        assert_eq!(single_char("Q"), Some('Q'));
        assert_eq!(single_char("QQ"), None);
        assert_eq!(single_char(""), None);
    }
}
