//! End-to-end tests for the interactive binary.
//!
//! Each test runs `dijkstra-cli` inside a temporary directory, feeds the
//! answers on stdin and checks the console output, the exit status and the
//! files that were written.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("dijkstra-cli");
    cmd.current_dir(dir.path()).env("RUST_LOG", "error");
    cmd
}

#[test]
fn computes_chain_distances() {
    let dir = TempDir::new().expect("create temp dir");

    cli(&dir)
        .write_stdin("3\nA B C\n2\nA B 4\nB C 3\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter source node: "))
        .stdout(predicate::str::contains("A\t0\t4\t0\t"))
        .stdout(predicate::str::contains("Shortest paths written to output.txt"));

    assert_eq!(
        fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "Shortest distances from node A:\nTo node A: 0\nTo node B: 4\nTo node C: 7\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("edges.txt")).unwrap(),
        "A B 4\nB C 3\n"
    );
}

#[test]
fn disconnected_node_is_inf() {
    let dir = TempDir::new().expect("create temp dir");

    cli(&dir)
        .write_stdin("2\nA B\n0\nA\n")
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert!(output.contains("To node B: INF"));
}

#[test]
fn negative_weight_is_reprompted_and_not_recorded() {
    let dir = TempDir::new().expect("create temp dir");

    cli(&dir)
        .write_stdin("2\nA B\n1\nA B -5\nA B 2\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Negative weights not allowed in Dijkstra's algorithm.",
        ));

    assert_eq!(
        fs::read_to_string(dir.path().join("edges.txt")).unwrap(),
        "A B 2\n"
    );
}

#[test]
fn unknown_edge_label_is_recorded_but_ignored() {
    let dir = TempDir::new().expect("create temp dir");

    cli(&dir)
        .write_stdin("2\nA B\n2\nA Z 3\nA B 5\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid node name in edge: A Z"));

    assert_eq!(
        fs::read_to_string(dir.path().join("edges.txt")).unwrap(),
        "A Z 3\nA B 5\n"
    );
}

#[test]
fn parallel_edges_keep_minimum_weight() {
    let dir = TempDir::new().expect("create temp dir");

    cli(&dir)
        .write_stdin("2\nA B\n2\nA B 5\nA B 2\nB\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A\t0\t2\t"));

    let output = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert!(output.contains("To node A: 2"));
}

#[test]
fn missing_source_exits_with_failure() {
    let dir = TempDir::new().expect("create temp dir");

    cli(&dir)
        .write_stdin("2\nA B\n1\nA B 1\nQ\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Source node not found!"));

    assert!(dir.path().join("edges.txt").exists());
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn custom_paths_and_json_format() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("answers.txt");
    fs::write(&input, "2\nX Y\n1\nX Y 9\nX\n").unwrap();

    cli(&dir)
        .args(["--edges-file", "e.txt", "--output-file", "d.txt", "--format", "json"])
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reachable\": 2"))
        .stdout(predicate::str::contains("Graph edges written to e.txt"));

    assert!(dir.path().join("e.txt").exists());
    assert!(fs::read_to_string(dir.path().join("d.txt"))
        .unwrap()
        .contains("To node Y: 9"));
}

#[test]
fn truncated_input_fails() {
    let dir = TempDir::new().expect("create temp dir");

    cli(&dir)
        .write_stdin("3\nA B\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended while reading node names"));
}

#[test]
fn rejected_input_is_logged_at_default_level() {
    let dir = TempDir::new().expect("create temp dir");

    cargo_bin_cmd!("dijkstra-cli")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .write_stdin("2\nA B\n2\nA B -5\nA Z 3\nA B 1\nA\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("rejected negative edge weight"))
        .stderr(predicate::str::contains("edge references unknown node"));
}

#[test]
fn truncated_edges_leave_partial_edge_record() {
    let dir = TempDir::new().expect("create temp dir");

    cli(&dir)
        .write_stdin("2\nA B\n2\nA B 4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended while reading edge"));

    assert_eq!(
        fs::read_to_string(dir.path().join("edges.txt")).unwrap(),
        "A B 4\n"
    );
    assert!(!dir.path().join("output.txt").exists());
}
