//! Dijkstra CLI library.
//!
//! This crate provides the interactive session, run handler and console
//! rendering behind the `dijkstra-cli` binary.

pub mod input;
pub mod output;
pub mod run;
pub mod session;
