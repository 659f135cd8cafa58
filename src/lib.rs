//! # Statusline
//!
//! A one-shot statusline utility for Claude Code sessions. It reads session
//! metadata from stdin, aggregates token usage from the session transcript,
//! inspects the workspace git repository, and prints a single color-coded
//! summary line to stdout.
//!
//! ## Degradation
//!
//! Missing data never fails the process: each component returns its "no data"
//! value at the boundary and the corresponding segment is simply omitted from
//! the output. The exit code is zero for every well-formed invocation.

/// Command-line argument parsing
pub mod cli;

/// Display configuration: colors flag and icon overrides
pub mod config;

/// Status line composition and color/threshold rules
pub mod display;

/// Git repository inspection via bounded subprocesses
pub mod git;

/// Data models for stdin input, transcript lines, metrics, and git status
pub mod models;

/// Transcript scanning and metric aggregation
pub mod transcript;

/// Utility functions for stdin, formatting, and time
pub mod utils;
