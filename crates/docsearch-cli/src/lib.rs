//! Command-line interface for the docsearch adapter.
//!
//! Parses arguments, runs one adapter operation, and reports the outcome as
//! a JSON line on stdout plus a distinct exit code per outcome variant.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, ServerOpts};
pub use commands::{exit_code, render, run};
