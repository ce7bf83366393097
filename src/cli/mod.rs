//! CLI layer for calc-rs.
//!
//! Provides the command-line interface using clap, with commands for
//! one-shot evaluation, token inspection, strategy listing, and the
//! interactive session.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
