//! Command-line interface orchestration for the edgeforge fixture generator.
//!
//! The CLI offers a `generate` command that synthesizes an edge-list fixture
//! graph and writes it to disk, and a `patterns` command that lists the
//! embeddable pattern catalogue.

mod commands;
mod output;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, GenerationSummary, PatternSummary,
    render_summary, run_cli,
};
pub use output::render_edge_file;

#[cfg(test)]
mod tests;
