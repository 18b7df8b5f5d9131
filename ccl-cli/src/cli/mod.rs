//! Command-line interface orchestration for the ccl labeller.
//!
//! The CLI offers a single `label` command that reads a plain-text integer
//! grid from a file or stdin, labels its connected regions, and reports them
//! as text or JSON.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, LabelCommand, LabelSummary, OutputFormat, render_summary, run_cli,
};
pub use input::{GridParseError, parse_grid};

#[cfg(test)]
mod test_helpers;
