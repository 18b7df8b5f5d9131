//! CLI entry point for the ccl connected-components labeller.
//!
//! Parses command-line arguments with clap, labels the requested grid,
//! renders the region report to stdout, and maps errors to a failing exit
//! code. Logging is initialised first so every later step can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use ccl_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let label_error = err
            .downcast_ref::<CliError>()
            .and_then(CliError::label_error);
        let code = label_error.map(|core| field::display(core.code().as_str()));
        let forest_code = label_error
            .and_then(|core| core.forest_code())
            .map(|code| field::display(code.as_str()));

        error!(
            error = format!("{err:#}"),
            code,
            forest_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
