//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use ccl_core::Connectivity;

use super::{Cli, CliError, Command, LabelCommand, OutputFormat, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_grid_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn label_command(path: PathBuf, connectivity: Connectivity) -> LabelCommand {
    LabelCommand {
        path,
        connectivity,
        format: OutputFormat::Text,
        name: None,
    }
}

pub(super) fn run_cli_expecting_error(command: LabelCommand, panic_msg: &str) -> CliError {
    let cli = Cli {
        command: Command::Label(command),
    };
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
