//! Command implementations and argument parsing for the ccl CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use ccl_core::{Connectivity, GridSource, LabelError, LabellerBuilder, Region};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{GridParseError, parse_grid};

const STDIN_PATH: &str = "-";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "ccl", about = "Label connected regions of an integer grid.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Label the connected regions of a grid file.
    Label(LabelCommand),
}

/// Options accepted by the `label` command.
#[derive(Debug, Args, Clone)]
pub struct LabelCommand {
    /// Grid file with one row of whitespace-separated integers per line, or
    /// `-` to read from stdin.
    pub path: PathBuf,

    /// Neighbour topology used to join pixels: `four-way` (or `4`) or
    /// `eight-way` (or `8`).
    #[arg(long, default_value_t = Connectivity::FourWay)]
    pub connectivity: Connectivity,

    /// Output format for the region report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override name for the grid (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Report formats supported by [`render_summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated lines.
    Text,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the grid.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The grid text was malformed.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path the grid was read from.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: GridParseError,
    },
    /// Labelling failed.
    #[error(transparent)]
    Core(#[from] LabelError),
}

impl CliError {
    /// Returns the core error behind this failure, if any.
    #[must_use]
    pub fn label_error(&self) -> Option<&LabelError> {
        match self {
            Self::Core(error)
            | Self::Parse {
                source: GridParseError::Grid(error),
                ..
            } => Some(error),
            _ => None,
        }
    }
}

/// Summarises the outcome of labelling a grid.
#[derive(Debug, Clone)]
pub struct LabelSummary {
    /// Name of the labelled grid.
    pub grid: String,
    /// Grid width in pixels.
    pub width: usize,
    /// Grid height in pixels.
    pub height: usize,
    /// Connectivity used for the run.
    pub connectivity: Connectivity,
    /// Requested output format.
    pub format: OutputFormat,
    /// Regions found in the grid.
    pub regions: Vec<Region>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, or labelling fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use ccl_cli::cli::{Cli, Command, LabelCommand, OutputFormat, run_cli};
/// # use ccl_core::Connectivity;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1 0\n0 1\n")?;
/// let cli = Cli {
///     command: Command::Label(LabelCommand {
///         path: file.path().to_path_buf(),
///         connectivity: Connectivity::EightWay,
///         format: OutputFormat::Text,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.regions.len(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<LabelSummary, CliError> {
    match cli.command {
        Command::Label(label) => {
            Span::current().record("command", field::display("label"));
            run_label(label)
        }
    }
}

#[instrument(
    name = "cli.label",
    err,
    skip(command),
    fields(path = field::Empty, connectivity = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_label(command: LabelCommand) -> Result<LabelSummary, CliError> {
    let LabelCommand {
        path,
        connectivity,
        format,
        name,
    } = command;

    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("connectivity", field::display(connectivity));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let grid_name = derive_grid_name(&path, name.as_deref());
    let reader = open_grid_reader(&path)?;
    let grid = parse_grid(grid_name, reader).map_err(|source| CliError::Parse {
        path: path.clone(),
        source,
    })?;

    let labeller = LabellerBuilder::new()
        .with_connectivity(connectivity)
        .build();
    let regions = labeller.run(&grid)?;
    info!(
        grid = grid.name(),
        regions = regions.len(),
        "label command completed"
    );

    Ok(LabelSummary {
        grid: grid.name().to_owned(),
        width: grid.width(),
        height: grid.height(),
        connectivity,
        format,
        regions,
    })
}

#[instrument(name = "cli.open_grid_reader", err, fields(path = field::Empty))]
pub(super) fn open_grid_reader(path: &Path) -> Result<Box<dyn BufRead>, CliError> {
    Span::current().record("path", field::display(path.display()));
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

pub(super) fn derive_grid_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }
    if path.as_os_str() == STDIN_PATH {
        return "stdin".to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "grid".to_owned())
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    grid: &'a str,
    width: usize,
    height: usize,
    connectivity: &'static str,
    regions: Vec<RegionReport>,
}

#[derive(Debug, Serialize)]
struct RegionReport {
    value: i64,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    points: Vec<[usize; 2]>,
}

impl RegionReport {
    fn from_region(region: &Region) -> Self {
        let bounds = region.bounding_box();
        let mut points: Vec<[usize; 2]> = region
            .points()
            .iter()
            .map(|point| [point.x, point.y])
            .collect();
        points.sort_unstable_by_key(|&[x, y]| (y, x));
        Self {
            value: region.value(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            points,
        }
    }
}

/// Regions ordered top-to-bottom, then left-to-right, by bounding box origin.
fn ordered_regions(summary: &LabelSummary) -> Vec<&Region> {
    let mut regions: Vec<&Region> = summary.regions.iter().collect();
    regions.sort_by_key(|region| {
        let bounds = region.bounding_box();
        (bounds.y, bounds.x, region.value())
    });
    regions
}

/// Renders `summary` to `writer` in the format the summary requests.
///
/// Text output starts with `regions: N` and lists one tab-separated
/// `value x y width height points` line per region.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use ccl_cli::cli::{LabelSummary, OutputFormat, render_summary};
/// # use ccl_core::{Connectivity, find_connected_components};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let regions = find_connected_components(&[3, 3, 0, 0], 2, 2, Connectivity::FourWay)?;
/// let summary = LabelSummary {
///     grid: "demo".into(),
///     width: 2,
///     height: 2,
///     connectivity: Connectivity::FourWay,
///     format: OutputFormat::Text,
///     regions,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "regions: 1\n3\t0\t0\t2\t1\t2\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &LabelSummary, mut writer: impl Write) -> io::Result<()> {
    let regions = ordered_regions(summary);
    match summary.format {
        OutputFormat::Text => {
            writeln!(writer, "regions: {}", regions.len())?;
            for region in regions {
                let bounds = region.bounding_box();
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    region.value(),
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                    region.len()
                )?;
            }
        }
        OutputFormat::Json => {
            let report = Report {
                grid: &summary.grid,
                width: summary.width,
                height: summary.height,
                connectivity: summary.connectivity.as_str(),
                regions: regions.into_iter().map(RegionReport::from_region).collect(),
            };
            serde_json::to_writer_pretty(&mut writer, &report).map_err(io::Error::other)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
