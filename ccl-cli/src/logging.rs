//! Logging initialisation for the ccl CLI.
//!
//! Settings are resolved from `CCL_LOG_FORMAT` and `RUST_LOG` into
//! [`LogSettings`], which [`build_subscriber`] turns into a subscriber writing
//! to any [`MakeWriter`]. [`init_logging`] installs that subscriber globally
//! over `stderr` and bridges the `log` facade.

use std::{
    env,
    io::{self, IsTerminal},
    str::FromStr,
    sync::OnceLock,
};

use thiserror::Error;
use tracing::Subscriber;
use tracing_log::{LogTracer, log::SetLoggerError};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::ParseError,
    fmt::{MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
};

/// Environment variable selecting the diagnostic format.
pub const LOG_FORMAT_ENV: &str = "CCL_LOG_FORMAT";

/// Filter applied when `RUST_LOG` is unset or blank.
pub const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while configuring structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// An environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `CCL_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// `RUST_LOG` held a directive the filter cannot parse.
    #[error("invalid log filter `{directive}`: {source}")]
    InvalidFilter {
        /// Filter text as supplied.
        directive: String,
        /// Parser failure.
        #[source]
        source: ParseError,
    },
    /// Another global subscriber was already installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing`.
        #[source]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
    /// Another logger already owns the `log` facade.
    #[error("failed to bridge the `log` facade: {source}")]
    BridgeFailed {
        /// Error raised by `log`.
        #[source]
        source: SetLoggerError,
    },
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Event format.
    pub format: LogFormat,
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Whether human output may use ANSI colours.
    pub ansi: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Human,
            filter: DEFAULT_FILTER.to_owned(),
            ansi: false,
        }
    }
}

impl LogSettings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    /// See [`LogSettings::from_lookup`].
    pub fn from_env() -> Result<Self, LoggingError> {
        let mut settings = Self::from_lookup(|name| env::var(name))?;
        settings.ansi = io::stderr().is_terminal();
        Ok(settings)
    }

    /// Resolves settings through `lookup`, which behaves like [`env::var`].
    ///
    /// # Errors
    /// Returns [`LoggingError::InvalidUnicode`] for non-UTF-8 values and
    /// [`LoggingError::UnsupportedFormat`] for unknown formats.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, LoggingError> {
        let format = match read_var(&lookup, LOG_FORMAT_ENV)? {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        let filter = read_var(&lookup, EnvFilter::DEFAULT_ENV)?
            .filter(|directive| !directive.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        Ok(Self {
            format,
            filter,
            ansi: false,
        })
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.filter).map_err(|source| LoggingError::InvalidFilter {
            directive: self.filter.clone(),
            source,
        })
    }
}

fn read_var(
    lookup: &impl Fn(&str) -> Result<String, env::VarError>,
    name: &'static str,
) -> Result<Option<String>, LoggingError> {
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source @ env::VarError::NotUnicode(_)) => {
            Err(LoggingError::InvalidUnicode { name, source })
        }
    }
}

/// Builds a subscriber that filters and formats events per `settings` and
/// writes them through `writer`.
///
/// Span closures are reported so the duration of `core.run` and `cli.label`
/// shows up in the output.
///
/// # Errors
/// Returns [`LoggingError::InvalidFilter`] when the filter does not parse.
pub fn build_subscriber<W>(
    settings: &LogSettings,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = settings.env_filter()?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_span_events(FmtSpan::CLOSE);
    let fmt_layer = match settings.format {
        LogFormat::Human => fmt_layer.with_ansi(settings.ansi).boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };
    Ok(tracing_subscriber::registry().with(filter).with(fmt_layer))
}

/// Installs global structured logging on `stderr`, once per process.
///
/// Region reports go to `stdout`, so diagnostics never interleave with them.
///
/// # Errors
/// Returns [`LoggingError`] when the environment is invalid or another
/// subscriber or logger is already installed.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let settings = LogSettings::from_env()?;
    let subscriber = build_subscriber(&settings, io::stderr)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::InstallFailed { source })?;
    LogTracer::init().map_err(|source| LoggingError::BridgeFailed { source })?;

    let _ = INITIALISED.set(());
    Ok(())
}
