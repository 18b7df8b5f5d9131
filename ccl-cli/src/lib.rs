//! Support library for the ccl CLI binary.
//!
//! Exposes the CLI and logging modules so doctests and integration tests can
//! exercise the command pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
