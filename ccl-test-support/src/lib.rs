//! Shared test utilities used across ccl crates.
//!
//! - [`tracing`] captures spans and events so tests can assert instrumentation.
//! - [`partition`] checks a labelling result against its source grid without
//!   depending on label identities or region order.
//! - [`property_profile`] reads environment overrides for property suites.

pub mod partition;
pub mod property_profile;
pub mod tracing;
