//! Diagnostic logging on stderr.

use crate::context::VerbosityLevel;
use tracing_subscriber::EnvFilter;

/// Builds the filter for the given verbosity. `RUST_LOG` takes precedence.
pub fn build_filter(verbosity: VerbosityLevel) -> Result<EnvFilter, String> {
    EnvFilter::try_from_default_env()
        .or_else(|_| {
            let level = verbosity.as_level();
            EnvFilter::try_new(format!("ociurl={level},libociurl={level}"))
        })
        .map_err(|e| format!("Failed to create tracing filter: {}", e))
}

/// Install the global subscriber. Only the first call has an effect.
pub fn init_tracing(verbosity: VerbosityLevel) -> Result<(), String> {
    let filter = build_filter(verbosity)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= VerbosityLevel::VeryVerbose)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))
}
