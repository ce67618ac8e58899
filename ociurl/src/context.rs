//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::config::{self, Config};
use crate::format::{ColorChoice, OutputFormat};
use std::env;
use std::path::Path;

/// How much diagnostic output to emit on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Warnings only
    Normal,
    /// -v
    Verbose,
    /// -vv
    VeryVerbose,
    /// -vvv and above
    Trace,
}

impl VerbosityLevel {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }

    /// Log level name used for the tracing filter
    pub fn as_level(&self) -> &'static str {
        match self {
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
            VerbosityLevel::VeryVerbose => "debug",
            VerbosityLevel::Trace => "trace",
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// Verbosity requested on the command line
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context from the default config location
    pub fn build(cli_color: Option<ColorChoice>, verbosity: VerbosityLevel) -> Self {
        Self::build_from(&config::get_config_path(), cli_color, verbosity)
    }

    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build_from(
        config_path: &Path,
        cli_color: Option<ColorChoice>,
        verbosity: VerbosityLevel,
    ) -> Self {
        // 1. Start with defaults
        let mut config = Config::default();

        // 2. Load config file if it exists
        if config_path.exists() {
            match Config::load(config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => tracing::warn!(path = %config_path.display(), "{}", e),
            }
        }

        // 3. Apply environment variable overrides
        if let Ok(color) = env::var("OCIURL_COLOR") {
            config.style.color = ColorChoice::from(color.as_str());
        }
        if let Ok(format) = env::var("OCIURL_FORMAT") {
            config.style.format = OutputFormat::from(format.as_str());
        }

        // 4. Apply CLI flag overrides, only when the flag was given
        if let Some(color) = cli_color {
            config.style.color = color;
        }

        Self { config, verbosity }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
