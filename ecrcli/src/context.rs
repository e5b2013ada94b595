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
use libecr::Settings;
use std::env;
use std::path::Path;

/// How much status output the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    #[default]
    Normal,
    Verbose,
    VeryVerbose,
    Trace,
}

impl VerbosityLevel {
    /// Map the number of `-v` flags to a level
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }
}

/// Flags that override configured values
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub color: Option<ColorChoice>,
    pub settings: Settings,
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// Verbosity from `-v` flags
    pub verbosity: VerbosityLevel,
    /// Print the debug form of errors
    pub debug: bool,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(overrides: Overrides, verbosity: VerbosityLevel, debug: bool) -> Result<Self, String> {
        Self::build_from(&config::get_config_path(), overrides, verbosity, debug)
    }

    pub(crate) fn build_from(
        config_path: &Path,
        overrides: Overrides,
        verbosity: VerbosityLevel,
        debug: bool,
    ) -> Result<Self, String> {
        // 1. Start with defaults
        let mut config = Config::default();

        // 2. Config file, if present
        if config_path.exists() {
            config = Config::load(config_path)?;
        }

        // 3. Environment variables
        if let Ok(color) = env::var("ECRCLI_COLOR") {
            config.style.color = ColorChoice::from(color.as_str());
        }
        if let Ok(format) = env::var("ECRCLI_FORMAT") {
            config.style.format = OutputFormat::from(format.as_str());
        }
        let from_env = Settings::from_env().map_err(|e| e.to_string())?;
        config.aws = config.aws.merge(from_env);

        // 4. CLI flags
        if let Some(color) = overrides.color {
            config.style.color = color;
        }
        config.aws = config.aws.merge(overrides.settings);

        Ok(Self {
            config,
            verbosity,
            debug,
        })
    }

    /// Context with defaults only, for tests
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            config: Config {
                style: config::StyleConfig {
                    format: OutputFormat::Pretty,
                    color: ColorChoice::Never,
                },
                aws: Settings::default(),
            },
            verbosity: VerbosityLevel::Normal,
            debug: false,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
