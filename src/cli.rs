//! CLI command implementations for Defuse.

pub(crate) mod play;
pub(crate) mod weapons;

mod commands;
mod output;
mod session;

use std::error::Error;
use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use defuse::{ConfigError, GameError, RulesConfig, WeaponCatalog};

/// Extra report printed after the last round of `play`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SummaryFormat {
    /// No report.
    None,
    /// Final scoreboard in the same layout as `SCORE-BOARD`.
    Text,
    /// Final scoreboard as JSON.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        Self::new(e.to_string())
    }
}

/// Load the rules file, or the built-in rules when no path is given.
fn load_rules(path: Option<&Path>) -> Result<RulesConfig, CliError> {
    match path {
        Some(path) => RulesConfig::load(path)
            .map_err(|e| CliError::new(format!("Failed to load rules {}: {e}", path.display()))),
        None => Ok(RulesConfig::default()),
    }
}

/// Load the weapon table, or the built-in table when no path is given.
fn load_catalog(path: Option<&Path>) -> Result<WeaponCatalog, CliError> {
    match path {
        Some(path) => WeaponCatalog::load(path).map_err(|e| {
            CliError::new(format!("Failed to load weapons {}: {e}", path.display()))
        }),
        None => Ok(WeaponCatalog::standard()),
    }
}
