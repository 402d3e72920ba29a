//! Economic and timing constants of the rules engine.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading configuration or catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read file: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid JSON for the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The contents parsed but describe an impossible setup.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Upper bound for every configured duration: one hour, in milliseconds.
pub const MAX_DURATION: u64 = 60 * 60 * 1000;

/// Fixed rules for a session. All times are in milliseconds.
///
/// Missing fields in a JSON file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Length of one round (2:15).
    pub round_length: u64,
    /// Players joining at or after this round time start dead.
    pub enter_time_limit: u64,
    /// Purchases are rejected at or after this round time.
    pub buy_time_limit: u64,
    /// Money cap per player.
    pub max_money: u32,
    /// Money a player joins with.
    pub initial_money: u32,
    /// Payout to every player on the winning side.
    pub winner_money_per_round: u32,
    /// Payout to every player on the losing side.
    pub loser_money_per_round: u32,
    /// Roster cap per side.
    pub max_team_size: usize,
    /// Catalog name of the melee weapon every player starts with.
    pub starting_weapon: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            round_length: (2 * 60 + 15) * 1000,
            enter_time_limit: 3 * 1000,
            buy_time_limit: 45 * 1000,
            max_money: 10_000,
            initial_money: 1000,
            winner_money_per_round: 2700,
            loser_money_per_round: 2400,
            max_team_size: 10,
            starting_weapon: "Knife".to_string(),
        }
    }
}

impl RulesConfig {
    /// Check that the constants describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_length == 0 {
            return Err(ConfigError::Invalid("round_length must be positive".to_string()));
        }
        for (field, value) in [
            ("round_length", self.round_length),
            ("enter_time_limit", self.enter_time_limit),
            ("buy_time_limit", self.buy_time_limit),
        ] {
            if value > MAX_DURATION {
                return Err(ConfigError::Invalid(format!(
                    "{field} {value} exceeds {MAX_DURATION} ms"
                )));
            }
        }
        if self.max_team_size == 0 {
            return Err(ConfigError::Invalid("max_team_size must be positive".to_string()));
        }
        if self.initial_money > self.max_money {
            return Err(ConfigError::Invalid(format!(
                "initial_money {} exceeds max_money {}",
                self.initial_money, self.max_money
            )));
        }
        if self.starting_weapon.is_empty() {
            return Err(ConfigError::Invalid("starting_weapon must be set".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON rules file.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON rules file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded rules from {}", path.display());
        Ok(config)
    }
}
