// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Defuse: a round-based tactical combat rules engine.
//!
//! Two sides fight over a configured number of timed rounds. Players join,
//! buy weapons during the buy phase and attack each other; the side left
//! standing wins the round and money carries over between rounds.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Command front-end (bin: defuse)   │
//! ├─────────────────────────────────────┤
//! │     GamePlay (rules engine)         │
//! ├─────────────────────────────────────┤
//! │  Game · Player · Weapon · Catalog   │
//! └─────────────────────────────────────┘
//! ```
//!
//! The library never reads input or writes output. Round time is pushed in
//! by the caller before each action.

pub mod config;
pub mod error;
pub mod game;
pub mod gameplay;

pub use config::{ConfigError, MAX_DURATION, RulesConfig};
pub use error::{GameError, GameResult};

// Re-export key game types at crate root for convenience
pub use game::{Game, Player, Side, SideMask, Weapon, WeaponCatalog, WeaponKind};
pub use gameplay::{AttackOutcome, GamePlay, ScoreboardRow};
