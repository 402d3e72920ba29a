//! Error types for the rules engine.

use thiserror::Error;

use crate::game::{Side, WeaponKind};

/// Every way an action against the rules engine can be rejected.
///
/// Each condition is its own variant so the command layer can branch on the
/// kind of failure instead of inspecting messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No player with this name has joined the game.
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    /// The weapon catalog has no entry with this name.
    #[error("weapon not found: {0}")]
    WeaponNotFound(String),

    /// A required value was absent.
    #[error("missing value for `{0}`")]
    NullReference(&'static str),

    /// A player with this name is already on the same side.
    #[error("player {0} is already on this team")]
    PlayerAlreadyOnTeam(String),

    /// A player with this name is already on the opposing side.
    #[error("player {0} is already on the opposing team")]
    PlayerOnOpposingTeam(String),

    /// The side's roster has reached the configured maximum.
    #[error("team {0} is full")]
    TeamFull(Side),

    /// The action is not allowed at the current round time.
    #[error("action not allowed at this time")]
    ActionAtIllegalTime,

    /// A dead player tried to act.
    #[error("dead players cannot act")]
    ActionFromDeadPlayer,

    /// The target of an attack is already dead.
    #[error("attacked player is already dead")]
    AttackDeadPlayer,

    /// There is no round after the current one.
    #[error("already on the last round")]
    LastRound,

    /// Attacker and attacked are on the same side.
    #[error("friendly fire")]
    FriendlyFire,

    /// The weapon cannot be used by the player's side.
    #[error("weapon {0} is not available for this side")]
    WeaponNotAvailable(String),

    /// The player holds no weapon of this kind.
    #[error("no {0} weapon equipped")]
    WeaponNotEquipped(WeaponKind),

    /// The player already holds a weapon of this kind.
    #[error("a {0} weapon is already equipped")]
    WeaponAlreadyEquipped(WeaponKind),

    /// The player cannot afford the purchase.
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        /// Price of the purchase.
        required: u32,
        /// Money the player holds.
        available: u32,
    },

    /// A constructor was given an out-of-range parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for rules engine operations.
pub type GameResult<T> = Result<T, GameError>;
