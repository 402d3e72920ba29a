//! Game invariants - sanity checks that detect bugs.
//!
//! The rules engine validates every action before mutating state, so these
//! should never trigger. If they do, an operation mutated state it should not
//! have.

use crate::game::{Game, MAX_HP, Player, Side, SideMask};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(game: &Game) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for player in game.get_all_players(SideMask::ALL) {
        if player.hp() > MAX_HP {
            violations.push(InvariantViolation {
                message: format!(
                    "Player {} has hp {} > max {MAX_HP}",
                    player.name(),
                    player.hp()
                ),
            });
        }

        if player.money() > player.max_money() {
            violations.push(InvariantViolation {
                message: format!(
                    "Player {} has money {} > cap {}",
                    player.name(),
                    player.money(),
                    player.max_money()
                ),
            });
        }
    }

    // Roster counters must agree with the roster
    for side in Side::BOTH {
        let counted = game.team_size(side);
        let actual = game.get_all_players(side.into()).count();
        if counted != actual {
            violations.push(InvariantViolation {
                message: format!("{side} roster counter is {counted} but roster has {actual}"),
            });
        }
    }

    // Names are unique across both sides
    let mut names: Vec<&str> = game.get_all_players(SideMask::ALL).map(Player::name).collect();
    names.sort_unstable();
    for pair in names.windows(2) {
        if pair[0] == pair[1] {
            violations.push(InvariantViolation {
                message: format!("Player name {} appears more than once", pair[0]),
            });
        }
    }

    if game.current_round() == 0 || game.current_round() > game.rounds() {
        violations.push(InvariantViolation {
            message: format!(
                "Current round {} outside 1..={}",
                game.current_round(),
                game.rounds()
            ),
        });
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(game: &Game) {
    let violations = check_invariants(game);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_game: &Game) {}
