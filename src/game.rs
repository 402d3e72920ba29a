//! Game object model.
//!
//! - Sides and side query masks
//! - Weapons and the weapon catalog
//! - Players with health, money and equipped weapons
//! - The game roster with round bookkeeping
//! - Invariant checks used by tests and fuzzing

mod catalog;
mod invariants;
mod player;
mod side;
mod state;
mod weapon;

pub use catalog::WeaponCatalog;
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use player::{Player, MAX_HP};
pub use side::{Side, SideMask};
pub use state::Game;
pub use weapon::{Weapon, WeaponKind};
