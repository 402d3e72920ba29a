//! Weapon definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::SideMask;

/// Weapon category. A player carries at most one weapon of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponKind {
    /// Knives. Never dropped on death.
    Melee,
    /// Sidearms.
    Pistol,
    /// Rifles and snipers.
    Heavy,
}

impl WeaponKind {
    /// Kinds that a player loses when killed.
    pub const DROPPED_ON_DEATH: [WeaponKind; 2] = [WeaponKind::Pistol, WeaponKind::Heavy];

    /// Bit value of this kind.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            WeaponKind::Melee => 1,
            WeaponKind::Pistol => 2,
            WeaponKind::Heavy => 4,
        }
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeaponKind::Melee => write!(f, "melee"),
            WeaponKind::Pistol => write!(f, "pistol"),
            WeaponKind::Heavy => write!(f, "heavy"),
        }
    }
}

/// An immutable weapon definition from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    price: u32,
    damage_per_hit: u32,
    money_per_kill: u32,
    kind: WeaponKind,
    available_for: SideMask,
}

impl Weapon {
    /// Create a new weapon definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: u32,
        damage_per_hit: u32,
        money_per_kill: u32,
        kind: WeaponKind,
        available_for: SideMask,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            damage_per_hit,
            money_per_kill,
            kind,
            available_for,
        }
    }

    /// Catalog name, unique within a catalog.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Purchase price.
    #[must_use]
    pub const fn price(&self) -> u32 {
        self.price
    }

    /// Health removed by one hit.
    #[must_use]
    pub const fn damage_per_hit(&self) -> u32 {
        self.damage_per_hit
    }

    /// Money awarded to the attacker for a kill with this weapon.
    #[must_use]
    pub const fn money_per_kill(&self) -> u32 {
        self.money_per_kill
    }

    /// Category of this weapon.
    #[must_use]
    pub const fn kind(&self) -> WeaponKind {
        self.kind
    }

    /// Sides allowed to buy this weapon.
    #[must_use]
    pub const fn available_for(&self) -> SideMask {
        self.available_for
    }

    /// Whether every side in `side` may use this weapon.
    #[must_use]
    pub fn is_available_for(&self, side: impl Into<SideMask>) -> bool {
        self.available_for.contains(side.into())
    }
}
