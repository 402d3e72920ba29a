//! Player state management.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{GameError, GameResult};
use crate::game::{Side, Weapon, WeaponKind};

/// Health of a player at full strength.
pub const MAX_HP: u32 = 100;

/// State for a single player.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hp: u32,
    kills: u32,
    deaths: u32,
    max_money: u32,
    money: u32,
    side: Side,
    entry_time: u64,
    weapons: HashMap<WeaponKind, Arc<Weapon>>,
}

impl Player {
    /// Create a new player.
    ///
    /// Initial money above `max_money` is clamped to the cap.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] if `initial_hp` exceeds [`MAX_HP`].
    pub fn new(
        name: impl Into<String>,
        initial_hp: u32,
        max_money: u32,
        initial_money: u32,
        side: Side,
        entry_time: u64,
    ) -> GameResult<Self> {
        if initial_hp > MAX_HP {
            return Err(GameError::InvalidArgument(format!(
                "initial_hp should be between 0 and {MAX_HP} (inclusive), got {initial_hp}"
            )));
        }

        Ok(Self {
            name: name.into(),
            hp: initial_hp,
            kills: 0,
            deaths: 0,
            max_money,
            money: initial_money.min(max_money),
            side,
            entry_time,
            weapons: HashMap::new(),
        })
    }

    /// Unique name of this player within a game.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health.
    #[must_use]
    pub const fn hp(&self) -> u32 {
        self.hp
    }

    /// Whether the player has any health left.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Heal, never exceeding [`MAX_HP`].
    pub fn add_hp(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(MAX_HP);
    }

    /// Apply damage. Dead players take no further damage.
    ///
    /// The death counter increments only on the hit that brings health to zero.
    pub fn take_damage(&mut self, amount: u32) {
        if self.hp == 0 {
            return;
        }
        self.hp -= amount.min(self.hp);
        if self.hp == 0 {
            self.deaths += 1;
        }
    }

    /// Restore full health, reviving the player if dead.
    pub fn reset_hp(&mut self) {
        self.hp = MAX_HP;
    }

    /// Number of kills.
    #[must_use]
    pub const fn kills(&self) -> u32 {
        self.kills
    }

    /// Record a kill.
    pub fn add_kill(&mut self) {
        self.kills += 1;
    }

    /// Number of deaths.
    #[must_use]
    pub const fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Money cap for this player.
    #[must_use]
    pub const fn max_money(&self) -> u32 {
        self.max_money
    }

    /// Current money.
    #[must_use]
    pub const fn money(&self) -> u32 {
        self.money
    }

    /// Add money, never exceeding the cap.
    pub fn add_money(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount).min(self.max_money);
    }

    /// Spend money.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientFunds`] if `amount` exceeds current
    /// money. Money is left unchanged in that case.
    pub fn subtract_money(&mut self, amount: u32) -> GameResult<()> {
        if amount > self.money {
            return Err(GameError::InsufficientFunds {
                required: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    /// Game time at which this player joined.
    #[must_use]
    pub const fn entry_time(&self) -> u64 {
        self.entry_time
    }

    /// Side this player fights for.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The weapon of `kind` the player holds, if any.
    #[must_use]
    pub fn equipped(&self, kind: WeaponKind) -> Option<&Arc<Weapon>> {
        self.weapons.get(&kind)
    }

    /// The weapon of `kind` the player holds.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::WeaponNotEquipped`] if no weapon of that kind is held.
    pub fn get_weapon(&self, kind: WeaponKind) -> GameResult<Arc<Weapon>> {
        self.equipped(kind)
            .cloned()
            .ok_or(GameError::WeaponNotEquipped(kind))
    }

    /// Equip a weapon, replacing any weapon of the same kind.
    pub fn equip_weapon(&mut self, weapon: Arc<Weapon>) {
        self.weapons.insert(weapon.kind(), weapon);
    }

    /// Drop the weapon of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::WeaponNotEquipped`] if no weapon of that kind is held.
    pub fn drop_weapon(&mut self, kind: WeaponKind) -> GameResult<Arc<Weapon>> {
        self.weapons
            .remove(&kind)
            .ok_or(GameError::WeaponNotEquipped(kind))
    }
}
