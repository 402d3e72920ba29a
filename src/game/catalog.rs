//! Weapon catalog - loaded once, shared by reference everywhere.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::ConfigError;
use crate::error::{GameError, GameResult};
use crate::game::{SideMask, Weapon, WeaponKind};

/// Immutable table of weapons keyed by name.
#[derive(Debug, Clone, Default)]
pub struct WeaponCatalog {
    weapons: HashMap<String, Arc<Weapon>>,
}

impl WeaponCatalog {
    /// The built-in weapon table.
    #[must_use]
    pub fn standard() -> Self {
        let weapons = [
            Weapon::new("Desert-Eagle", 600, 53, 175, WeaponKind::Pistol, SideMask::COUNTER_TERRORIST),
            Weapon::new("UPS-S", 300, 13, 225, WeaponKind::Pistol, SideMask::COUNTER_TERRORIST),
            Weapon::new("M4A1", 2700, 29, 100, WeaponKind::Heavy, SideMask::COUNTER_TERRORIST),
            Weapon::new("Revolver", 600, 51, 150, WeaponKind::Pistol, SideMask::TERRORIST),
            Weapon::new("Glock-18", 300, 11, 200, WeaponKind::Pistol, SideMask::TERRORIST),
            Weapon::new("AK", 2700, 31, 100, WeaponKind::Heavy, SideMask::TERRORIST),
            Weapon::new("AWP", 4300, 110, 50, WeaponKind::Heavy, SideMask::ALL),
            Weapon::new("Knife", 0, 43, 500, WeaponKind::Melee, SideMask::ALL),
        ];

        Self {
            weapons: weapons
                .into_iter()
                .map(|w| (w.name().to_string(), Arc::new(w)))
                .collect(),
        }
    }

    /// Build a catalog from weapon definitions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if two weapons share a name.
    pub fn from_weapons(weapons: impl IntoIterator<Item = Weapon>) -> Result<Self, ConfigError> {
        let mut catalog = Self::default();
        for weapon in weapons {
            if catalog.weapons.contains_key(weapon.name()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate weapon name `{}`",
                    weapon.name()
                )));
            }
            catalog
                .weapons
                .insert(weapon.name().to_string(), Arc::new(weapon));
        }
        Ok(catalog)
    }

    /// Parse a JSON array of weapon definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or contains duplicate names.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let weapons: Vec<Weapon> = serde_json::from_str(json)?;
        Self::from_weapons(weapons)
    }

    /// Load a JSON weapon table from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::debug!("loaded {} weapons from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Look up a weapon by name.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::WeaponNotFound`] for unknown names.
    pub fn get(&self, name: &str) -> GameResult<Arc<Weapon>> {
        self.try_get(name)
            .ok_or_else(|| GameError::WeaponNotFound(name.to_string()))
    }

    /// Look up a weapon by name, returning `None` for unknown names.
    #[must_use]
    pub fn try_get(&self, name: &str) -> Option<Arc<Weapon>> {
        self.weapons.get(name).cloned()
    }

    /// Number of weapons in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Iterate over all weapons in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Weapon>> {
        self.weapons.values()
    }
}
