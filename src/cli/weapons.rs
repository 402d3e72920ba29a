//! Weapons command implementation.

use std::path::Path;

use defuse::{Side, Weapon, WeaponCatalog};

use super::{CliError, load_catalog};

/// Execute the weapons command: print the catalog grouped by kind, cheapest first.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub(crate) fn execute(catalog: Option<&Path>) -> Result<(), CliError> {
    let catalog = load_catalog(catalog)?;

    println!(
        "{:<14} {:>6} {:>6} {:>6}  {:<7} Sides",
        "Name", "Price", "Damage", "Reward", "Kind"
    );
    for weapon in listing(&catalog) {
        println!(
            "{:<14} {:>6} {:>6} {:>6}  {:<7} {}",
            weapon.name(),
            weapon.price(),
            weapon.damage_per_hit(),
            weapon.money_per_kill(),
            weapon.kind().to_string(),
            sides_label(weapon)
        );
    }

    Ok(())
}

/// Catalog entries ordered melee, pistol, heavy; cheapest first within a kind.
fn listing(catalog: &WeaponCatalog) -> Vec<&Weapon> {
    let mut weapons: Vec<&Weapon> = catalog.iter().map(|weapon| &**weapon).collect();
    weapons.sort_by_key(|weapon| (weapon.kind().bit(), weapon.price(), weapon.name().to_string()));
    weapons
}

fn sides_label(weapon: &Weapon) -> String {
    let sides: Vec<String> = Side::BOTH
        .iter()
        .filter(|side| weapon.is_available_for(**side))
        .map(ToString::to_string)
        .collect();
    if sides.is_empty() {
        "-".to_string()
    } else {
        sides.join(", ")
    }
}
