#![no_main]

use arbitrary::Arbitrary;
use defuse::game::{MAX_HP, check_invariants};
use defuse::{GamePlay, RulesConfig, Side, SideMask, WeaponCatalog, WeaponKind};
use libfuzzer_sys::fuzz_target;

const NAMES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];
const WEAPONS: [&str; 9] = [
    "Desert-Eagle",
    "UPS-S",
    "M4A1",
    "Revolver",
    "Glock-18",
    "AK",
    "AWP",
    "Knife",
    "Bazooka",
];

/// A single fuzzer-generated action.
#[derive(Arbitrary, Debug)]
enum FuzzAction {
    Join { name: u8, terrorist: bool },
    Buy { name: u8, weapon: u8 },
    Attack { attacker: u8, attacked: u8, kind: u8 },
    EndRound,
}

/// Structured input for session fuzzing.
#[derive(Arbitrary, Debug)]
struct SessionInput {
    /// Number of rounds (capped).
    rounds: u8,
    /// Roster cap per side (capped).
    max_team_size: u8,
    /// Actions paired with the round time they happen at.
    actions: Vec<(FuzzAction, u32)>,
}

fuzz_target!(|input: SessionInput| {
    let rules = RulesConfig {
        max_team_size: usize::from(input.max_team_size % 6).max(1),
        ..RulesConfig::default()
    };
    let catalog = WeaponCatalog::standard();
    let Ok(mut game_play) = GamePlay::new(u32::from(input.rounds % 8).max(1), rules, &catalog)
    else {
        return;
    };

    for (action, time) in input.actions.iter().take(256) {
        game_play.set_round_time(u64::from(*time) % 200_000);
        let name = |i: u8| NAMES[usize::from(i) % NAMES.len()];

        match *action {
            FuzzAction::Join { name: i, terrorist } => {
                let side = if terrorist {
                    Side::Terrorist
                } else {
                    Side::CounterTerrorist
                };
                if let Ok(player) = game_play.create_player(name(i), side) {
                    let _ = game_play.add_player(player);
                }
            }
            FuzzAction::Buy { name: i, weapon } => {
                let weapon = catalog.try_get(WEAPONS[usize::from(weapon) % WEAPONS.len()]);
                let before = game_play.get_money(name(i)).ok();
                if game_play.buy_weapon(name(i), weapon).is_err() {
                    assert_eq!(game_play.get_money(name(i)).ok(), before);
                }
            }
            FuzzAction::Attack {
                attacker,
                attacked,
                kind,
            } => {
                let kind = match kind % 3 {
                    0 => WeaponKind::Melee,
                    1 => WeaponKind::Pistol,
                    _ => WeaponKind::Heavy,
                };
                let before = game_play.get_hp(name(attacked)).ok();
                match game_play.attack_occurred(name(attacker), name(attacked), kind) {
                    Ok(outcome) => {
                        let after = game_play.get_hp(name(attacked)).unwrap_or(0);
                        assert_eq!(before, Some(after + outcome.damage));
                        assert_eq!(outcome.killed, after == 0);
                    }
                    Err(_) => assert_eq!(game_play.get_hp(name(attacked)).ok(), before),
                }
            }
            FuzzAction::EndRound => {
                if game_play.has_ended() {
                    break;
                }
                game_play.determine_winner_and_go_next_round();
            }
        }

        for player in game_play.game().get_all_players(SideMask::ALL) {
            assert!(player.hp() <= MAX_HP);
            assert!(player.money() <= game_play.config().max_money);
        }
        let violations = check_invariants(game_play.game());
        assert!(
            violations.is_empty(),
            "Invariants violated: {:?}",
            violations
        );
    }
});
