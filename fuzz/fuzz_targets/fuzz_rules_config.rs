#![no_main]

use defuse::game::check_invariants;
use defuse::{GamePlay, RulesConfig, Side, WeaponCatalog};
use libfuzzer_sys::fuzz_target;

const ROUNDS: u32 = 3;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that validates must start a session with the built-in weapons
    // unless it names a starting weapon the table lacks, and must then play
    // every round without overflowing the clock.
    if let Ok(rules) = RulesConfig::from_json_str(json) {
        let catalog = WeaponCatalog::standard();
        let known_weapon = catalog.try_get(&rules.starting_weapon).is_some();
        let buy_time = rules.buy_time_limit;
        let Ok(mut game_play) = GamePlay::new(ROUNDS, rules, &catalog) else {
            assert!(!known_weapon);
            return;
        };
        assert!(known_weapon);

        let mut round = 0;
        while !game_play.has_ended() {
            game_play.set_round_time(buy_time);
            for side in Side::BOTH {
                let name = format!("{side}-{round}");
                if let Ok(player) = game_play.create_player(&name, side) {
                    assert_eq!(player.entry_time(), game_play.game().game_time());
                    let _ = game_play.add_player(player);
                }
            }
            assert!(check_invariants(game_play.game()).is_empty());
            game_play.determine_winner_and_go_next_round();
            round += 1;
        }
        assert_eq!(round, ROUNDS);
    }

    let _ = WeaponCatalog::from_json_str(json);
});
