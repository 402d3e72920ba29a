//! Rules engine: validates and executes player actions against a [`Game`].
//!
//! Every action checks its preconditions in a fixed order before touching any
//! state, so a rejected action leaves the game exactly as it was. The order
//! matters to callers because it decides which error is reported when several
//! preconditions fail at once.

use std::cmp::Ordering;
use std::sync::Arc;

use log::{debug, info, trace};
use serde::Serialize;

use crate::config::RulesConfig;
use crate::error::{GameError, GameResult};
use crate::game::{
    Game, MAX_HP, Player, Side, SideMask, Weapon, WeaponCatalog, WeaponKind, assert_invariants,
};

/// Identifier given to games created by [`GamePlay::new`].
pub const DEFAULT_GAME_ID: u64 = 1;

/// What happened when an attack landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    /// Health actually removed from the attacked player.
    pub damage: u32,
    /// Whether the hit killed the attacked player.
    pub killed: bool,
}

/// One line of a scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreboardRow {
    /// Player name.
    pub name: String,
    /// Kills so far.
    pub kills: u32,
    /// Deaths so far.
    pub deaths: u32,
}

impl From<&Player> for ScoreboardRow {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            kills: player.kills(),
            deaths: player.deaths(),
        }
    }
}

/// The rules engine for one game session.
#[derive(Debug, Clone)]
pub struct GamePlay {
    game: Game,
    config: RulesConfig,
    starting_weapon: Arc<Weapon>,
}

impl GamePlay {
    /// Start a session of `rounds` rounds using `config` and weapons from `catalog`.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidArgument`] if `rounds` is zero or `config` has a
    ///   zero round length or team size
    /// - [`GameError::WeaponNotFound`] if the starting weapon is not in `catalog`
    pub fn new(rounds: u32, config: RulesConfig, catalog: &WeaponCatalog) -> GameResult<Self> {
        let game = Game::new(DEFAULT_GAME_ID, rounds, config.round_length, config.max_team_size)?;
        Self::with_game(game, config, catalog)
    }

    /// Wrap an existing game.
    ///
    /// The game keeps its own round length and team size, and they replace
    /// the values in `config`; `config` supplies the remaining constants.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::WeaponNotFound`] if the starting weapon is not in `catalog`.
    pub fn with_game(
        game: Game,
        mut config: RulesConfig,
        catalog: &WeaponCatalog,
    ) -> GameResult<Self> {
        config.round_length = game.round_length();
        config.max_team_size = game.max_team_size();
        let starting_weapon = catalog.get(&config.starting_weapon)?;
        Ok(Self {
            game,
            config,
            starting_weapon,
        })
    }

    /// The game being played.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// The rules in effect. Round length and team size mirror the game's.
    #[must_use]
    pub const fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Push the externally supplied round clock into the game.
    pub fn set_round_time(&mut self, time: u64) {
        self.game.set_round_time(time);
    }

    /// Create a player joining now. The player is not added to the roster.
    ///
    /// Players joining at or after the entry cutoff start dead and play from
    /// the next round on.
    ///
    /// # Errors
    ///
    /// Never fails with the built-in health values; the `Result` carries
    /// [`Player::new`]'s validation through.
    pub fn create_player(&self, name: &str, side: Side) -> GameResult<Player> {
        let initial_hp = if self.game.round_time() >= self.config.enter_time_limit {
            0
        } else {
            MAX_HP
        };

        let mut player = Player::new(
            name,
            initial_hp,
            self.config.max_money,
            self.config.initial_money,
            side,
            self.game.game_time(),
        )?;
        player.equip_weapon(Arc::clone(&self.starting_weapon));

        Ok(player)
    }

    /// Add a player to the roster.
    ///
    /// # Errors
    ///
    /// Propagates [`Game::add_player`] errors unchanged.
    pub fn add_player(&mut self, player: Player) -> GameResult<()> {
        let name = player.name().to_string();
        let side = player.side();
        self.game
            .add_player(player)
            .inspect(|_| debug!("{name} joined {side}"))
            .inspect_err(|e| trace!("{name} could not join {side}: {e}"))
    }

    /// Health of the named player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] for unknown names.
    pub fn get_hp(&self, player_name: &str) -> GameResult<u32> {
        Ok(self.game.get_player_by_name(player_name)?.hp())
    }

    /// Money of the named player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] for unknown names.
    pub fn get_money(&self, player_name: &str) -> GameResult<u32> {
        Ok(self.game.get_player_by_name(player_name)?.money())
    }

    /// Buy `weapon` for the named player.
    ///
    /// `weapon` is `None` when the caller could not resolve a weapon name.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`GameError::PlayerNotFound`]
    /// - [`GameError::ActionFromDeadPlayer`]
    /// - [`GameError::ActionAtIllegalTime`] at or after the buy cutoff
    /// - [`GameError::NullReference`] if `weapon` is `None`
    /// - [`GameError::WeaponNotAvailable`] for the player's side
    /// - [`GameError::WeaponAlreadyEquipped`] for the weapon's kind
    /// - [`GameError::InsufficientFunds`]
    pub fn buy_weapon(&mut self, player_name: &str, weapon: Option<Arc<Weapon>>) -> GameResult<()> {
        let round_time = self.game.round_time();
        let buy_time_limit = self.config.buy_time_limit;

        let player = self.game.get_player_by_name_mut(player_name)?;
        let weapon = check_player_can_buy_weapon(player, weapon, round_time, buy_time_limit)
            .inspect_err(|e| trace!("{player_name} cannot buy: {e}"))?;

        player.subtract_money(weapon.price())?;
        debug!(
            "{player_name} bought {} for {} ({} left)",
            weapon.name(),
            weapon.price(),
            player.money()
        );
        player.equip_weapon(weapon);

        Ok(())
    }

    /// Resolve a hit by `attacker_name` on `attacked_name` with the attacker's
    /// weapon of `kind`.
    ///
    /// On a kill, the attacked player drops their pistol and heavy weapon and
    /// the attacker collects the weapon's kill reward.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`GameError::PlayerNotFound`] for the attacker, then the attacked
    /// - [`GameError::ActionFromDeadPlayer`] if the attacker is dead
    /// - [`GameError::AttackDeadPlayer`] if the attacked player is dead
    /// - [`GameError::WeaponNotEquipped`] if the attacker has no weapon of `kind`
    /// - [`GameError::FriendlyFire`] if both are on the same side
    pub fn attack_occurred(
        &mut self,
        attacker_name: &str,
        attacked_name: &str,
        kind: WeaponKind,
    ) -> GameResult<AttackOutcome> {
        let weapon = {
            let attacker = self.game.get_player_by_name(attacker_name)?;
            let attacked = self.game.get_player_by_name(attacked_name)?;
            check_attack_could_have_occurred(attacker, attacked, kind)
                .inspect_err(|e| trace!("{attacker_name} cannot attack {attacked_name}: {e}"))?
        };

        let attacked = self.game.get_player_by_name_mut(attacked_name)?;
        let hp_before = attacked.hp();
        attacked.take_damage(weapon.damage_per_hit());
        let outcome = AttackOutcome {
            damage: hp_before - attacked.hp(),
            killed: !attacked.is_alive(),
        };
        debug!(
            "{attacker_name} hit {attacked_name} with {} for {}",
            weapon.name(),
            outcome.damage
        );

        if outcome.killed {
            for dropped_kind in WeaponKind::DROPPED_ON_DEATH {
                if let Ok(dropped) = attacked.drop_weapon(dropped_kind) {
                    debug!("{attacked_name} dropped {}", dropped.name());
                }
            }

            let attacker = self.game.get_player_by_name_mut(attacker_name)?;
            attacker.add_kill();
            attacker.add_money(weapon.money_per_kill());
            debug!("{attacker_name} killed {attacked_name}");
        }

        Ok(outcome)
    }

    /// Close the current round: pick the winner, pay both sides and revive
    /// everybody. On the last round the game ends instead of advancing.
    ///
    /// The side with nobody alive loses. When nobody is alive on either side
    /// the round goes to the counter-terrorists.
    pub fn determine_winner_and_go_next_round(&mut self) -> Side {
        let finished_round = self.game.current_round();
        self.go_next_round_or_end();

        let (winner, loser) = self.find_winner_loser();
        self.reset_players_and_add_money(winner, self.config.winner_money_per_round);
        self.reset_players_and_add_money(loser, self.config.loser_money_per_round);
        assert_invariants(&self.game);

        info!("round {finished_round}: {winner} won");
        winner
    }

    fn go_next_round_or_end(&mut self) {
        if let Err(GameError::LastRound) = self.game.go_next_round() {
            self.game.end();
            info!("game over after {} rounds", self.game.rounds());
        }
    }

    fn find_winner_loser(&self) -> (Side, Side) {
        let counter_terrorists_alive = self.game.get_alive_player_count(SideMask::COUNTER_TERRORIST);
        let terrorists_alive = self.game.get_alive_player_count(SideMask::TERRORIST);

        let winner = if terrorists_alive > 0 && counter_terrorists_alive == 0 {
            Side::Terrorist
        } else {
            Side::CounterTerrorist
        };
        (winner, winner.opponent())
    }

    fn reset_players_and_add_money(&mut self, side: Side, money: u32) {
        for player in self.game.get_all_players_mut(side.into()) {
            player.reset_hp();
            player.add_money(money);
        }
    }

    /// Players of `sides` ranked by kills (most first), then deaths (fewest
    /// first), then entry time (earliest first). Full ties keep join order.
    #[must_use]
    pub fn get_scoreboard(&self, sides: impl Into<SideMask>) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.game.get_all_players(sides.into()).collect();
        players.sort_by(|a, b| scoreboard_order(a, b));
        players
    }

    /// [`Self::get_scoreboard`] as plain rows.
    #[must_use]
    pub fn scoreboard_rows(&self, sides: impl Into<SideMask>) -> Vec<ScoreboardRow> {
        self.get_scoreboard(sides)
            .into_iter()
            .map(ScoreboardRow::from)
            .collect()
    }

    /// Whether the last round has been played.
    #[must_use]
    pub const fn has_ended(&self) -> bool {
        self.game.has_ended()
    }
}

fn check_player_can_buy_weapon(
    player: &Player,
    weapon: Option<Arc<Weapon>>,
    round_time: u64,
    buy_time_limit: u64,
) -> GameResult<Arc<Weapon>> {
    if !player.is_alive() {
        return Err(GameError::ActionFromDeadPlayer);
    }
    if round_time >= buy_time_limit {
        return Err(GameError::ActionAtIllegalTime);
    }
    let weapon = weapon.ok_or(GameError::NullReference("weapon"))?;
    if !weapon.is_available_for(player.side()) {
        return Err(GameError::WeaponNotAvailable(weapon.name().to_string()));
    }
    if player.equipped(weapon.kind()).is_some() {
        return Err(GameError::WeaponAlreadyEquipped(weapon.kind()));
    }
    Ok(weapon)
}

fn check_attack_could_have_occurred(
    attacker: &Player,
    attacked: &Player,
    kind: WeaponKind,
) -> GameResult<Arc<Weapon>> {
    if !attacker.is_alive() {
        return Err(GameError::ActionFromDeadPlayer);
    }
    if !attacked.is_alive() {
        return Err(GameError::AttackDeadPlayer);
    }
    let weapon = attacker.get_weapon(kind)?;
    if attacker.side() == attacked.side() {
        return Err(GameError::FriendlyFire);
    }
    Ok(weapon)
}

fn scoreboard_order(a: &Player, b: &Player) -> Ordering {
    b.kills()
        .cmp(&a.kills())
        .then_with(|| a.deaths().cmp(&b.deaths()))
        .then_with(|| a.entry_time().cmp(&b.entry_time()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_play(rounds: u32) -> GamePlay {
        GamePlay::new(rounds, RulesConfig::default(), &WeaponCatalog::standard()).unwrap()
    }

    fn weapon(name: &str) -> Option<Arc<Weapon>> {
        WeaponCatalog::standard().try_get(name)
    }

    fn join(game_play: &mut GamePlay, name: &str, side: Side) {
        let player = game_play.create_player(name, side).unwrap();
        game_play.add_player(player).unwrap();
    }

    /// Kill `victim` with knife hits from `killer`.
    fn knife_to_death(game_play: &mut GamePlay, killer: &str, victim: &str) {
        while game_play.get_hp(victim).unwrap() > 0 {
            game_play.attack_occurred(killer, victim, WeaponKind::Melee).unwrap();
        }
    }

    #[test]
    fn test_new_rejects_unknown_starting_weapon() {
        let config = RulesConfig {
            starting_weapon: "Spork".to_string(),
            ..RulesConfig::default()
        };
        assert_eq!(
            GamePlay::new(3, config, &WeaponCatalog::standard()).map(|_| ()),
            Err(GameError::WeaponNotFound("Spork".to_string()))
        );
    }

    #[test]
    fn test_new_rejects_zero_rounds() {
        let result = GamePlay::new(0, RulesConfig::default(), &WeaponCatalog::standard());
        assert!(matches!(result, Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_with_game_keeps_game() {
        let game = Game::new(42, 4, 60_000, 3).unwrap();
        let game_play =
            GamePlay::with_game(game, RulesConfig::default(), &WeaponCatalog::standard()).unwrap();
        assert_eq!(game_play.game().id(), 42);
        assert_eq!(game_play.game().round_length(), 60_000);
        assert_eq!(game_play.game().max_team_size(), 3);
        assert_eq!(game_play.config().round_length, 60_000);
        assert_eq!(game_play.config().max_team_size, 3);
        assert_eq!(game_play.config().buy_time_limit, 45_000);
    }

    #[test]
    fn test_late_entry_time_with_huge_round_length() {
        let game = Game::new(1, 3, u64::MAX, 10).unwrap();
        let mut game_play =
            GamePlay::with_game(game, RulesConfig::default(), &WeaponCatalog::standard()).unwrap();
        game_play.determine_winner_and_go_next_round();
        game_play.set_round_time(1000);

        let player = game_play.create_player("Late", Side::Terrorist).unwrap();
        assert_eq!(player.entry_time(), u64::MAX);
        game_play.add_player(player).unwrap();
    }

    #[test]
    fn test_set_round_time() {
        let mut game_play = game_play(10);
        game_play.set_round_time(123);
        assert_eq!(game_play.game().round_time(), 123);
    }

    #[test]
    fn test_create_player() {
        let game_play = game_play(10);
        let player = game_play.create_player("Player", Side::Terrorist).unwrap();

        assert_eq!(player.name(), "Player");
        assert_eq!(player.hp(), 100);
        assert!(player.is_alive());
        assert_eq!(player.kills(), 0);
        assert_eq!(player.deaths(), 0);
        assert_eq!(player.side(), Side::Terrorist);
        assert_eq!(player.entry_time(), 0);
        assert_eq!(player.max_money(), 10_000);
        assert_eq!(player.money(), 1000);
        assert_eq!(player.get_weapon(WeaponKind::Melee).unwrap().name(), "Knife");
        assert!(game_play.game().get_player_by_name("Player").is_err());
    }

    #[test]
    fn test_create_player_after_entry_cutoff() {
        let mut game_play = game_play(10);
        game_play.set_round_time(2999);
        assert_eq!(game_play.create_player("Early", Side::Terrorist).unwrap().hp(), 100);

        game_play.set_round_time(3000);
        let player = game_play.create_player("Late", Side::Terrorist).unwrap();
        assert_eq!(player.hp(), 0);
        assert!(!player.is_alive());
        assert_eq!(player.entry_time(), 3000);
    }

    #[test]
    fn test_create_player_in_next_round() {
        let mut game_play = game_play(10);
        game_play.determine_winner_and_go_next_round();
        game_play.set_round_time(3000);
        let player = game_play.create_player("Player", Side::Terrorist).unwrap();
        assert_eq!(player.entry_time(), (2 * 60 + 18) * 1000);
    }

    #[test]
    fn test_add_player_propagates_game_errors() {
        let mut game_play = game_play(10);
        join(&mut game_play, "Player", Side::Terrorist);

        let again = game_play.create_player("Player", Side::Terrorist).unwrap();
        assert_eq!(
            game_play.add_player(again),
            Err(GameError::PlayerAlreadyOnTeam("Player".to_string()))
        );
        let other_side = game_play.create_player("Player", Side::CounterTerrorist).unwrap();
        assert_eq!(
            game_play.add_player(other_side),
            Err(GameError::PlayerOnOpposingTeam("Player".to_string()))
        );
    }

    #[test]
    fn test_add_player_full_team() {
        let config = RulesConfig {
            max_team_size: 1,
            ..RulesConfig::default()
        };
        let mut game_play = GamePlay::new(3, config, &WeaponCatalog::standard()).unwrap();
        join(&mut game_play, "A", Side::CounterTerrorist);

        let b = game_play.create_player("B", Side::CounterTerrorist).unwrap();
        assert_eq!(
            game_play.add_player(b),
            Err(GameError::TeamFull(Side::CounterTerrorist))
        );
    }

    #[test]
    fn test_get_hp_and_money() {
        let mut game_play = game_play(10);
        join(&mut game_play, "Player", Side::Terrorist);

        assert_eq!(game_play.get_hp("Player"), Ok(100));
        assert_eq!(game_play.get_money("Player"), Ok(1000));
        assert_eq!(
            game_play.get_hp("Ghost"),
            Err(GameError::PlayerNotFound("Ghost".to_string()))
        );
        assert_eq!(
            game_play.get_money("Ghost"),
            Err(GameError::PlayerNotFound("Ghost".to_string()))
        );
    }

    #[test]
    fn test_buy_weapon() {
        let mut game_play = game_play(10);
        join(&mut game_play, "Player", Side::Terrorist);

        game_play.buy_weapon("Player", weapon("Glock-18")).unwrap();

        let player = game_play.game().get_player_by_name("Player").unwrap();
        assert_eq!(player.money(), 700);
        assert_eq!(player.get_weapon(WeaponKind::Pistol).unwrap().name(), "Glock-18");
    }

    #[test]
    fn test_buy_weapon_unknown_player() {
        let mut game_play = game_play(10);
        assert_eq!(
            game_play.buy_weapon("Ghost", weapon("AK")),
            Err(GameError::PlayerNotFound("Ghost".to_string()))
        );
    }

    #[test]
    fn test_buy_weapon_dead_player_checked_first() {
        let mut game_play = game_play(10);
        game_play.set_round_time(5000);
        join(&mut game_play, "Late", Side::Terrorist);

        // Dead, out of time and no weapon at once: dead wins
        game_play.set_round_time(50_000);
        assert_eq!(
            game_play.buy_weapon("Late", None),
            Err(GameError::ActionFromDeadPlayer)
        );
    }

    #[test]
    fn test_buy_weapon_after_time_limit() {
        let mut game_play = game_play(10);
        join(&mut game_play, "Player", Side::Terrorist);

        game_play.set_round_time(45_000);
        assert_eq!(
            game_play.buy_weapon("Player", None),
            Err(GameError::ActionAtIllegalTime)
        );
        assert_eq!(game_play.get_money("Player"), Ok(1000));
    }

    #[test]
    fn test_buy_missing_weapon() {
        let mut game_play = game_play(10);
        join(&mut game_play, "Player", Side::Terrorist);

        assert_eq!(
            game_play.buy_weapon("Player", None),
            Err(GameError::NullReference("weapon"))
        );
    }

    #[test]
    fn test_buy_weapon_for_other_side() {
        let mut game_play = game_play(10);
        join(&mut game_play, "Player", Side::Terrorist);

        assert_eq!(
            game_play.buy_weapon("Player", weapon("M4A1")),
            Err(GameError::WeaponNotAvailable("M4A1".to_string()))
        );
        assert_eq!(game_play.get_money("Player"), Ok(1000));
    }

    #[test]
    fn test_buy_weapon_already_equipped() {
        let mut game_play = game_play(10);
        join(&mut game_play, "Player", Side::Terrorist);
        game_play.buy_weapon("Player", weapon("Glock-18")).unwrap();

        assert_eq!(
            game_play.buy_weapon("Player", weapon("Revolver")),
            Err(GameError::WeaponAlreadyEquipped(WeaponKind::Pistol))
        );
        let player = game_play.game().get_player_by_name("Player").unwrap();
        assert_eq!(player.money(), 700);
        assert_eq!(player.get_weapon(WeaponKind::Pistol).unwrap().name(), "Glock-18");
    }

    #[test]
    fn test_buy_weapon_insufficient_funds_checked_last() {
        let mut game_play = game_play(10);
        join(&mut game_play, "Player", Side::Terrorist);

        assert_eq!(
            game_play.buy_weapon("Player", weapon("AK")),
            Err(GameError::InsufficientFunds {
                required: 2700,
                available: 1000
            })
        );
        let player = game_play.game().get_player_by_name("Player").unwrap();
        assert_eq!(player.money(), 1000);
        assert!(player.equipped(WeaponKind::Heavy).is_none());
    }

    #[test]
    fn test_attack() {
        let mut game_play = game_play(10);
        join(&mut game_play, "CT", Side::CounterTerrorist);
        join(&mut game_play, "T", Side::Terrorist);

        let outcome = game_play.attack_occurred("CT", "T", WeaponKind::Melee).unwrap();
        assert_eq!(
            outcome,
            AttackOutcome {
                damage: 43,
                killed: false
            }
        );
        assert_eq!(game_play.get_hp("T"), Ok(57));
        assert_eq!(game_play.get_money("CT"), Ok(1000));
    }

    #[test]
    fn test_attack_unknown_players() {
        let mut game_play = game_play(10);
        join(&mut game_play, "CT", Side::CounterTerrorist);

        assert_eq!(
            game_play.attack_occurred("Ghost", "Phantom", WeaponKind::Melee),
            Err(GameError::PlayerNotFound("Ghost".to_string()))
        );
        assert_eq!(
            game_play.attack_occurred("CT", "Phantom", WeaponKind::Melee),
            Err(GameError::PlayerNotFound("Phantom".to_string()))
        );
    }

    #[test]
    fn test_attack_from_dead_player() {
        let mut game_play = game_play(10);
        join(&mut game_play, "T", Side::Terrorist);
        game_play.set_round_time(4000);
        join(&mut game_play, "CT", Side::CounterTerrorist);

        assert_eq!(
            game_play.attack_occurred("CT", "T", WeaponKind::Melee),
            Err(GameError::ActionFromDeadPlayer)
        );
    }

    #[test]
    fn test_attack_dead_player() {
        let mut game_play = game_play(10);
        join(&mut game_play, "CT", Side::CounterTerrorist);
        game_play.set_round_time(4000);
        join(&mut game_play, "T", Side::Terrorist);

        assert_eq!(
            game_play.attack_occurred("CT", "T", WeaponKind::Melee),
            Err(GameError::AttackDeadPlayer)
        );
    }

    #[test]
    fn test_weapon_check_precedes_friendly_fire() {
        let mut game_play = game_play(10);
        join(&mut game_play, "T1", Side::Terrorist);
        join(&mut game_play, "T2", Side::Terrorist);

        assert_eq!(
            game_play.attack_occurred("T1", "T2", WeaponKind::Heavy),
            Err(GameError::WeaponNotEquipped(WeaponKind::Heavy))
        );
        assert_eq!(
            game_play.attack_occurred("T1", "T2", WeaponKind::Melee),
            Err(GameError::FriendlyFire)
        );
        assert_eq!(game_play.get_hp("T2"), Ok(100));
    }

    #[test]
    fn test_kill_drops_weapons_and_pays_attacker() {
        let mut game_play = game_play(10);
        join(&mut game_play, "CT", Side::CounterTerrorist);
        join(&mut game_play, "T", Side::Terrorist);
        game_play.buy_weapon("T", weapon("Glock-18")).unwrap();

        game_play.attack_occurred("CT", "T", WeaponKind::Melee).unwrap();
        game_play.attack_occurred("CT", "T", WeaponKind::Melee).unwrap();
        let outcome = game_play.attack_occurred("CT", "T", WeaponKind::Melee).unwrap();
        assert_eq!(
            outcome,
            AttackOutcome {
                damage: 14,
                killed: true
            }
        );

        let victim = game_play.game().get_player_by_name("T").unwrap();
        assert_eq!(victim.hp(), 0);
        assert_eq!(victim.deaths(), 1);
        assert!(victim.equipped(WeaponKind::Pistol).is_none());
        assert!(victim.equipped(WeaponKind::Melee).is_some());

        let killer = game_play.game().get_player_by_name("CT").unwrap();
        assert_eq!(killer.kills(), 1);
        assert_eq!(killer.money(), 1500);
    }

    #[test]
    fn test_kill_drops_heavy_weapon() {
        let mut game_play = game_play(10);
        join(&mut game_play, "CT", Side::CounterTerrorist);
        join(&mut game_play, "T", Side::Terrorist);
        game_play.determine_winner_and_go_next_round();

        game_play.buy_weapon("CT", weapon("M4A1")).unwrap();
        knife_to_death(&mut game_play, "T", "CT");

        let victim = game_play.game().get_player_by_name("CT").unwrap();
        assert!(victim.equipped(WeaponKind::Heavy).is_none());
        assert!(victim.equipped(WeaponKind::Pistol).is_none());
        assert_eq!(victim.get_weapon(WeaponKind::Melee).unwrap().name(), "Knife");
    }

    #[test]
    fn test_kill_drops_pistol_and_heavy() {
        let mut game_play = game_play(10);
        join(&mut game_play, "CT", Side::CounterTerrorist);
        join(&mut game_play, "T", Side::Terrorist);
        for _ in 0..2 {
            game_play.determine_winner_and_go_next_round();
        }

        game_play.buy_weapon("T", weapon("AK")).unwrap();
        game_play.buy_weapon("T", weapon("Revolver")).unwrap();
        assert_eq!(game_play.get_money("T"), Ok(1000 + 2 * 2400 - 2700 - 600));
        knife_to_death(&mut game_play, "CT", "T");

        let victim = game_play.game().get_player_by_name("T").unwrap();
        assert!(victim.equipped(WeaponKind::Pistol).is_none());
        assert!(victim.equipped(WeaponKind::Heavy).is_none());
        assert!(victim.equipped(WeaponKind::Melee).is_some());

        // Dropped slots can be filled again next round.
        game_play.determine_winner_and_go_next_round();
        game_play.buy_weapon("T", weapon("Glock-18")).unwrap();
    }

    #[test]
    fn test_kill_reward_capped() {
        let mut game_play = game_play(10);
        join(&mut game_play, "CT", Side::CounterTerrorist);
        join(&mut game_play, "T", Side::Terrorist);
        for _ in 0..4 {
            game_play.determine_winner_and_go_next_round();
        }
        assert_eq!(game_play.get_money("CT"), Ok(10_000));

        knife_to_death(&mut game_play, "CT", "T");
        assert_eq!(game_play.get_money("CT"), Ok(10_000));
    }

    #[test]
    fn test_round_winner_counter_terrorist() {
        let mut game_play = game_play(10);
        join(&mut game_play, "CT", Side::CounterTerrorist);
        join(&mut game_play, "T", Side::Terrorist);
        knife_to_death(&mut game_play, "CT", "T");

        assert_eq!(game_play.determine_winner_and_go_next_round(), Side::CounterTerrorist);
        assert_eq!(game_play.get_money("CT"), Ok(1000 + 500 + 2700));
        assert_eq!(game_play.get_money("T"), Ok(1000 + 2400));
        assert_eq!(game_play.get_hp("T"), Ok(100));
        assert_eq!(game_play.game().current_round(), 2);
    }

    #[test]
    fn test_round_winner_terrorist() {
        let mut game_play = game_play(10);
        join(&mut game_play, "CT", Side::CounterTerrorist);
        join(&mut game_play, "T", Side::Terrorist);
        knife_to_death(&mut game_play, "T", "CT");

        assert_eq!(game_play.determine_winner_and_go_next_round(), Side::Terrorist);
        assert_eq!(game_play.get_money("T"), Ok(1000 + 500 + 2700));
        assert_eq!(game_play.get_money("CT"), Ok(1000 + 2400));
        assert_eq!(game_play.get_hp("CT"), Ok(100));
    }

    #[test]
    fn test_round_winner_nobody_alive() {
        let mut game_play = game_play(10);
        game_play.set_round_time(10_000);
        join(&mut game_play, "CT", Side::CounterTerrorist);
        join(&mut game_play, "T", Side::Terrorist);

        assert_eq!(game_play.determine_winner_and_go_next_round(), Side::CounterTerrorist);
        assert_eq!(game_play.get_hp("CT"), Ok(100));
        assert_eq!(game_play.get_hp("T"), Ok(100));
    }

    #[test]
    fn test_round_winner_empty_game() {
        let mut game_play = game_play(10);
        assert_eq!(game_play.determine_winner_and_go_next_round(), Side::CounterTerrorist);
    }

    #[test]
    fn test_last_round_ends_game() {
        let mut game_play = game_play(2);
        join(&mut game_play, "CT", Side::CounterTerrorist);

        game_play.determine_winner_and_go_next_round();
        assert!(!game_play.has_ended());
        assert_eq!(game_play.game().current_round(), 2);

        game_play.determine_winner_and_go_next_round();
        assert!(game_play.has_ended());
        assert_eq!(game_play.game().current_round(), 2);
        // Payout still applies on the final transition
        assert_eq!(game_play.get_money("CT"), Ok(1000 + 2700 + 2700));
    }

    #[test]
    fn test_scoreboard_order() {
        let mut game_play = game_play(10);
        let stats = [
            ("A", 3, 7, 5000),
            ("B", 2, 5, 2500),
            ("C", 2, 6, 1500),
            ("D", 2, 6, 2000),
        ];
        for (name, kills, deaths, entry_time) in stats {
            let mut player =
                Player::new(name, 100, 10_000, 1000, Side::CounterTerrorist, entry_time).unwrap();
            for _ in 0..kills {
                player.add_kill();
            }
            for _ in 0..deaths {
                player.take_damage(100);
                player.reset_hp();
            }
            game_play.add_player(player).unwrap();
        }
        join(&mut game_play, "T", Side::Terrorist);

        let names: Vec<&str> = game_play
            .get_scoreboard(Side::CounterTerrorist)
            .into_iter()
            .map(Player::name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);

        let rows = game_play.scoreboard_rows(Side::Terrorist);
        assert_eq!(
            rows,
            vec![ScoreboardRow {
                name: "T".to_string(),
                kills: 0,
                deaths: 0
            }]
        );
        assert_eq!(game_play.get_scoreboard(SideMask::ALL).len(), 5);
    }
}
