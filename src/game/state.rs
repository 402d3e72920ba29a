//! Game state management.

use crate::error::{GameError, GameResult};
use crate::game::{Player, Side, SideMask};

/// Roster and round bookkeeping for one game session.
///
/// Players are kept in join order and looked up by name. Rosters are small
/// (a few dozen players at most), so lookups are linear scans.
#[derive(Debug, Clone)]
pub struct Game {
    id: u64,
    rounds: u32,
    current_round: u32,
    round_length: u64,
    round_time: u64,
    max_team_size: usize,
    ended: bool,
    counter_terrorist_count: usize,
    terrorist_count: usize,
    players: Vec<Player>,
}

impl Game {
    /// Create a new game starting at round 1.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] if `rounds`, `round_length` or
    /// `max_team_size` is zero.
    pub fn new(id: u64, rounds: u32, round_length: u64, max_team_size: usize) -> GameResult<Self> {
        if rounds == 0 {
            return Err(GameError::InvalidArgument(
                "rounds should be more than 0".to_string(),
            ));
        }
        if round_length == 0 {
            return Err(GameError::InvalidArgument(
                "round_length should be more than 0".to_string(),
            ));
        }
        if max_team_size == 0 {
            return Err(GameError::InvalidArgument(
                "max_team_size should be more than 0".to_string(),
            ));
        }

        Ok(Self {
            id,
            rounds,
            current_round: 1,
            round_length,
            round_time: 0,
            max_team_size,
            ended: false,
            counter_terrorist_count: 0,
            terrorist_count: 0,
            players: Vec::new(),
        })
    }

    /// Game identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Total number of rounds.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Current round, starting at 1.
    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Advance to the next round and rewind the round clock.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LastRound`] if the current round is the last one.
    pub fn go_next_round(&mut self) -> GameResult<()> {
        if self.current_round >= self.rounds {
            return Err(GameError::LastRound);
        }
        self.current_round += 1;
        self.round_time = 0;
        Ok(())
    }

    /// Length of one round in milliseconds.
    #[must_use]
    pub const fn round_length(&self) -> u64 {
        self.round_length
    }

    /// Milliseconds elapsed in the current round.
    #[must_use]
    pub const fn round_time(&self) -> u64 {
        self.round_time
    }

    /// Set the elapsed time within the current round.
    pub fn set_round_time(&mut self, time: u64) {
        self.round_time = time;
    }

    /// Maximum roster size per side.
    #[must_use]
    pub const fn max_team_size(&self) -> usize {
        self.max_team_size
    }

    /// Change the maximum roster size per side.
    ///
    /// Shrinking below the current roster only blocks further joins.
    pub fn set_max_team_size(&mut self, size: usize) {
        self.max_team_size = size;
    }

    /// Number of players that joined `side`.
    #[must_use]
    pub const fn team_size(&self, side: Side) -> usize {
        match side {
            Side::CounterTerrorist => self.counter_terrorist_count,
            Side::Terrorist => self.terrorist_count,
        }
    }

    /// Milliseconds since the start of the first round.
    #[must_use]
    pub fn game_time(&self) -> u64 {
        u64::from(self.current_round.saturating_sub(1))
            .saturating_mul(self.round_length)
            .saturating_add(self.round_time)
    }

    /// Mark the game as finished. Cannot be undone.
    pub fn end(&mut self) {
        self.ended = true;
    }

    /// Whether the game has finished.
    #[must_use]
    pub const fn has_ended(&self) -> bool {
        self.ended
    }

    /// Add a player to the roster.
    ///
    /// # Errors
    ///
    /// - [`GameError::PlayerAlreadyOnTeam`] if the name is taken on the same side
    /// - [`GameError::PlayerOnOpposingTeam`] if the name is taken on the other side
    /// - [`GameError::TeamFull`] if the player's side is at capacity
    pub fn add_player(&mut self, player: Player) -> GameResult<()> {
        self.check_player_can_be_added(&player)?;

        match player.side() {
            Side::CounterTerrorist => self.counter_terrorist_count += 1,
            Side::Terrorist => self.terrorist_count += 1,
        }
        self.players.push(player);
        Ok(())
    }

    fn check_player_can_be_added(&self, player: &Player) -> GameResult<()> {
        if let Some(existing) = self.players.iter().find(|p| p.name() == player.name()) {
            let name = player.name().to_string();
            return Err(if existing.side() == player.side() {
                GameError::PlayerAlreadyOnTeam(name)
            } else {
                GameError::PlayerOnOpposingTeam(name)
            });
        }
        if self.team_size(player.side()) >= self.max_team_size {
            return Err(GameError::TeamFull(player.side()));
        }
        Ok(())
    }

    /// Get a player by name.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if nobody with that name joined.
    pub fn get_player_by_name(&self, name: &str) -> GameResult<&Player> {
        self.players
            .iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
    }

    /// Get a mutable reference to a player by name.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if nobody with that name joined.
    pub fn get_player_by_name_mut(&mut self, name: &str) -> GameResult<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
    }

    /// All players whose side is in `sides`.
    pub fn get_all_players(&self, sides: SideMask) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| sides.includes(p.side()))
    }

    /// Mutable access to all players whose side is in `sides`.
    pub fn get_all_players_mut(&mut self, sides: SideMask) -> impl Iterator<Item = &mut Player> {
        self.players
            .iter_mut()
            .filter(move |p| sides.includes(p.side()))
    }

    /// Living players whose side is in `sides`.
    pub fn get_alive_players(&self, sides: SideMask) -> impl Iterator<Item = &Player> {
        self.get_all_players(sides).filter(|p| p.is_alive())
    }

    /// Number of living players whose side is in `sides`.
    #[must_use]
    pub fn get_alive_player_count(&self, sides: SideMask) -> usize {
        self.get_alive_players(sides).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(1, 10, 135_000, 10).unwrap()
    }

    fn player(name: &str, side: Side) -> Player {
        Player::new(name, 100, 10_000, 1000, side, 0).unwrap()
    }

    #[test]
    fn test_game_creation() {
        let game = Game::new(7, 3, 135_000, 5).unwrap();
        assert_eq!(game.id(), 7);
        assert_eq!(game.rounds(), 3);
        assert_eq!(game.current_round(), 1);
        assert_eq!(game.round_length(), 135_000);
        assert_eq!(game.round_time(), 0);
        assert_eq!(game.max_team_size(), 5);
        assert!(!game.has_ended());
        assert_eq!(game.team_size(Side::Terrorist), 0);
    }

    #[test]
    fn test_game_creation_rejects_zero_parameters() {
        assert!(matches!(Game::new(1, 0, 135_000, 10), Err(GameError::InvalidArgument(_))));
        assert!(matches!(Game::new(1, 10, 0, 10), Err(GameError::InvalidArgument(_))));
        assert!(matches!(Game::new(1, 10, 135_000, 0), Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_go_next_round() {
        let mut game = Game::new(1, 2, 135_000, 10).unwrap();
        game.set_round_time(42_000);

        game.go_next_round().unwrap();
        assert_eq!(game.current_round(), 2);
        assert_eq!(game.round_time(), 0);

        assert_eq!(game.go_next_round(), Err(GameError::LastRound));
        assert_eq!(game.current_round(), 2);
    }

    #[test]
    fn test_game_time() {
        let mut game = game();
        game.set_round_time(3000);
        assert_eq!(game.game_time(), 3000);

        game.go_next_round().unwrap();
        game.set_round_time(3000);
        assert_eq!(game.game_time(), 138_000);
    }

    #[test]
    fn test_game_time_saturates() {
        let mut game = Game::new(1, 3, u64::MAX, 10).unwrap();
        game.go_next_round().unwrap();
        game.set_round_time(1000);
        assert_eq!(game.game_time(), u64::MAX);

        game.go_next_round().unwrap();
        assert_eq!(game.game_time(), u64::MAX);
    }

    #[test]
    fn test_end() {
        let mut game = game();
        game.end();
        assert!(game.has_ended());
        game.end();
        assert!(game.has_ended());
    }

    #[test]
    fn test_add_and_get_player() {
        let mut game = game();
        game.add_player(player("Alice", Side::Terrorist)).unwrap();

        assert_eq!(game.team_size(Side::Terrorist), 1);
        assert_eq!(game.team_size(Side::CounterTerrorist), 0);
        assert_eq!(game.get_player_by_name("Alice").unwrap().side(), Side::Terrorist);
        assert_eq!(
            game.get_player_by_name("Bob").map(Player::name),
            Err(GameError::PlayerNotFound("Bob".to_string()))
        );
    }

    #[test]
    fn test_add_same_name_twice() {
        let mut game = game();
        game.add_player(player("Alice", Side::Terrorist)).unwrap();

        assert_eq!(
            game.add_player(player("Alice", Side::Terrorist)),
            Err(GameError::PlayerAlreadyOnTeam("Alice".to_string()))
        );
        assert_eq!(
            game.add_player(player("Alice", Side::CounterTerrorist)),
            Err(GameError::PlayerOnOpposingTeam("Alice".to_string()))
        );
        assert_eq!(game.team_size(Side::Terrorist), 1);
        assert_eq!(game.team_size(Side::CounterTerrorist), 0);
    }

    #[test]
    fn test_team_full() {
        let mut game = Game::new(1, 10, 135_000, 2).unwrap();
        game.add_player(player("A", Side::Terrorist)).unwrap();
        game.add_player(player("B", Side::Terrorist)).unwrap();

        assert_eq!(
            game.add_player(player("C", Side::Terrorist)),
            Err(GameError::TeamFull(Side::Terrorist))
        );
        game.add_player(player("C", Side::CounterTerrorist)).unwrap();
        assert_eq!(game.team_size(Side::CounterTerrorist), 1);
    }

    #[test]
    fn test_name_collision_checked_before_capacity() {
        let mut game = Game::new(1, 10, 135_000, 1).unwrap();
        game.add_player(player("A", Side::Terrorist)).unwrap();
        assert_eq!(
            game.add_player(player("A", Side::Terrorist)),
            Err(GameError::PlayerAlreadyOnTeam("A".to_string()))
        );
    }

    #[test]
    fn test_set_max_team_size() {
        let mut game = game();
        game.set_max_team_size(1);
        game.add_player(player("A", Side::Terrorist)).unwrap();
        assert_eq!(
            game.add_player(player("B", Side::Terrorist)),
            Err(GameError::TeamFull(Side::Terrorist))
        );
    }

    #[test]
    fn test_side_filters() {
        let mut game = game();
        game.add_player(player("T1", Side::Terrorist)).unwrap();
        game.add_player(player("T2", Side::Terrorist)).unwrap();
        game.add_player(player("CT1", Side::CounterTerrorist)).unwrap();
        game.get_player_by_name_mut("T2").unwrap().take_damage(100);

        assert_eq!(game.get_all_players(SideMask::ALL).count(), 3);
        assert_eq!(game.get_all_players(SideMask::TERRORIST).count(), 2);
        assert_eq!(game.get_all_players(SideMask::COUNTER_TERRORIST).count(), 1);

        let alive: Vec<_> = game.get_alive_players(SideMask::TERRORIST).map(Player::name).collect();
        assert_eq!(alive, vec!["T1"]);
        assert_eq!(game.get_alive_player_count(SideMask::ALL), 2);
        assert_eq!(game.get_alive_player_count(SideMask::COUNTER_TERRORIST), 1);
    }

    #[test]
    fn test_mutable_side_filter() {
        let mut game = game();
        game.add_player(player("T1", Side::Terrorist)).unwrap();
        game.add_player(player("CT1", Side::CounterTerrorist)).unwrap();

        for p in game.get_all_players_mut(SideMask::TERRORIST) {
            p.add_money(500);
        }

        assert_eq!(game.get_player_by_name("T1").unwrap().money(), 1500);
        assert_eq!(game.get_player_by_name("CT1").unwrap().money(), 1000);
    }
}
