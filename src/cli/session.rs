//! Drives a [`GamePlay`] from parsed commands and writes one response per
//! command plus one line per finished round.

use std::io::Write;

use defuse::{GameError, GamePlay, RulesConfig, WeaponCatalog, WeaponKind};
use log::debug;

use super::CliError;
use super::commands::{Command, Tokens};
use super::output;

/// A running session reading from a fully buffered input.
#[derive(Debug)]
pub(super) struct Session<'a> {
    game_play: GamePlay,
    catalog: &'a WeaponCatalog,
}

impl<'a> Session<'a> {
    /// Play every round described by `input`, writing responses to `out`.
    ///
    /// Returns the finished game for reporting.
    pub(super) fn run<W: Write>(
        input: &str,
        rules: RulesConfig,
        catalog: &'a WeaponCatalog,
        out: &mut W,
    ) -> Result<GamePlay, CliError> {
        let mut tokens = Tokens::new(input);
        let rounds: u32 = tokens.number("round count")?;
        let mut session = Self {
            game_play: GamePlay::new(rounds, rules, catalog)?,
            catalog,
        };

        while !session.game_play.has_ended() {
            let count = tokens.round_header()?;
            debug!(
                "round {} with {count} commands",
                session.game_play.game().current_round()
            );
            for _ in 0..count {
                let command = tokens.command()?;
                session.execute(&command, out)?;
            }
            let winner = session.game_play.determine_winner_and_go_next_round();
            writeln!(out, "{winner} won")?;
        }

        Ok(session.game_play)
    }

    fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> Result<(), CliError> {
        self.game_play.set_round_time(command.time());

        match command {
            Command::AddUser { name, side, .. } => {
                let player = self.game_play.create_player(name, *side)?;
                match self.game_play.add_player(player) {
                    Ok(()) => writeln!(out, "this user added to {side}")?,
                    Err(GameError::PlayerAlreadyOnTeam(_) | GameError::PlayerOnOpposingTeam(_)) => {
                        writeln!(out, "you are already in this game")?;
                    }
                    Err(GameError::TeamFull(_)) => writeln!(out, "this team is full")?,
                    Err(e) => return Err(e.into()),
                }
            }
            Command::GetHealth { name, .. } => match self.game_play.get_hp(name) {
                Ok(hp) => writeln!(out, "{hp}")?,
                Err(GameError::PlayerNotFound(_)) => writeln!(out, "invalid username")?,
                Err(e) => return Err(e.into()),
            },
            Command::GetMoney { name, .. } => match self.game_play.get_money(name) {
                Ok(money) => writeln!(out, "{money}")?,
                Err(GameError::PlayerNotFound(_)) => writeln!(out, "invalid username")?,
                Err(e) => return Err(e.into()),
            },
            Command::Buy { name, weapon, .. } => {
                let weapon = self.catalog.try_get(weapon);
                match self.game_play.buy_weapon(name, weapon) {
                    Ok(()) => writeln!(out, "I hope you can use it")?,
                    Err(GameError::PlayerNotFound(_)) => writeln!(out, "invalid username")?,
                    Err(GameError::ActionFromDeadPlayer) => writeln!(out, "deads can not buy")?,
                    Err(GameError::ActionAtIllegalTime) => writeln!(out, "you are out of time")?,
                    Err(GameError::NullReference(_) | GameError::WeaponNotAvailable(_)) => {
                        writeln!(out, "invalid category gun")?;
                    }
                    Err(GameError::WeaponAlreadyEquipped(kind)) => {
                        writeln!(out, "you have a {}", kind_token(kind))?;
                    }
                    Err(GameError::InsufficientFunds { .. }) => writeln!(out, "no enough money")?,
                    Err(e) => return Err(e.into()),
                }
            }
            Command::Tap {
                attacker,
                attacked,
                kind,
                ..
            } => match self.game_play.attack_occurred(attacker, attacked, *kind) {
                Ok(_) => writeln!(out, "nice shot")?,
                Err(GameError::PlayerNotFound(_)) => writeln!(out, "invalid username")?,
                Err(GameError::ActionFromDeadPlayer) => writeln!(out, "attacker is dead")?,
                Err(GameError::AttackDeadPlayer) => writeln!(out, "attacked is dead")?,
                Err(GameError::WeaponNotEquipped(_)) => writeln!(out, "no such gun")?,
                Err(GameError::FriendlyFire) => writeln!(out, "friendly fire")?,
                Err(e) => return Err(e.into()),
            },
            Command::ScoreBoard { .. } => output::write_scoreboard(out, &self.game_play)?,
        }

        Ok(())
    }
}

/// Inverse of the `TAP` weapon kind vocabulary.
const fn kind_token(kind: WeaponKind) -> &'static str {
    match kind {
        WeaponKind::Melee => "knife",
        WeaponKind::Pistol => "pistol",
        WeaponKind::Heavy => "heavy",
    }
}
