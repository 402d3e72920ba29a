//! Scoreboard and end-of-game report rendering.

use std::io::Write;

use defuse::{GamePlay, ScoreboardRow, Side};
use serde::Serialize;

use super::CliError;

/// Write both scoreboards, counter-terrorists first, each ranked from 1.
pub(super) fn write_scoreboard<W: Write>(out: &mut W, game_play: &GamePlay) -> std::io::Result<()> {
    for side in Side::BOTH {
        writeln!(out, "{side}-Players:")?;
        for (rank, player) in game_play.get_scoreboard(side).iter().enumerate() {
            writeln!(
                out,
                "{} {} {} {}",
                rank + 1,
                player.name(),
                player.kills(),
                player.deaths()
            )?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Summary {
    rounds: u32,
    counter_terrorists: Vec<ScoreboardRow>,
    terrorists: Vec<ScoreboardRow>,
}

/// Final standings as pretty-printed JSON.
pub(super) fn json_summary(game_play: &GamePlay) -> Result<String, CliError> {
    let summary = Summary {
        rounds: game_play.game().rounds(),
        counter_terrorists: game_play.scoreboard_rows(Side::CounterTerrorist),
        terrorists: game_play.scoreboard_rows(Side::Terrorist),
    };
    serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::new(format!("Failed to serialize summary: {e}")))
}
