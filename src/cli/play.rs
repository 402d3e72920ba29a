//! Play command implementation.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::output::{json_summary, write_scoreboard};
use super::session::Session;
use super::{CliError, SummaryFormat, load_catalog, load_rules};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if a file cannot be loaded, the input is malformed, or
/// output cannot be written.
pub(crate) fn execute(
    input: Option<&Path>,
    config: Option<&Path>,
    catalog: Option<&Path>,
    summary: SummaryFormat,
) -> Result<(), CliError> {
    let rules = load_rules(config)?;
    let catalog = load_catalog(catalog)?;

    let text = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?,
        None => io::read_to_string(io::stdin())?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let game_play = Session::run(&text, rules, &catalog, &mut out)?;

    match summary {
        SummaryFormat::None => {}
        SummaryFormat::Text => write_scoreboard(&mut out, &game_play)?,
        SummaryFormat::Json => writeln!(out, "{}", json_summary(&game_play)?)?,
    }
    out.flush()?;

    Ok(())
}
