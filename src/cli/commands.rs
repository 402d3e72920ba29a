//! Parsing of the line-oriented session input.
//!
//! The input is a whitespace separated token stream:
//!
//! ```text
//! <rounds>
//! ROUND <n>
//! <n commands>
//! ROUND <n>
//! ...
//! ```

use defuse::{Side, WeaponKind};

use super::CliError;

/// One action read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Command {
    /// `ADD-USER <name> <side> <time>`
    AddUser { name: String, side: Side, time: u64 },
    /// `GET-HEALTH <name> <time>`
    GetHealth { name: String, time: u64 },
    /// `GET-MONEY <name> <time>`
    GetMoney { name: String, time: u64 },
    /// `BUY <name> <weapon> <time>`
    Buy { name: String, weapon: String, time: u64 },
    /// `TAP <attacker> <attacked> <kind> <time>`
    Tap {
        attacker: String,
        attacked: String,
        kind: WeaponKind,
        time: u64,
    },
    /// `SCORE-BOARD <time>`
    ScoreBoard { time: u64 },
}

impl Command {
    /// Round time carried by the command.
    pub(super) const fn time(&self) -> u64 {
        match self {
            Command::AddUser { time, .. }
            | Command::GetHealth { time, .. }
            | Command::GetMoney { time, .. }
            | Command::Buy { time, .. }
            | Command::Tap { time, .. }
            | Command::ScoreBoard { time } => *time,
        }
    }
}

/// Cursor over the whitespace separated input tokens.
#[derive(Debug)]
pub(super) struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    /// Next token, naming what was expected if the input is exhausted.
    pub(super) fn expect(&mut self, what: &str) -> Result<&'a str, CliError> {
        self.inner
            .next()
            .ok_or_else(|| CliError::new(format!("Unexpected end of input, expected {what}")))
    }

    /// Next token parsed as a number.
    pub(super) fn number<T: std::str::FromStr>(&mut self, what: &str) -> Result<T, CliError> {
        let token = self.expect(what)?;
        token
            .parse()
            .map_err(|_| CliError::new(format!("Invalid {what}: `{token}`")))
    }

    /// Read a `ROUND <n>` header and return `n`.
    pub(super) fn round_header(&mut self) -> Result<usize, CliError> {
        let keyword = self.expect("ROUND header")?;
        if keyword != "ROUND" {
            return Err(CliError::new(format!("Expected ROUND header, got `{keyword}`")));
        }
        self.number("command count")
    }

    /// Read one full command.
    pub(super) fn command(&mut self) -> Result<Command, CliError> {
        let keyword = self.expect("command")?;
        let command = match keyword {
            "ADD-USER" => Command::AddUser {
                name: self.expect("player name")?.to_string(),
                side: parse_side(self.expect("side")?)?,
                time: parse_time(self.expect("time")?)?,
            },
            "GET-HEALTH" => Command::GetHealth {
                name: self.expect("player name")?.to_string(),
                time: parse_time(self.expect("time")?)?,
            },
            "GET-MONEY" => Command::GetMoney {
                name: self.expect("player name")?.to_string(),
                time: parse_time(self.expect("time")?)?,
            },
            "BUY" => Command::Buy {
                name: self.expect("player name")?.to_string(),
                weapon: self.expect("weapon name")?.to_string(),
                time: parse_time(self.expect("time")?)?,
            },
            "TAP" => Command::Tap {
                attacker: self.expect("attacker name")?.to_string(),
                attacked: self.expect("attacked name")?.to_string(),
                kind: parse_weapon_kind(self.expect("weapon kind")?)?,
                time: parse_time(self.expect("time")?)?,
            },
            "SCORE-BOARD" => Command::ScoreBoard {
                time: parse_time(self.expect("time")?)?,
            },
            other => {
                return Err(CliError::new(format!(
                    "Unknown command `{other}`, expected one of: \
                     ADD-USER, GET-HEALTH, GET-MONEY, BUY, TAP, SCORE-BOARD"
                )));
            }
        };
        Ok(command)
    }
}

/// Parse `mm:ss:mmm` into milliseconds.
pub(super) fn parse_time(token: &str) -> Result<u64, CliError> {
    let invalid = || CliError::new(format!("Invalid time `{token}`, expected mm:ss:mmm"));

    let mut parts = token.split(':');
    let (Some(minutes), Some(seconds), Some(millis), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let field = |digits: &str, width: usize| -> Result<u64, CliError> {
        if digits.len() != width || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        digits.parse().map_err(|_| invalid())
    };

    let minutes = field(minutes, 2)?;
    let seconds = field(seconds, 2)?;
    let millis = field(millis, 3)?;

    Ok((minutes * 60 + seconds) * 1000 + millis)
}

/// Parse `Counter-Terrorist` or `Terrorist`.
pub(super) fn parse_side(token: &str) -> Result<Side, CliError> {
    match token {
        "Counter-Terrorist" => Ok(Side::CounterTerrorist),
        "Terrorist" => Ok(Side::Terrorist),
        other => Err(CliError::new(format!(
            "Invalid side `{other}`, expected one of: Counter-Terrorist, Terrorist"
        ))),
    }
}

/// Parse `knife`, `pistol` or `heavy`.
pub(super) fn parse_weapon_kind(token: &str) -> Result<WeaponKind, CliError> {
    match token {
        "knife" => Ok(WeaponKind::Melee),
        "pistol" => Ok(WeaponKind::Pistol),
        "heavy" => Ok(WeaponKind::Heavy),
        other => Err(CliError::new(format!(
            "Invalid weapon kind `{other}`, expected one of: knife, pistol, heavy"
        ))),
    }
}
