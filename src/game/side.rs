//! Teams and team query masks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The side a player fights for.
///
/// A player always belongs to exactly one side. Queries that span both sides
/// use [`SideMask`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The defending side. Wins rounds that end with nobody alive.
    #[serde(rename = "counter_terrorist")]
    CounterTerrorist,
    /// The attacking side.
    #[serde(rename = "terrorist")]
    Terrorist,
}

impl Side {
    /// Both sides, counter-terrorists first.
    pub const BOTH: [Side; 2] = [Side::CounterTerrorist, Side::Terrorist];

    /// Bit value of this side inside a [`SideMask`].
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Side::CounterTerrorist => 1,
            Side::Terrorist => 2,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::CounterTerrorist => Side::Terrorist,
            Side::Terrorist => Side::CounterTerrorist,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::CounterTerrorist => write!(f, "Counter-Terrorist"),
            Side::Terrorist => write!(f, "Terrorist"),
        }
    }
}

/// A set of sides used for filtering players and weapon eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SideMask(u8);

impl SideMask {
    /// Counter-terrorists only.
    pub const COUNTER_TERRORIST: SideMask = SideMask(1);
    /// Terrorists only.
    pub const TERRORIST: SideMask = SideMask(2);
    /// Both sides.
    pub const ALL: SideMask = SideMask(3);

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every side in `other` is also in `self`.
    #[must_use]
    pub const fn contains(self, other: SideMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether `side` is part of this mask.
    #[must_use]
    pub const fn includes(self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }
}

impl From<Side> for SideMask {
    fn from(side: Side) -> Self {
        SideMask(side.bit())
    }
}

impl TryFrom<String> for SideMask {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "counter_terrorist" => Ok(SideMask::COUNTER_TERRORIST),
            "terrorist" => Ok(SideMask::TERRORIST),
            "all" => Ok(SideMask::ALL),
            other => Err(format!(
                "unknown side `{other}`, expected one of: counter_terrorist, terrorist, all"
            )),
        }
    }
}

impl From<SideMask> for String {
    fn from(mask: SideMask) -> Self {
        match mask {
            SideMask::COUNTER_TERRORIST => "counter_terrorist".to_string(),
            SideMask::TERRORIST => "terrorist".to_string(),
            _ => "all".to_string(),
        }
    }
}
