//! Zone identifiers
//!
//! A zone is a coarse carrier-specific distance tier between origin and
//! destination, used together with weight as the key into a rate table.
//! Rate tables and the distance estimator only ever produce the nine
//! standard bands, so the type is a closed enum rather than an open
//! string key; malformed zone tokens in source tables are caught at load
//! time instead of silently creating unreachable columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine standard zone bands ("1" through "9").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Zone {
    /// All zones in ascending order.
    pub const ALL: [Zone; 9] = [
        Zone::One,
        Zone::Two,
        Zone::Three,
        Zone::Four,
        Zone::Five,
        Zone::Six,
        Zone::Seven,
        Zone::Eight,
        Zone::Nine,
    ];

    /// Parse a zone token.
    ///
    /// Accepts the bare digit (`"5"`) with surrounding whitespace, and an
    /// optional case-insensitive `Zone` prefix as found in some table
    /// headers (`"Zone 5"`, `"zone5"`). Anything else, including raw
    /// transit-time tokens handed back by a degraded external zone API,
    /// returns `None`. Lookups treat an unparsable token as a zero rate,
    /// never an error.
    ///
    /// # Example
    /// ```
    /// use rate_comparison_core_rs::Zone;
    ///
    /// assert_eq!(Zone::parse_token("5"), Some(Zone::Five));
    /// assert_eq!(Zone::parse_token(" Zone 2 "), Some(Zone::Two));
    /// assert_eq!(Zone::parse_token("TWO_DAYS"), None);
    /// ```
    pub fn parse_token(token: &str) -> Option<Zone> {
        let trimmed = token.trim();
        let digits = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("zone") => trimmed[4..].trim_start(),
            _ => trimmed,
        };

        match digits {
            "1" => Some(Zone::One),
            "2" => Some(Zone::Two),
            "3" => Some(Zone::Three),
            "4" => Some(Zone::Four),
            "5" => Some(Zone::Five),
            "6" => Some(Zone::Six),
            "7" => Some(Zone::Seven),
            "8" => Some(Zone::Eight),
            "9" => Some(Zone::Nine),
            _ => None,
        }
    }

    /// The zone digit as a string token ("1".."9").
    pub fn as_token(&self) -> &'static str {
        match self {
            Zone::One => "1",
            Zone::Two => "2",
            Zone::Three => "3",
            Zone::Four => "4",
            Zone::Five => "5",
            Zone::Six => "6",
            Zone::Seven => "7",
            Zone::Eight => "8",
            Zone::Nine => "9",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
