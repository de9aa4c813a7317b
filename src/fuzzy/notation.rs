use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FormatError;

/// Rendering style for elapsed-time phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Single-letter units: "n", "1m", "17m", "1d", "1w".
    Twitter,
    /// Abbreviated words: "now", "1min", "17mins", "1dy", "1wk".
    Short,
    /// Full phrases: "just now", "1 minute ago", "yesterday".
    #[default]
    Long,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Twitter, Notation::Short, Notation::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            Notation::Twitter => "twitter",
            Notation::Short => "short",
            Notation::Long => "long",
        }
    }

    /// Column of this notation in the vocabulary table.
    pub(crate) fn column(self) -> usize {
        match self {
            Notation::Long => 0,
            Notation::Short => 1,
            Notation::Twitter => 2,
        }
    }

    /// Twitter and Short both use abbreviated month names.
    pub(crate) fn abbreviates_months(self) -> bool {
        matches!(self, Notation::Twitter | Notation::Short)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(Notation::Twitter),
            "short" => Ok(Notation::Short),
            "long" => Ok(Notation::Long),
            _ => Err(FormatError::InvalidNotation(s.to_string())),
        }
    }
}
