//! Note color palette

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidColorError;

/// Card colors a note can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Default,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl NoteColor {
    pub const ALL: [NoteColor; 8] = [
        Self::Default,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Pink,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }
}

impl FromStr for NoteColor {
    type Err = InvalidColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| InvalidColorError { input: s.to_string() })
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_eight_colors() {
        assert_eq!(NoteColor::ALL.len(), 8);
        assert_eq!(NoteColor::default(), NoteColor::Default);
    }

    #[test]
    fn parse_round_trips_through_display() {
        for color in NoteColor::ALL {
            assert_eq!(color.to_string().parse::<NoteColor>().unwrap(), color);
        }
    }

    #[test]
    fn parse_invalid() {
        assert!("teal".parse::<NoteColor>().is_err());
    }
}
