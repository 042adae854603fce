//! Recording duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// Default recording ceiling (60 seconds)
pub const DEFAULT_MAX_DURATION_SECS: u64 = 60;

/// Whole-second duration used for recording ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    seconds: u64,
}

impl Duration {
    pub const fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Default recording ceiling
    pub const fn default_max_duration() -> Self {
        Self::from_secs(DEFAULT_MAX_DURATION_SECS)
    }

    pub const fn as_secs(&self) -> u64 {
        self.seconds
    }

    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_secs(self.seconds)
    }

    /// A zero ceiling means "no ceiling"
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Accepts "30s", "2m", "2m30s" and "90s"; zero is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DurationParseError { input: s.to_string() };
        let input = s.trim().to_lowercase();

        let (minutes_part, seconds_part) = match input.split_once('m') {
            Some((m, rest)) => (Some(m), rest),
            None => (None, input.as_str()),
        };

        let minutes = match minutes_part {
            Some(m) if !m.is_empty() && m.bytes().all(|b| b.is_ascii_digit()) => {
                m.parse::<u64>().map_err(|_| err())?
            }
            Some(_) => return Err(err()),
            None => 0,
        };

        let seconds = if seconds_part.is_empty() {
            if minutes_part.is_none() {
                return Err(err());
            }
            0
        } else {
            let digits = seconds_part.strip_suffix('s').ok_or_else(err)?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            digits.parse::<u64>().map_err(|_| err())?
        };

        let total = minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or_else(err)?;

        if total == 0 {
            return Err(err());
        }

        Ok(Self::from_secs(total))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.seconds / 60;
        let seconds = self.seconds % 60;

        match (minutes, seconds) {
            (0, s) => write!(f, "{}s", s),
            (m, 0) => write!(f, "{}m", m),
            (m, s) => write!(f, "{}m{}s", m, s),
        }
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::default_max_duration()
    }
}
