use std::fmt;
use std::str::FromStr;

use crate::intervals::error::UnknownUnit;

/// Duration granularity an interval is expressed in.
///
/// The set is closed. There is no month unit: a month is 28 to 31 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl Unit {
    /// Display order, finest first.
    pub const ALL: [Unit; 5] = [
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Weeks,
    ];

    /// All variants for populating a selection control.
    pub fn all() -> &'static [Unit] {
        &Self::ALL
    }

    pub const fn seconds_per_unit(self) -> u64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 60 * 60,
            Self::Days => 24 * 60 * 60,
            Self::Weeks => 7 * 24 * 60 * 60,
        }
    }

    /// Label shown in the period column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Seconds => "Seconds",
            Self::Minutes => "Minutes",
            Self::Hours => "Hours",
            Self::Days => "Days",
            Self::Weeks => "Weeks",
        }
    }

    /// Parse a display label, ignoring case and surrounding whitespace.
    pub fn parse_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_strictly_increase() {
        for pair in Unit::ALL.windows(2) {
            assert!(pair[0].seconds_per_unit() < pair[1].seconds_per_unit());
        }
    }

    #[test]
    fn week_is_604800_seconds() {
        assert_eq!(Unit::Weeks.seconds_per_unit(), 604_800);
        assert_eq!(Unit::Days.seconds_per_unit(), 86_400);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(Unit::parse_label("hours"), Some(Unit::Hours));
        assert_eq!(Unit::parse_label(" WEEKS "), Some(Unit::Weeks));
        assert_eq!("Minutes".parse::<Unit>(), Ok(Unit::Minutes));
        assert_eq!(
            "Months".parse::<Unit>(),
            Err(UnknownUnit("Months".to_string()))
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Unit::Days.to_string(), "Days");
    }
}
