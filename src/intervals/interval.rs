use std::fmt;

use crate::intervals::error::IntervalError;
use crate::intervals::unit::Unit;

/// Units tried by [`Interval::parse`], coarsest first.
const PARSE_ORDER: [Unit; 4] = [Unit::Weeks, Unit::Days, Unit::Hours, Unit::Minutes];

/// A duration as the user edits it: a magnitude in some [`Unit`].
///
/// Equality is structural. `60 Minutes` and `1 Hours` denote the same number
/// of seconds but are different intervals, which is what makes a unit change
/// count as a modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub magnitude: u64,
    pub unit: Unit,
}

impl Interval {
    pub const fn new(magnitude: u64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Encode a number of seconds using the coarsest unit that divides it
    /// exactly, falling back to seconds.
    ///
    /// - `parse(3600)` is `1 Hours`
    /// - `parse(3660)` is `61 Minutes`
    /// - `parse(61)` is `61 Seconds`
    /// - `parse(0)` is `0 Seconds`
    pub fn parse(total_seconds: u64) -> Self {
        // Zero is divisible by everything; keep it in the finest unit.
        if total_seconds == 0 {
            return Self::new(0, Unit::Seconds);
        }

        PARSE_ORDER
            .into_iter()
            .find(|unit| total_seconds % unit.seconds_per_unit() == 0)
            .map(|unit| Self::new(total_seconds / unit.seconds_per_unit(), unit))
            .unwrap_or(Self::new(total_seconds, Unit::Seconds))
    }

    /// Total length in seconds. Fails instead of wrapping.
    pub fn to_seconds(&self) -> Result<u64, IntervalError> {
        self.magnitude
            .checked_mul(self.unit.seconds_per_unit())
            .ok_or(IntervalError::Overflow {
                magnitude: self.magnitude,
                unit: self.unit,
                bits: u64::BITS,
            })
    }

    /// Read one column of this row.
    ///
    /// `None` when the magnitude is past `i64::MAX` and no integer cell can
    /// hold it.
    pub fn field(&self, field: Field) -> Option<CellValue> {
        match field {
            Field::Magnitude => i64::try_from(self.magnitude).ok().map(CellValue::Integer),
            Field::Unit => Some(CellValue::Unit(self.unit)),
        }
    }

    /// Write one column of this row.
    ///
    /// Values of the wrong kind are ignored: an editor may hand through a
    /// half-typed value and that must never fail. Returns whether the row
    /// changed.
    pub fn set_field(&mut self, field: Field, value: CellValue) -> bool {
        match (field, value) {
            (Field::Magnitude, CellValue::Integer(n)) => match u64::try_from(n) {
                Ok(magnitude) => {
                    self.magnitude = magnitude;
                    true
                }
                Err(_) => false,
            },
            (Field::Unit, CellValue::Unit(unit)) => {
                self.unit = unit;
                true
            }
            (Field::Unit, CellValue::Text(label)) => match Unit::parse_label(&label) {
                Some(unit) => {
                    self.unit = unit;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

impl Default for Interval {
    /// The row appended by "add".
    fn default() -> Self {
        Self::new(1, Unit::Seconds)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

/// Column of an interval row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Magnitude,
    Unit,
}

impl Field {
    /// Column order.
    pub const ALL: [Field; 2] = [Self::Magnitude, Self::Unit];

    pub fn index(self) -> usize {
        match self {
            Self::Magnitude => 0,
            Self::Unit => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Column header.
    pub fn name(self) -> &'static str {
        match self {
            Self::Magnitude => "Interval",
            Self::Unit => "Period",
        }
    }
}

/// A value travelling between an editable cell and the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Integer(i64),
    Unit(Unit),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_picks_coarsest_exact_unit() {
        let cases = [
            (2 * 604_800, Interval::new(2, Unit::Weeks)),
            (604_800, Interval::new(1, Unit::Weeks)),
            (8 * 86_400, Interval::new(8, Unit::Days)),
            (86_400, Interval::new(1, Unit::Days)),
            (25 * 3600, Interval::new(25, Unit::Hours)),
            (3600, Interval::new(1, Unit::Hours)),
            (3660, Interval::new(61, Unit::Minutes)),
            (60, Interval::new(1, Unit::Minutes)),
            (61, Interval::new(61, Unit::Seconds)),
            (1, Interval::new(1, Unit::Seconds)),
            (0, Interval::new(0, Unit::Seconds)),
        ];

        for (seconds, expected) in cases {
            assert_eq!(Interval::parse(seconds), expected, "parse({seconds})");
        }
    }

    #[test]
    fn parse_round_trips_through_seconds() {
        let samples = [
            0,
            1,
            59,
            60,
            61,
            3599,
            3600,
            86_399,
            86_400,
            420_999,
            2_592_000,
            u64::MAX,
        ];
        for seconds in samples {
            assert_eq!(Interval::parse(seconds).to_seconds(), Ok(seconds));
        }
    }

    #[test]
    fn each_unit_converts_to_its_multiplier() {
        for unit in Unit::ALL {
            assert_eq!(Interval::new(1, unit).to_seconds(), Ok(unit.seconds_per_unit()));
        }
    }

    #[test]
    fn million_weeks_does_not_overflow() {
        assert_eq!(
            Interval::new(1_000_000, Unit::Weeks).to_seconds(),
            Ok(604_800_000_000)
        );
    }

    #[test]
    fn overflow_is_reported() {
        let err = Interval::new(u64::MAX, Unit::Minutes).to_seconds().unwrap_err();
        assert!(matches!(err, IntervalError::Overflow { unit: Unit::Minutes, .. }));
    }

    #[test]
    fn equality_is_structural() {
        let minutes = Interval::new(60, Unit::Minutes);
        let hours = Interval::new(1, Unit::Hours);
        assert_eq!(minutes.to_seconds(), hours.to_seconds());
        assert_ne!(minutes, hours);
    }

    #[test]
    fn field_access() {
        let mut row = Interval::new(1, Unit::Seconds);
        assert_eq!(row.field(Field::Magnitude), Some(CellValue::Integer(1)));
        assert_eq!(row.field(Field::Unit), Some(CellValue::Unit(Unit::Seconds)));

        assert!(row.set_field(Field::Magnitude, CellValue::Integer(5)));
        assert_eq!(row.magnitude, 5);

        assert!(row.set_field(Field::Unit, CellValue::Unit(Unit::Weeks)));
        assert_eq!(row.unit, Unit::Weeks);
    }

    #[test]
    fn wrong_kind_is_ignored() {
        let mut row = Interval::new(5, Unit::Weeks);

        assert!(!row.set_field(
            Field::Magnitude,
            CellValue::Text("this should do nothing".into())
        ));
        assert!(!row.set_field(Field::Magnitude, CellValue::Unit(Unit::Hours)));
        assert!(!row.set_field(Field::Magnitude, CellValue::Integer(-1)));
        assert!(!row.set_field(Field::Unit, CellValue::Integer(42)));
        assert!(!row.set_field(Field::Unit, CellValue::Text("Months".into())));

        assert_eq!(row, Interval::new(5, Unit::Weeks));
    }

    #[test]
    fn magnitude_past_i64_is_unreadable_not_clamped() {
        let row = Interval::new(i64::MAX as u64 + 10, Unit::Seconds);
        assert_eq!(row.field(Field::Magnitude), None);
        assert_eq!(row.field(Field::Unit), Some(CellValue::Unit(Unit::Seconds)));

        let edge = Interval::new(i64::MAX as u64, Unit::Seconds);
        assert_eq!(edge.field(Field::Magnitude), Some(CellValue::Integer(i64::MAX)));
    }

    #[test]
    fn unit_label_text_is_accepted() {
        let mut row = Interval::default();
        assert!(row.set_field(Field::Unit, CellValue::Text("days".into())));
        assert_eq!(row, Interval::new(1, Unit::Days));
    }

    #[test]
    fn copies_are_independent() {
        let original = Interval::new(1, Unit::Weeks);
        let mut copy = original;
        copy.set_field(Field::Magnitude, CellValue::Integer(2));
        assert_ne!(original, copy);

        let mut copy = original;
        copy.set_field(Field::Unit, CellValue::Unit(Unit::Hours));
        assert_ne!(original, copy);
    }

    #[test]
    fn columns_round_trip_by_index() {
        for field in Field::ALL {
            assert_eq!(Field::from_index(field.index()), Some(field));
        }
        assert_eq!(Field::from_index(2), None);
        assert_eq!(Field::Magnitude.name(), "Interval");
    }

    #[test]
    fn display() {
        assert_eq!(Interval::new(2, Unit::Hours).to_string(), "2 Hours");
    }
}
