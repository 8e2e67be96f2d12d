use thiserror::Error;

use crate::intervals::unit::Unit;

/// Errors raised while converting between seconds and intervals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// The store handed over a negative duration. No unit encodes it.
    #[error("Invalid interval at row {index}: {value} is negative")]
    Negative { index: usize, value: i64 },

    /// magnitude * unit does not fit the target integer width.
    #[error("Interval {magnitude} {unit} does not fit in {bits}-bit seconds")]
    Overflow {
        magnitude: u64,
        unit: Unit,
        bits: u32,
    },
}

/// Returned when a string names no known unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown unit '{0}'")]
pub struct UnknownUnit(pub String);
