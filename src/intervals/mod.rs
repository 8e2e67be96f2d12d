//! Interval model behind the metric-interval settings table.
//!
//! Stored settings are a flat list of seconds. The table shows each entry as
//! a magnitude and a [`Unit`], and [`IntervalCollection`] tracks edits
//! against the last committed list.

mod collection;
mod error;
mod interval;
mod unit;

pub use collection::IntervalCollection;
pub use error::{IntervalError, UnknownUnit};
pub use interval::{CellValue, Field, Interval};
pub use unit::Unit;
