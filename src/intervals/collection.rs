use std::collections::BTreeSet;

use crate::intervals::error::IntervalError;
use crate::intervals::interval::{CellValue, Field, Interval};

/// Ordered, editable interval rows plus the last committed copy of them.
///
/// Edits only touch the working rows. [`apply`](Self::apply) makes them the
/// new baseline, [`reset`](Self::reset) throws them away. Order matters and
/// duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntervalCollection {
    rows: Vec<Interval>,
    committed: Vec<Interval>,
}

impl IntervalCollection {
    /// Build from stored seconds, parsing each value on its own.
    pub fn from_seconds<I>(values: I) -> Result<Self, IntervalError>
    where
        I: IntoIterator<Item = i64>,
    {
        let rows = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                u64::try_from(value)
                    .map(Interval::parse)
                    .map_err(|_| IntervalError::Negative { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_rows(rows))
    }

    /// Start a session from already-shaped rows. The rows are the baseline.
    pub fn from_rows(rows: Vec<Interval>) -> Self {
        Self {
            committed: rows.clone(),
            rows,
        }
    }

    /// Working rows, in display order.
    pub fn rows(&self) -> &[Interval] {
        &self.rows
    }

    /// Rows as of the last apply (or load).
    pub fn committed(&self) -> &[Interval] {
        &self.committed
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Interval> {
        self.rows.get(row)
    }

    /// Export the working rows as store seconds, order and duplicates kept.
    pub fn to_seconds(&self) -> Result<Vec<i64>, IntervalError> {
        self.rows.iter().map(store_seconds).collect()
    }

    /// True when the working rows differ from the committed ones.
    ///
    /// Compares row by row with structural equality, so swapping
    /// `60 Minutes` for `1 Hours` counts as a change.
    pub fn is_modified(&self) -> bool {
        self.rows != self.committed
    }

    /// Commit the working rows and return them as seconds.
    ///
    /// Nothing is committed if any row fails to convert.
    pub fn apply(&mut self) -> Result<Vec<i64>, IntervalError> {
        let seconds = self.to_seconds()?;
        self.committed = self.rows.clone();
        tracing::debug!(rows = self.rows.len(), "Interval rows committed");
        Ok(seconds)
    }

    /// Discard unsaved edits.
    pub fn reset(&mut self) {
        self.rows = self.committed.clone();
        tracing::debug!(rows = self.rows.len(), "Interval rows reset");
    }

    /// Edit one cell. Unknown rows and wrong-kind values are ignored.
    pub fn set_field(&mut self, row: usize, field: Field, value: CellValue) -> bool {
        let Some(interval) = self.rows.get_mut(row) else {
            tracing::debug!(row, "Edit ignored: no such row");
            return false;
        };

        let applied = interval.set_field(field, value);
        if !applied {
            tracing::debug!(row, ?field, "Edit ignored: value does not fit the column");
        }
        applied
    }

    /// Append a row at the end.
    pub fn insert_row(&mut self, interval: Interval) {
        self.rows.push(interval);
    }

    /// Append the default `1 Seconds` row.
    pub fn add_default_row(&mut self) {
        self.insert_row(Interval::default());
    }

    /// Remove rows by their current positions.
    ///
    /// Positions are removed from the highest down so that earlier removals
    /// cannot shift rows still waiting to be removed. Duplicates count once;
    /// out-of-range positions are skipped. Returns how many rows went.
    pub fn remove_rows<I>(&mut self, indices: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let indices: BTreeSet<usize> = indices.into_iter().collect();
        let mut removed = 0;

        for index in indices.into_iter().rev() {
            if index < self.rows.len() {
                self.rows.remove(index);
                removed += 1;
            } else {
                tracing::warn!(index, rows = self.rows.len(), "Skipping removal of missing row");
            }
        }

        removed
    }
}

fn store_seconds(interval: &Interval) -> Result<i64, IntervalError> {
    let seconds = interval.to_seconds()?;
    i64::try_from(seconds).map_err(|_| IntervalError::Overflow {
        magnitude: interval.magnitude,
        unit: interval.unit,
        bits: i64::BITS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intervals::unit::Unit;

    fn sample() -> IntervalCollection {
        IntervalCollection::from_seconds([3600, 50, 420_999]).unwrap()
    }

    #[test]
    fn loads_clean() {
        let collection = sample();
        assert!(!collection.is_modified());
        assert_eq!(
            collection.rows(),
            &[
                Interval::new(1, Unit::Hours),
                Interval::new(50, Unit::Seconds),
                Interval::new(420_999, Unit::Seconds),
            ]
        );
    }

    #[test]
    fn negative_seconds_fail_fast() {
        let err = IntervalCollection::from_seconds([60, -5]).unwrap_err();
        assert_eq!(err, IntervalError::Negative { index: 1, value: -5 });
    }

    #[test]
    fn edit_then_apply() {
        let mut collection = sample();
        assert!(collection.set_field(0, Field::Magnitude, CellValue::Integer(20)));
        assert!(collection.is_modified());

        let exported = collection.apply().unwrap();
        assert_eq!(exported, vec![72_000, 50, 420_999]);
        assert!(!collection.is_modified());
        assert_eq!(collection.committed(), collection.rows());
    }

    #[test]
    fn edits_after_apply_do_not_touch_snapshot() {
        let mut collection = sample();
        collection.apply().unwrap();
        collection.set_field(1, Field::Unit, CellValue::Unit(Unit::Days));

        assert_eq!(collection.committed()[1], Interval::new(50, Unit::Seconds));
        assert!(collection.is_modified());
    }

    #[test]
    fn reset_restores_committed() {
        let mut collection = sample();
        let before = collection.rows().to_vec();

        collection.set_field(0, Field::Magnitude, CellValue::Integer(20));
        collection.add_default_row();
        collection.reset();

        assert_eq!(collection.rows(), before.as_slice());
        assert!(!collection.is_modified());
    }

    #[test]
    fn unit_swap_with_same_seconds_is_a_change() {
        let mut collection = IntervalCollection::from_seconds([3600]).unwrap();
        collection.set_field(0, Field::Magnitude, CellValue::Integer(60));
        collection.set_field(0, Field::Unit, CellValue::Unit(Unit::Minutes));

        assert_eq!(collection.to_seconds().unwrap(), vec![3600]);
        assert!(collection.is_modified());
    }

    #[test]
    fn rejected_edit_leaves_collection_clean() {
        let mut collection = sample();
        assert!(!collection.set_field(0, Field::Magnitude, CellValue::Text("abc".into())));
        assert!(!collection.set_field(9, Field::Magnitude, CellValue::Integer(1)));
        assert!(!collection.is_modified());
    }

    #[test]
    fn remove_rows_in_any_submission_order() {
        for indices in [vec![0, 2], vec![2, 0]] {
            let mut collection = sample();
            assert_eq!(collection.remove_rows(indices), 2);
            assert_eq!(collection.rows(), &[Interval::new(50, Unit::Seconds)]);
        }
    }

    #[test]
    fn remove_rows_skips_missing_and_duplicates() {
        let mut collection = sample();
        assert_eq!(collection.remove_rows([1, 1, 7]), 1);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn insert_appends_default() {
        let mut collection = sample();
        collection.add_default_row();
        assert_eq!(collection.len(), 4);
        assert_eq!(collection.get(3), Some(&Interval::new(1, Unit::Seconds)));
        assert!(collection.is_modified());
    }

    #[test]
    fn removing_added_row_is_clean_again() {
        let mut collection = sample();
        collection.add_default_row();
        collection.remove_rows([3]);
        assert!(!collection.is_modified());
    }

    #[test]
    fn apply_overflow_keeps_snapshot() {
        let mut collection = sample();
        collection.insert_row(Interval::new(u64::MAX, Unit::Seconds));

        let err = collection.apply().unwrap_err();
        assert_eq!(
            err,
            IntervalError::Overflow {
                magnitude: u64::MAX,
                unit: Unit::Seconds,
                bits: 64,
            }
        );
        assert!(collection.is_modified());
        assert_eq!(collection.committed().len(), 3);
    }
}
