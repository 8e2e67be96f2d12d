//! What an editable table widget needs from its model.

use crate::intervals::{CellValue, Field, IntervalCollection};

/// Kind of value a column holds, so the surface can pick an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Spinner / number field.
    Integer,
    /// Dropdown over [`Unit::all`](crate::intervals::Unit::all).
    Unit,
}

/// Row/column view of a model, addressed by plain indices.
pub trait TableModel {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    fn column_name(&self, column: usize) -> Option<&'static str>;

    fn column_kind(&self, column: usize) -> Option<ColumnKind>;

    fn is_cell_editable(&self, row: usize, column: usize) -> bool;

    fn value_at(&self, row: usize, column: usize) -> Option<CellValue>;

    /// Returns whether the model changed. Unknown cells are ignored.
    fn set_value_at(&mut self, row: usize, column: usize, value: CellValue) -> bool;
}

impl TableModel for IntervalCollection {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn column_count(&self) -> usize {
        Field::ALL.len()
    }

    fn column_name(&self, column: usize) -> Option<&'static str> {
        Field::from_index(column).map(Field::name)
    }

    fn column_kind(&self, column: usize) -> Option<ColumnKind> {
        Field::from_index(column).map(|field| match field {
            Field::Magnitude => ColumnKind::Integer,
            Field::Unit => ColumnKind::Unit,
        })
    }

    fn is_cell_editable(&self, _row: usize, _column: usize) -> bool {
        true
    }

    fn value_at(&self, row: usize, column: usize) -> Option<CellValue> {
        let field = Field::from_index(column)?;
        self.get(row)?.field(field)
    }

    fn set_value_at(&mut self, row: usize, column: usize, value: CellValue) -> bool {
        match Field::from_index(column) {
            Some(field) => self.set_field(row, field, value),
            None => {
                tracing::debug!(column, "Edit ignored: no such column");
                false
            }
        }
    }
}
