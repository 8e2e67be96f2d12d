use crate::config::ProjectSettings;
use crate::intervals::{CellValue, Field};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// Replace the whole form with freshly stored settings.
    Load { settings: ProjectSettings },
    EditCell {
        row: usize,
        field: Field,
        value: CellValue,
    },
    /// "+" button: append the default row.
    AddRow,
    /// "-" button with the table's current selection, in any order.
    RemoveRows { indices: Vec<usize> },
    SetAddress(String),
    SetProject(String),
    /// Throw away unsaved edits.
    Reset,
}

impl Intent for SettingsIntent {}
