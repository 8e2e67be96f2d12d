//! The "Hyperion" project settings page.
//!
//! Glues the pure form reducer to a [`SettingsStore`]: loads once, forwards
//! edits, and saves on apply.

use thiserror::Error;

use crate::config::{ConfigError, SettingsStore};
use crate::intervals::IntervalError;
use crate::ui::mvi::Reducer;
use crate::ui::settings::{SettingsFormState, SettingsIntent, SettingsReducer};

/// Stable id of the settings page.
pub const ID: &str = "hyperion.settings";

/// Name shown in the settings tree.
pub const DISPLAY_NAME: &str = "Hyperion";

/// Search entries for the page as `(label text, hit)`.
pub fn searchable_options() -> &'static [(&'static str, &'static str)] {
    &[
        ("API Address:", "API Address"),
        ("Project:", "Project"),
        ("Displayed metric intervals:", "Metric intervals"),
    ]
}

#[derive(Debug, Error)]
pub enum PanelError {
    #[error(transparent)]
    Interval(#[from] IntervalError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct SettingsPanel<S> {
    store: S,
    state: SettingsFormState,
}

impl<S: SettingsStore> SettingsPanel<S> {
    /// Open the page on the store's current settings.
    pub fn new(store: S) -> Result<Self, PanelError> {
        let state = SettingsFormState::from_settings(store.state())?;
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &SettingsFormState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one user action through the reducer.
    pub fn dispatch(&mut self, intent: SettingsIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = SettingsReducer::reduce(state, intent);
    }

    pub fn is_modified(&self) -> bool {
        self.state.is_modified()
    }

    /// Save the edited settings and make them the new baseline.
    ///
    /// If conversion or the store fails, the panel keeps its edits and
    /// stays modified.
    pub fn apply(&mut self) -> Result<(), PanelError> {
        let mut next = self.state.clone();
        let settings = next.commit()?;
        self.store.save(settings)?;
        self.state = next;

        tracing::debug!(
            intervals = self.state.intervals.len(),
            "Settings page applied"
        );
        Ok(())
    }

    /// Discard edits made since the last load or apply.
    pub fn reset(&mut self) {
        self.dispatch(SettingsIntent::Reset);
    }
}
