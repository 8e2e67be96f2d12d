use crate::config::ProjectSettings;
use crate::intervals::{IntervalCollection, IntervalError};
use crate::ui::mvi::UiState;
use crate::ui::settings::tracked::Tracked;

/// Everything the settings panel edits, each part with its own baseline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsFormState {
    pub intervals: IntervalCollection,
    pub address: Tracked<String>,
    pub project: Tracked<String>,
}

impl UiState for SettingsFormState {}

impl SettingsFormState {
    /// Fresh, unmodified state from stored settings.
    pub fn from_settings(settings: &ProjectSettings) -> Result<Self, IntervalError> {
        Ok(Self {
            intervals: IntervalCollection::from_seconds(settings.intervals.iter().copied())?,
            address: Tracked::new(settings.address.clone()),
            project: Tracked::new(settings.project.clone()),
        })
    }

    /// Gate for the Apply/Reset controls.
    pub fn is_modified(&self) -> bool {
        self.intervals.is_modified() || self.address.is_modified() || self.project.is_modified()
    }

    /// Advance every baseline and return what to store.
    ///
    /// On error nothing is committed.
    pub fn commit(&mut self) -> Result<ProjectSettings, IntervalError> {
        let intervals = self.intervals.apply()?;
        self.address.commit();
        self.project.commit();

        Ok(ProjectSettings {
            address: self.address.get().clone(),
            project: self.project.get().clone(),
            intervals,
        })
    }

    pub fn reset(&mut self) {
        self.intervals.reset();
        self.address.reset();
        self.project.reset();
    }
}
