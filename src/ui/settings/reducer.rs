use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::SettingsFormState;

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsFormState;
    type Intent = SettingsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Load { settings } => {
                return match SettingsFormState::from_settings(&settings) {
                    Ok(loaded) => loaded,
                    Err(e) => {
                        tracing::warn!("Ignoring stored settings: {}", e);
                        state
                    }
                };
            }
            SettingsIntent::EditCell { row, field, value } => {
                state.intervals.set_field(row, field, value);
            }
            SettingsIntent::AddRow => state.intervals.add_default_row(),
            SettingsIntent::RemoveRows { indices } => {
                state.intervals.remove_rows(indices);
            }
            SettingsIntent::SetAddress(address) => state.address.set(address),
            SettingsIntent::SetProject(project) => state.project.set(project),
            SettingsIntent::Reset => state.reset(),
        }
        state
    }
}
