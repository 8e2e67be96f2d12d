mod intent;
mod reducer;
mod state;
mod tracked;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::SettingsFormState;
pub use tracked::Tracked;
