pub mod loader;
pub mod store;
pub mod types;

pub use loader::ConfigError;
pub use store::{ConfigStore, MemoryStore, SettingsStore};
pub use types::{Config, ProjectSettings};
