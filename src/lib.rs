//! Metric-interval settings for the Hyperion IDE plugin.
//!
//! - [`intervals`]: seconds <-> `(magnitude, unit)` conversion and the
//!   dirty-tracked row collection
//! - [`ui`]: the MVI form reducer and the table surface contract
//! - [`panel`]: the settings page tying the form to a [`config::SettingsStore`]
//! - [`config`]: TOML-backed settings storage

pub mod config;
pub mod intervals;
pub mod logging;
pub mod panel;
pub mod ui;
