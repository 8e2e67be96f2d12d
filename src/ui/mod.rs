//! Panel-side models: the MVI form reducer and the table surface contract.

pub mod mvi;
pub mod settings;
pub mod table;
