pub mod preferences;
pub mod tab;
pub mod ui;
