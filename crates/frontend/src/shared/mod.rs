pub mod components;
pub mod config;
pub mod error;
pub mod icons;
pub mod list_utils;
pub mod selection;
