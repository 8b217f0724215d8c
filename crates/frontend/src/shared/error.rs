use thiserror::Error;

/// Ошибки списка площадок и его настроек
#[derive(Debug, Error)]
pub enum SiteListError {
    #[error("Invalid page size: {0} (allowed: {1:?})")]
    InvalidPageSize(usize, Vec<usize>),

    #[error("Duplicate site identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}
