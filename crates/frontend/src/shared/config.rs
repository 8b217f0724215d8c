//! Конфигурация списка площадок.
//!
//! Конфиг встроен в бинарник (WASM не читает файлы) и валидируется при загрузке.

use super::error::SiteListError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub site_list: SiteListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteListConfig {
    /// Допустимые размеры страницы (в порядке показа в селекте)
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    /// Задержка имитации загрузки, мс
    pub load_delay_ms: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[site_list]
page_size_options = [5, 10, 15]
default_page_size = 5
load_delay_ms = 5000
"#;

impl AppConfig {
    pub fn validate(&self) -> Result<(), SiteListError> {
        self.site_list.validate()
    }
}

impl SiteListConfig {
    pub fn validate(&self) -> Result<(), SiteListError> {
        if self.page_size_options.is_empty() {
            return Err(SiteListError::InvalidConfig(
                "page_size_options must not be empty".to_string(),
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(SiteListError::InvalidConfig(
                "page_size_options must be positive".to_string(),
            ));
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(SiteListError::InvalidConfig(format!(
                "default_page_size {} is not one of {:?}",
                self.default_page_size, self.page_size_options
            )));
        }
        Ok(())
    }

    /// Проверяет размер страницы, выбранный пользователем
    pub fn validate_page_size(&self, size: usize) -> Result<usize, SiteListError> {
        if size > 0 && self.page_size_options.contains(&size) {
            Ok(size)
        } else {
            Err(SiteListError::InvalidPageSize(
                size,
                self.page_size_options.clone(),
            ))
        }
    }
}

impl Default for SiteListConfig {
    fn default() -> Self {
        Self {
            page_size_options: vec![5, 10, 15],
            default_page_size: 5,
            load_delay_ms: 5000,
        }
    }
}

/// Загружает и валидирует встроенную конфигурацию
pub fn load_config() -> Result<AppConfig, SiteListError> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> Result<AppConfig, SiteListError> {
    let config: AppConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
