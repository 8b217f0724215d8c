use serde::{Deserialize, Serialize};

/// Пикуд (регион) площадки
///
/// В JSON и в UI регион представлен своей меткой на иврите.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "צפון")]
    North,
    #[serde(rename = "מרכז")]
    Center,
    #[serde(rename = "דרום")]
    South,
}

impl Region {
    /// Метка для отображения (и для поиска)
    pub fn label(&self) -> &'static str {
        match self {
            Region::North => "צפון",
            Region::Center => "מרכז",
            Region::South => "דרום",
        }
    }
}
