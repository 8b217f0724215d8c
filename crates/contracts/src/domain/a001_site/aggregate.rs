use serde::{Deserialize, Serialize};

use crate::enums::Region;

/// Площадка (сайт) оборудования
///
/// `identifier` уникален в пределах коллекции: по нему сортируется список,
/// он же служит ключом строки и выбора.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "amosName")]
    pub identifier: String,

    #[serde(rename = "displayName")]
    pub display_name: String,

    #[serde(rename = "pikud")]
    pub region: Region,

    #[serde(rename = "type")]
    pub kind: String,
}

impl Site {
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        region: Region,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            region,
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{"amosName":"AMOS-1","displayName":"אתר 1","pikud":"צפון","type":"BBU"}"#;
        let site: Site = serde_json::from_str(json).unwrap();
        assert_eq!(site, Site::new("AMOS-1", "אתר 1", Region::North, "BBU"));
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        let json = r#"{"amosName":"AMOS-1","displayName":"x","pikud":"מזרח","type":"BBU"}"#;
        assert!(serde_json::from_str::<Site>(json).is_err());
    }
}
