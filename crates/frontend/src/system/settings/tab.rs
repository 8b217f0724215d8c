/// Вкладки страницы настроек. Активная вкладка задаётся параметром `?tab=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    Preferences,
    Management,
    #[default]
    SiteList,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [
        SettingsTab::Preferences,
        SettingsTab::Management,
        SettingsTab::SiteList,
    ];

    /// Значение параметра `tab`
    pub fn key(&self) -> &'static str {
        match self {
            SettingsTab::Preferences => "preferences",
            SettingsTab::Management => "management",
            SettingsTab::SiteList => "sitelist",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Preferences => "העדפות",
            SettingsTab::Management => "ניהול",
            SettingsTab::SiteList => "מתקדם",
        }
    }

    pub fn href(&self) -> String {
        format!("?tab={}", self.key())
    }

    /// Разбор параметра `tab`; неизвестное или отсутствующее значение даёт список площадок
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|v| Self::ALL.into_iter().find(|tab| tab.key() == v))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        assert_eq!(SettingsTab::from_query(Some("preferences")), SettingsTab::Preferences);
        assert_eq!(SettingsTab::from_query(Some("management")), SettingsTab::Management);
        assert_eq!(SettingsTab::from_query(Some("sitelist")), SettingsTab::SiteList);
    }

    #[test]
    fn test_unknown_falls_back_to_site_list() {
        assert_eq!(SettingsTab::from_query(None), SettingsTab::SiteList);
        assert_eq!(SettingsTab::from_query(Some("")), SettingsTab::SiteList);
        assert_eq!(SettingsTab::from_query(Some("Preferences")), SettingsTab::SiteList);
        assert_eq!(SettingsTab::from_query(Some("admin")), SettingsTab::SiteList);
    }

    #[test]
    fn test_href_round_trip() {
        for tab in SettingsTab::ALL {
            let href = tab.href();
            assert_eq!(SettingsTab::from_query(href.strip_prefix("?tab=")), tab);
        }
    }
}
