use contracts::domain::a001_site::Site;
use contracts::enums::Region;
use gloo_timers::future::TimeoutFuture;

/// Fetch all sites
///
/// Источника данных пока нет: после задержки `delay_ms` возвращается
/// встроенный набор площадок.
pub async fn fetch_sites(delay_ms: u32) -> Result<Vec<Site>, String> {
    TimeoutFuture::new(delay_ms).await;
    Ok(mock_sites())
}

/// Встроенный набор площадок
pub fn mock_sites() -> Vec<Site> {
    vec![
        Site::new("AMOS-1", "אתר 1", Region::North, "BBU"),
        Site::new("AMOS-2", "אתר 2", Region::Center, "DUS"),
        Site::new("AMOS-3", "אתר 3", Region::South, "BBU"),
        Site::new("AMOS-4", "אתר 4", Region::North, "DUS"),
        Site::new("AMOS-5", "אתר 5", Region::Center, "BBU"),
        Site::new("AMOS-6", "אתר 6", Region::South, "DUS"),
        Site::new("AMOS-7", "אתר 7", Region::North, "BBU"),
        Site::new("AMOS-8", "אתר 8", Region::Center, "DUS"),
        Site::new("AMOS-9", "אתר 9", Region::South, "BBU"),
        Site::new("AMOS-10", "אתר 10", Region::North, "DUS"),
    ]
}
