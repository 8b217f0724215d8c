/// Основной показатель на главной панели и карте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryMetric {
    #[default]
    Subscribers,
    NoiseFloor,
    BandwidthUtilization,
}

impl PrimaryMetric {
    pub const ALL: [PrimaryMetric; 3] = [
        PrimaryMetric::Subscribers,
        PrimaryMetric::NoiseFloor,
        PrimaryMetric::BandwidthUtilization,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PrimaryMetric::Subscribers => "UEs",
            PrimaryMetric::NoiseFloor => "RR",
            PrimaryMetric::BandwidthUtilization => "BW",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrimaryMetric::Subscribers => "כמות מנויים",
            PrimaryMetric::NoiseFloor => "רצפת רעש",
            PrimaryMetric::BandwidthUtilization => "ניצול רוחב פס",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}
