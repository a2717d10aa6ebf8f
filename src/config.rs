pub const DEFAULT_BASE_URL: &str = "https://x.loratech.dev/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub base_url: String,
    /// Window passed as `hours` to aggregate endpoints.
    pub hours: u32,
    /// Row cap passed as `limit` to list endpoints.
    pub limit: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            hours: 24,
            limit: 10,
        }
    }
}

impl ProbeConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL without trailing slashes, ready for `{base}/telemetry/...`.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
