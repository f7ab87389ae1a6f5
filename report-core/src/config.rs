//! Client configuration.
//!
//! The dashboard talks to a single backend at a fixed address; there is no
//! environment or file based configuration.

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Page size requested on every list query. Large enough to show all rows.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Path of the report resource, relative to the base URL.
pub const REPORT_PATH: &str = "/api/report";

/// Connection settings for [`crate::api::ReportClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend (no trailing path).
    pub base_url: String,
    /// Value sent as the `size` query parameter.
    pub page_size: u32,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// URL of the report collection, e.g. `http://localhost:8080/api/report`.
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), REPORT_PATH)
    }

    /// URL of a single report row, e.g. `http://localhost:8080/api/report/7`.
    pub fn record_url(&self, id: i64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.page_size, 1000);
        assert_eq!(config.collection_url(), "http://localhost:8080/api/report");
    }

    #[test]
    fn record_url_appends_id() {
        let config = ClientConfig::new("http://example.test/");
        assert_eq!(config.record_url(42), "http://example.test/api/report/42");
    }

    #[test]
    fn page_size_can_be_overridden() {
        let config = ClientConfig::default().with_page_size(25);
        assert_eq!(config.page_size, 25);
    }
}
