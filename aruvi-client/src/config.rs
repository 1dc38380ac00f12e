//! Client configuration

/// Configuration for [`crate::HttpClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the API version prefix, e.g. `http://host:8080/v1`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/v1".to_string(),
            timeout: 10,
        }
    }
}
