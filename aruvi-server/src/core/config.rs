use std::str::FromStr;

/// Which persistence adapter to wire in at startup.
///
/// The two are never mixed at runtime; the manager contract is identical
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Whole-collection JSON files under `<work_dir>/data`
    Local,
    /// Remote REST backend, one request per mutation
    Remote,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/aruvi | Working directory (data, logs) |
/// | HTTP_PORT | 8080 | HTTP API port |
/// | STORE_BACKEND | local | `local` or `remote` |
/// | REMOTE_BASE_URL | http://localhost:8080/v1 | Remote adapter base URL |
/// | TABLE_COUNT | 8 | Table count fallback when no hotel profile exists |
/// | REFRESH_INTERVAL_SECS | 60 | Soft refresh period |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for data files and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Persistence adapter selection
    pub store_backend: StoreBackend,
    /// Base URL of the remote backend (remote adapter only)
    pub remote_base_url: String,
    /// Fallback table count when no hotel profile is stored
    pub table_count: u32,
    /// Period of the background soft-refresh task
    pub refresh_interval_secs: u64,
    /// Runtime environment name
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/aruvi".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            store_backend: std::env::var("STORE_BACKEND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(StoreBackend::Local),
            remote_base_url: std::env::var("REMOTE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/v1".into()),
            table_count: std::env::var("TABLE_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
            refresh_interval_secs: std::env::var("REFRESH_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override work dir and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
