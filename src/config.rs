//! Site configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The configuration is read once by the
//! entry point and passed down explicitly; nothing reads the environment
//! after startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Default Sanity API version used when `SANITY_API_VERSION` is unset.
pub const DEFAULT_API_VERSION: &str = "2024-01-01";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Top-level site configuration.
///
/// Loaded once at startup via [`SiteConfig::from_env`].
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Directory holding `events.json`, `ambassadors.json` and `blog.json`.
    pub data_dir: PathBuf,

    /// Log output format.
    pub log_format: LogFormat,

    /// Headless CMS settings. Fixture mode when not configured.
    pub cms: CmsConfig,
}

/// Connection settings for the Sanity content lake.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Project identifier (`SANITY_PROJECT_ID`).
    pub project_id: Option<String>,

    /// Dataset name (`SANITY_DATASET`).
    pub dataset: Option<String>,

    /// API version date string, with or without a leading `v`.
    pub api_version: String,

    /// Query the CDN-backed API host instead of the live one.
    pub use_cdn: bool,

    /// Read token sent as a bearer credential.
    pub token: Option<String>,

    /// Overrides the derived API host (e.g. `http://127.0.0.1:4000`).
    pub api_host: Option<String>,

    /// Per-request timeout for CMS queries.
    pub timeout: Duration,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: false,
            token: None,
            api_host: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl CmsConfig {
    /// Returns `true` iff both a project id and a dataset are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    /// Returns `(project_id, dataset)` when both are present and non-empty.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let project = self.project_id.as_deref().filter(|s| !s.is_empty())?;
        let dataset = self.dataset.as_deref().filter(|s| !s.is_empty())?;
        Some((project, dataset))
    }

    /// Reads the `SANITY_*` variables.
    #[must_use]
    pub fn from_env() -> Self {
        let production = std::env::var("APP_ENV").is_ok_and(|v| v == "production");
        Self {
            project_id: non_empty_env("SANITY_PROJECT_ID"),
            dataset: non_empty_env("SANITY_DATASET"),
            api_version: non_empty_env("SANITY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            use_cdn: parse_env_bool("SANITY_USE_CDN", production),
            token: non_empty_env("SANITY_TOKEN"),
            api_host: non_empty_env("SANITY_API_HOST"),
            timeout: Duration::from_secs(parse_env("SANITY_TIMEOUT_SECS", 10)),
        }
    }
}

impl SiteConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ListenAddr`] if `LISTEN_ADDR` is set but
    /// cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw_addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .map_err(|source| ConfigError::ListenAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let data_dir = non_empty_env("DATA_DIR").map_or_else(|| PathBuf::from("data"), PathBuf::from);

        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            listen_addr,
            data_dir,
            log_format,
            cms: CmsConfig::from_env(),
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    parse_bool(std::env::var(key).ok().as_deref()).unwrap_or(default)
}

fn parse_bool(value: Option<&str>) -> Option<bool> {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("true") | Some("1") => Some(true),
        Some("false") | Some("0") => Some(false),
        _ => None,
    }
}
