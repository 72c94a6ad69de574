//! Application configuration.
//!
//! The backend base URL is supplied at build time through the
//! `FRAUDGUARD_BACKEND_URL` environment variable and turned into an
//! [`AppConfig`] once at startup. The config is then injected into the
//! component tree with `provide_context`, never read globally.
//!
//! Everything else in this module is a fixed display convention.

use crate::types::ConfigError;

/// Name of the build-time variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "FRAUDGUARD_BACKEND_URL";

/// Application name, shown in the header and the page title.
pub const APP_NAME: &str = "FraudGuard";

/// Path of the scoring endpoint, relative to the backend base URL.
pub const PREDICT_ENDPOINT: &str = "/predict";

/// Multipart field carrying the CSV bytes.
pub const UPLOAD_FIELD: &str = "file";

/// File-input filter.
pub const ACCEPTED_FILE_TYPES: &str = ".csv";

/// Whether `file_name` passes the same filter as the file input.
///
/// Drops bypass the input's `accept` attribute, so they are checked here.
pub fn is_accepted_file(file_name: &str) -> bool {
    ACCEPTED_FILE_TYPES
        .split(',')
        .map(str::trim)
        .any(|ext| file_name.to_ascii_lowercase().ends_with(&ext.to_ascii_lowercase()))
}

/// Probabilities strictly above this value are high risk.
///
/// Display convention only, the backend never sees it.
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;

/// Maximum rows rendered in the predictions table.
pub const MAX_TABLE_ROWS: usize = 100;

/// Shown when a failure carries no message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your file";

/// Public folder with sample transaction files.
pub const SAMPLE_DATASETS_URL: &str =
    "https://drive.google.com/drive/folders/15EUolln8tcZqibOarcczinTeVUnt8oeJ?usp=sharing";

/// Runtime configuration injected at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    backend_base_url: String,
}

impl AppConfig {
    /// Build a config from an explicit backend base URL.
    ///
    /// Surrounding whitespace and trailing slashes are stripped so that
    /// endpoint URLs never contain `//`.
    pub fn new(backend_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = backend_base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::MissingBackendUrl);
        }
        Ok(Self {
            backend_base_url: trimmed.to_string(),
        })
    }

    /// Read the backend base URL baked in at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_value(option_env!("FRAUDGUARD_BACKEND_URL"))
    }

    fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        value.map_or(Err(ConfigError::MissingBackendUrl), Self::new)
    }

    pub fn backend_base_url(&self) -> &str {
        &self.backend_base_url
    }

    /// Full URL of the scoring endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.backend_base_url, PREDICT_ENDPOINT)
    }

    /// URL probed by the liveness check.
    pub fn health_url(&self) -> String {
        format!("{}/", self.backend_base_url)
    }
}
