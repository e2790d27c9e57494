//! Host configuration, read once at startup from `DASHBOARD_*` environment
//! variables.

use common::model::capabilities::Capabilities;
use common::model::config::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_NOTICE_TIMEOUT_MS};
use thiserror::Error;

pub const HOST_VAR: &str = "DASHBOARD_HOST";
pub const PORT_VAR: &str = "DASHBOARD_PORT";
pub const API_URL_VAR: &str = "DASHBOARD_API_URL";
pub const NOTICE_MS_VAR: &str = "DASHBOARD_NOTICE_MS";
pub const OPEN_BROWSER_VAR: &str = "DASHBOARD_OPEN_BROWSER";
pub const FUNCTIONS_VAR: &str = "DASHBOARD_FUNCTIONS";
pub const OPERATORS_VAR: &str = "DASHBOARD_OPERATORS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("{name} must be a positive number of milliseconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },

    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },

    #[error("{name} must be an http:// or https:// URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Handed to the browser at `GET /dashboard/config`.
    pub client: ClientConfig,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Unset and blank
    /// variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = var(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var(PORT_VAR) {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                name: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let open_browser = match var(OPEN_BROWSER_VAR) {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                name: OPEN_BROWSER_VAR,
                value,
            })?,
            None => true,
        };

        let api_base_url = match var(API_URL_VAR) {
            Some(value) if value.starts_with("http://") || value.starts_with("https://") => {
                value.trim_end_matches('/').to_string()
            }
            Some(value) => return Err(ConfigError::InvalidUrl { name: API_URL_VAR, value }),
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let notice_timeout_ms = match var(NOTICE_MS_VAR) {
            Some(value) => match value.parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => return Err(ConfigError::InvalidTimeout { name: NOTICE_MS_VAR, value }),
            },
            None => DEFAULT_NOTICE_TIMEOUT_MS,
        };

        let fallback_capabilities = Capabilities {
            functions: var(FUNCTIONS_VAR).map(|v| split_list(&v)).unwrap_or_default(),
            operators: var(OPERATORS_VAR).map(|v| split_list(&v)).unwrap_or_default(),
        };

        Ok(Self {
            host,
            port,
            open_browser,
            client: ClientConfig {
                api_base_url,
                notice_timeout_ms,
                fallback_capabilities,
            },
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// `"AVG, MAX,,MIN"` → `["AVG", "MAX", "MIN"]`
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
