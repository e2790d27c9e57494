use serde::{Deserialize, Serialize};

use crate::model::capabilities::Capabilities;

/// Default base URL of the analytics backend.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default lifetime of a transient notice, in milliseconds.
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5000;

/// Runtime configuration handed to the browser by the host at
/// `GET /dashboard/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every backend path is appended to, without trailing slash.
    pub api_base_url: String,
    /// How long a notice stays visible before it clears itself.
    pub notice_timeout_ms: u32,
    /// Threshold options to fall back on when the backend has no
    /// `GET /capabilities` route. Empty means no fallback.
    #[serde(default)]
    pub fallback_capabilities: Capabilities,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
            fallback_capabilities: Capabilities::default(),
        }
    }
}
