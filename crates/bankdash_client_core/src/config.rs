//! Backend configuration: base URL and optional request timeout.

use crate::error::ClientError;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves timeouts to the transport defaults.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(&base_url.into())?;
        Ok(Self {
            base_url,
            request_timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Reads `BANKDASH_API_URL` and `BANKDASH_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var("BANKDASH_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = env::var("BANKDASH_REQUEST_TIMEOUT_SECS").ok();
        Self::from_parts(&base_url, timeout.as_deref())
    }

    fn from_parts(base_url: &str, timeout_secs: Option<&str>) -> Result<Self, ClientError> {
        let mut config = Self::new(base_url)?;
        if let Some(raw) = timeout_secs.map(str::trim).filter(|s| !s.is_empty()) {
            let secs: u64 = raw.parse().map_err(|_| {
                ClientError::Config(format!("BANKDASH_REQUEST_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Joins an absolute path (`/user/accounts`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| ClientError::Config(format!("Invalid base URL {:?}: {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "Unsupported URL scheme: {}",
            url.scheme()
        )));
    }
    Ok(trimmed.to_string())
}
