use std::time::Duration;

use derive_more::{Display, Error};
use reqwest::Url;

pub const BASE_URL: &str = "http://tradesim.jamessawyer.co.uk:5000";
pub const ALT_BASE_URL: &str = "http://mktmayhem.jamessawyer.co.uk:5000";
pub const DEFAULT_LOG_TARGET: &str = "tradesim_client";

/// The two hosted simulations. Only one is active for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Endpoint {
    #[default]
    Primary,
    Alternate,
}

impl Endpoint {
    pub fn base_url(&self) -> &'static str {
        match self {
            Endpoint::Primary => BASE_URL,
            Endpoint::Alternate => ALT_BASE_URL,
        }
    }
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[display(fmt = "invalid base url: {}", url)]
    InvalidBaseUrl { url: String },
    #[display(fmt = "unsupported scheme in base url: {}", url)]
    UnsupportedScheme { url: String },
    #[display(fmt = "base url must not carry a query or fragment: {}", url)]
    QueryOrFragment { url: String },
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    timeout: Option<Duration>,
    log_target: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url: String = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|_| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
        })?;

        match parsed.scheme() {
            "http" | "https" => (),
            _ => return Err(ConfigError::UnsupportedScheme { url: base_url }),
        }
        // Paths are appended to the base as text.
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::QueryOrFragment { url: base_url });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
            log_target: DEFAULT_LOG_TARGET.to_string(),
        })
    }

    pub fn from_endpoint(endpoint: Endpoint) -> Self {
        Self {
            base_url: endpoint.base_url().to_string(),
            timeout: None,
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_log_target(mut self, log_target: impl Into<String>) -> Self {
        self.log_target = log_target.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn log_target(&self) -> &str {
        &self.log_target
    }

    pub fn url(&self, path: &str) -> String {
        self.base_url.clone() + path
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::from_endpoint(Endpoint::default())
    }
}
