//! Configuration types and loading

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1/";

/// How the `order_by` directive is written on the wire
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderFormat {
    /// `["desc", "created_at"]`
    #[default]
    Pair,
    /// `"created_at desc"`
    Clause,
}

impl OrderFormat {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pair" => Some(Self::Pair),
            "clause" => Some(Self::Clause),
            _ => None,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// API root; request paths are joined onto it
    pub base_url: Url,
    /// API token handed to the transport
    pub token: Option<String>,
    /// Request timeout for transports that honour it
    pub timeout_seconds: u64,
    /// Wire format of the order directive
    pub order_format: OrderFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            token: None,
            timeout_seconds: 30,
            order_format: OrderFormat::default(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given API root
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("base_url", base_url)?,
            ..Self::default()
        })
    }

    /// Load configuration from environment variables (and a `.env` file, if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from `DOCSTORE_*` values returned by `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match lookup("DOCSTORE_URL") {
            Some(url) => config.base_url = parse_base_url("DOCSTORE_URL", &url)?,
            None => tracing::warn!(
                base_url = DEFAULT_BASE_URL,
                "DOCSTORE_URL not set, using default API root"
            ),
        }
        if let Some(token) = lookup("DOCSTORE_TOKEN").filter(|token| !token.is_empty()) {
            config.token = Some(token);
        }
        if let Some(timeout) = lookup("DOCSTORE_TIMEOUT_SECONDS") {
            config.timeout_seconds = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DOCSTORE_TIMEOUT_SECONDS".to_string(),
                message: format!("expected a whole number of seconds, got {:?}", timeout),
            })?;
        }
        if let Some(format) = lookup("DOCSTORE_ORDER_FORMAT") {
            config.order_format =
                OrderFormat::from_str(&format).ok_or_else(|| ConfigError::InvalidValue {
                    key: "DOCSTORE_ORDER_FORMAT".to_string(),
                    message: format!("expected \"pair\" or \"clause\", got {:?}", format),
                })?;
        }

        tracing::debug!(
            base_url = %config.base_url,
            order_format = ?config.order_format,
            "Loaded client configuration"
        );

        Ok(config)
    }

    /// Resolve a request path against the API root
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ConfigError::InvalidUrl {
                key: path.to_string(),
                source,
            })
    }

    /// Build a path beneath the API root from raw segments.
    ///
    /// Each segment is percent-encoded, `/` included, so ids cannot escape
    /// their collection. The result ends with a slash.
    pub fn segments_endpoint(&self, segments: &[&str]) -> Result<Url, ConfigError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::InvalidValue {
                key: "base_url".to_string(),
                message: format!("{} cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }
}

/// Parse a base URL, making sure relative joins land beneath it
fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized).map_err(|source| ConfigError::InvalidUrl {
        key: key.to_string(),
        source,
    })
}
