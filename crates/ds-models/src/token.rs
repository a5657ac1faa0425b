//! Token resource
//!
//! Returned by the authentication endpoint: `{"token": "..."}`.

use serde::{Deserialize, Serialize};

/// API token issued by the document store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "token")]
    pub value: String,
}

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
