//! Core error types for Docstore RS
//!
//! Every fallible operation in the workspace reports through [`DsError`].

use thiserror::Error;

/// Core error type for all Docstore operations
#[derive(Error, Debug)]
pub enum DsError {
    #[error("Invalid schema: {schema:?} must be non-empty and contain only letters, digits, and underscores")]
    InvalidSchema { schema: String },

    #[error("Undetermined query: {clause:?} cannot be split into column, operator, and value")]
    UndeterminedQuery { clause: String },

    #[error("Invalid operator: {clause:?} does not use a supported query operator")]
    InvalidOperator { clause: String },

    #[error("Undefined member: {name}")]
    UndefinedMember { name: String },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid URL for {key}: {source}")]
    InvalidUrl {
        key: String,
        #[source]
        source: url::ParseError,
    },
}

impl DsError {
    pub fn invalid_schema(schema: impl Into<String>) -> Self {
        DsError::InvalidSchema { schema: schema.into() }
    }

    pub fn undetermined_query(clause: impl Into<String>) -> Self {
        DsError::UndeterminedQuery { clause: clause.into() }
    }

    pub fn invalid_operator(clause: impl Into<String>) -> Self {
        DsError::InvalidOperator { clause: clause.into() }
    }

    pub fn undefined_member(name: impl Into<String>) -> Self {
        DsError::UndefinedMember { name: name.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        DsError::Transport { message: message.into() }
    }

    /// Stable machine-readable identifier for the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            DsError::InvalidSchema { .. } => "invalid_schema",
            DsError::UndeterminedQuery { .. } => "undetermined_query",
            DsError::InvalidOperator { .. } => "invalid_operator",
            DsError::UndefinedMember { .. } => "undefined_member",
            DsError::Encode(_) => "encode_error",
            DsError::Decode(_) => "decode_error",
            DsError::Transport { .. } => "transport_error",
            DsError::Config(_) => "configuration_error",
        }
    }

    /// Whether the error was raised while building a query
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            DsError::InvalidSchema { .. }
                | DsError::UndeterminedQuery { .. }
                | DsError::InvalidOperator { .. }
        )
    }
}
