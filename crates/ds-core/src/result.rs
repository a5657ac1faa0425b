//! Result type aliases

use crate::error::DsError;

/// Standard Result type for Docstore operations
pub type DsResult<T> = Result<T, DsError>;
