//! # ds-core
//!
//! Core types, traits, and utilities for Docstore RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types
//! - Result type aliases
//! - The transport seam (`Transport`, `ApiRequest`, `RawResponse`)
//! - Configuration types

pub mod error;
pub mod result;
pub mod traits;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;
