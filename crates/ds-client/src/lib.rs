//! # ds-client
//!
//! Response mapping and the API client for Docstore RS.
//!
//! - `response` - Classifies replies and exposes their typed payload
//! - `client` - Drives a [`ds_core::Transport`] with queries and resource paths
//!
//! ## Example
//!
//! ```
//! use ds_client::Response;
//! use serde_json::json;
//!
//! let response = Response::new(200, json!({"data": {"token": "X"}}), "token")?;
//! assert!(response.is_success());
//!
//! let token = response.resource("tokens")?.as_token().unwrap();
//! assert_eq!(token.value(), "X");
//! # Ok::<(), ds_core::DsError>(())
//! ```

pub mod client;
pub mod response;

pub use client::Client;
pub use response::Response;
