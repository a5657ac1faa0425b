//! # ds-models
//!
//! Resource models for Docstore RS.
//!
//! Response bodies decode into one of the types here, selected through the
//! [`ResourceRegistry`] by a resource label such as `"token"` or `"document"`.

pub use ds_core::traits::Timestamped;

pub mod api_error;
pub mod document;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod token;

// Re-exports for convenience
pub use api_error::ApiErrors;
pub use document::Document;
pub use registry::{pluralize, ResourceFactory, ResourceRegistry, DEFAULT_LABEL, ERROR_LABEL};
pub use resource::{Collection, Member, Resource};
pub use schema::{Schema, SchemaField};
pub use token::Token;
