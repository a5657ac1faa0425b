//! # ds-queries
//!
//! Query construction for Docstore RS.
//!
//! This crate turns a fluent chain of directives into the JSON body the
//! document store expects.
//!
//! ## Structure
//!
//! - `operators` - Comparison operators and their wire suffixes
//! - `literal` - Literal values and coercion of raw clause text
//! - `parser` - Single-comparison clause parser
//! - `filters` - The accumulated filter term
//! - `sorts` - Order directive
//! - `directives` - Ordered directive list
//! - `query` - The immutable, chainable `Query`
//!
//! ## Example
//!
//! ```
//! use ds_queries::Query;
//!
//! let query = Query::new("movies")?
//!     .filter([("genre", "horror")])?
//!     .filter("rating >= 4")?
//!     .order("year desc")
//!     .limit(10);
//!
//! assert_eq!(query.filters().len(), 2);
//! assert_eq!(
//!     query.to_json()?,
//!     r#"{"schema":"movies","query":[["filter",{"genre":"horror","rating__gte":4}],["order_by",["desc","year"]],["limit",10]]}"#
//! );
//! # Ok::<(), ds_core::DsError>(())
//! ```

pub mod operators;
pub mod literal;
pub mod parser;
pub mod filters;
pub mod sorts;
pub mod directives;
pub mod query;

// Re-exports for convenience
pub use directives::{Directive, DirectiveKind, DirectiveList};
pub use filters::{Clause, FilterTerm};
pub use literal::{ListItem, Literal};
pub use operators::Operator;
pub use parser::{parse, ParsedClause};
pub use query::Query;
pub use sorts::{OrderSpec, SortDirection};
