//! Query Directives
//!
//! The named components of a query, kept in the order they were first set.

use serde_json::{json, Value};

use ds_core::config::OrderFormat;

use crate::filters::FilterTerm;
use crate::sorts::OrderSpec;

static EMPTY_FILTER: FilterTerm = FilterTerm::new();

/// Directive names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Filter,
    Order,
    Limit,
    Offset,
    Index,
    Pluck,
}

impl DirectiveKind {
    /// Name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Order => "order_by",
            Self::Limit => "limit",
            Self::Offset => "offset",
            Self::Index => "index",
            Self::Pluck => "pluck",
        }
    }
}

/// A single query directive and its payload
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Filter(FilterTerm),
    Order(OrderSpec),
    Limit(Option<u64>),
    Offset(Option<u64>),
    Index(String),
    Pluck(Vec<String>),
}

impl Directive {
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::Filter(_) => DirectiveKind::Filter,
            Self::Order(_) => DirectiveKind::Order,
            Self::Limit(_) => DirectiveKind::Limit,
            Self::Offset(_) => DirectiveKind::Offset,
            Self::Index(_) => DirectiveKind::Index,
            Self::Pluck(_) => DirectiveKind::Pluck,
        }
    }

    /// Wire payload of the directive
    pub fn payload(&self, format: OrderFormat) -> Value {
        match self {
            Self::Filter(term) => {
                serde_json::to_value(term).unwrap_or_else(|_| Value::Object(Default::default()))
            }
            Self::Order(spec) => spec.to_value(format),
            Self::Limit(n) | Self::Offset(n) => json!(n),
            Self::Index(field) => json!(field),
            Self::Pluck(columns) => json!(columns),
        }
    }
}

/// Ordered directives, at most one per kind.
///
/// A filter entry is always present, starting out empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveList {
    entries: Vec<Directive>,
}

impl Default for DirectiveList {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveList {
    pub fn new() -> Self {
        Self {
            entries: vec![Directive::Filter(FilterTerm::new())],
        }
    }

    /// Set a directive, replacing one of the same kind at its original position
    pub fn merge(&mut self, directive: Directive) -> &mut Self {
        let kind = directive.kind();
        match self.entries.iter_mut().find(|d| d.kind() == kind) {
            Some(existing) => {
                tracing::debug!(directive = kind.as_str(), "Replacing query directive");
                *existing = directive;
            }
            None => {
                tracing::debug!(directive = kind.as_str(), "Appending query directive");
                self.entries.push(directive);
            }
        }
        self
    }

    pub fn get(&self, kind: DirectiveKind) -> Option<&Directive> {
        self.entries.iter().find(|d| d.kind() == kind)
    }

    /// The accumulated filter term
    pub fn filter(&self) -> &FilterTerm {
        self.entries
            .iter()
            .find_map(|d| match d {
                Directive::Filter(term) => Some(term),
                _ => None,
            })
            .unwrap_or(&EMPTY_FILTER)
    }

    /// Directive kinds in wire order
    pub fn kinds(&self) -> Vec<DirectiveKind> {
        self.entries.iter().map(Directive::kind).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Directive> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `[[name, payload], ...]`
    pub fn to_value(&self, format: OrderFormat) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|d| json!([d.kind().as_str(), d.payload(format)]))
                .collect(),
        )
    }
}
