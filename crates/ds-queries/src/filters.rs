//! Query Filters
//!
//! A filter term is the accumulated mapping of column keys (with operator
//! suffixes) to literal values. Keys keep the position of their first
//! insertion; writing an existing key replaces its value.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use ds_core::DsResult;

use crate::literal::Literal;
use crate::parser::ParsedClause;

/// Ordered mapping of filter keys to literal values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterTerm {
    entries: Vec<(String, Literal)>,
}

impl FilterTerm {
    /// Create a new empty filter term
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Parse a single comparison clause into a one-entry term
    pub fn parse(clause: &str) -> DsResult<Self> {
        Ok(ParsedClause::parse(clause)?.into_term())
    }

    /// Set a key, replacing any existing value in place
    pub fn insert(&mut self, key: impl Into<String>, value: Literal) -> &mut Self {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Set a key and return self (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Literal>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Merge every entry of `other` into this term; later values win
    pub fn merge(&mut self, other: FilterTerm) -> &mut Self {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
        self
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&Literal> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if any conditions are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get number of conditions
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<Literal>> FromIterator<(K, V)> for FilterTerm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut term = Self::new();
        for (key, value) in iter {
            term.insert(key, value.into());
        }
        term
    }
}

impl Serialize for FilterTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Input accepted by `Query::filter`
#[derive(Debug, Clone)]
pub enum Clause {
    /// A comparison string such as `"foo >= 10"`
    Expression(String),
    /// Column to value pairs, compared for equality
    Terms(Vec<(String, Literal)>),
}

impl Clause {
    /// Resolve the clause into filter entries
    pub fn into_term(self) -> DsResult<FilterTerm> {
        match self {
            Self::Expression(clause) => FilterTerm::parse(&clause),
            Self::Terms(terms) => Ok(terms
                .into_iter()
                .map(|(column, value)| (column, value.normalized()))
                .collect()),
        }
    }
}

impl From<&str> for Clause {
    fn from(clause: &str) -> Self {
        Self::Expression(clause.to_string())
    }
}

impl From<String> for Clause {
    fn from(clause: String) -> Self {
        Self::Expression(clause)
    }
}

impl<K: Into<String>, V: Into<Literal>, const N: usize> From<[(K, V); N]> for Clause {
    fn from(terms: [(K, V); N]) -> Self {
        Self::Terms(
            terms
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Literal>> From<Vec<(K, V)>> for Clause {
    fn from(terms: Vec<(K, V)>) -> Self {
        Self::Terms(
            terms
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<FilterTerm> for Clause {
    fn from(term: FilterTerm) -> Self {
        Self::Terms(term.entries)
    }
}
