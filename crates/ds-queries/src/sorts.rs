//! Query Sort Order
//!
//! A query carries at most one order directive: a field and a direction.

use serde::Serialize;
use serde_json::{json, Value};

use ds_core::config::OrderFormat;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 1-9, oldest first)
    #[default]
    Asc,
    /// Descending order (Z-A, 9-1, newest first)
    Desc,
}

impl SortDirection {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Parse from string, falling back to ascending
    pub fn from_str_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Get the opposite direction
    pub fn reverse(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Field and direction of the order directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    /// The field to sort by
    pub field: String,
    /// The sort direction
    pub direction: SortDirection,
}

impl OrderSpec {
    /// Create a new order spec
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create ascending sort
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create descending sort
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Parse `"field [asc|desc]"`. A missing or unknown direction means ascending.
    pub fn parse(clause: &str) -> Self {
        let mut words = clause.split_whitespace();
        let field = words.next().unwrap_or_default();
        let direction = words
            .next()
            .map(SortDirection::from_str_or_default)
            .unwrap_or_default();
        Self::new(field, direction)
    }

    /// Reverse the sort direction
    pub fn reversed(mut self) -> Self {
        self.direction = self.direction.reverse();
        self
    }

    /// Wire payload for the given format
    pub fn to_value(&self, format: OrderFormat) -> Value {
        match format {
            OrderFormat::Pair => json!([self.direction.as_str(), self.field]),
            OrderFormat::Clause => {
                Value::String(format!("{} {}", self.field, self.direction.as_str()))
            }
        }
    }
}

impl From<&str> for OrderSpec {
    fn from(clause: &str) -> Self {
        Self::parse(clause)
    }
}

impl From<String> for OrderSpec {
    fn from(clause: String) -> Self {
        Self::parse(&clause)
    }
}

impl<F: Into<String>> From<(F, SortDirection)> for OrderSpec {
    fn from((field, direction): (F, SortDirection)) -> Self {
        Self::new(field, direction)
    }
}

/// `("created_at", "desc")`, the mapping form of an order clause
impl<F: Into<String>> From<(F, &str)> for OrderSpec {
    fn from((field, direction): (F, &str)) -> Self {
        Self::new(field, SortDirection::from_str_or_default(direction))
    }
}
