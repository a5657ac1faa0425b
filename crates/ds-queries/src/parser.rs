//! Clause Parser
//!
//! Turns a single comparison such as `"foo >= 10"` into a filter entry
//! keyed by `column + suffix`. Exactly one comparison per clause; there is no
//! boolean composition or nesting.

use ds_core::{DsError, DsResult};

use crate::filters::FilterTerm;
use crate::literal::Literal;
use crate::operators::Operator;

/// A clause broken into its parts
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedClause {
    pub column: String,
    pub operator: Operator,
    pub value: Literal,
}

impl ParsedClause {
    /// Parse a comparison clause.
    ///
    /// The clause is lowercased, then scanned for the first operator token in
    /// [`Operator::SCAN_ORDER`]. The column is the first word, the operator
    /// must occupy the following word(s), and the value is the word after it.
    pub fn parse(clause: &str) -> DsResult<Self> {
        let lowered = clause.to_lowercase();

        let operator =
            Operator::scan(&lowered).ok_or_else(|| DsError::invalid_operator(clause))?;

        let words: Vec<&str> = lowered.split_whitespace().collect();
        let width = operator.word_count();
        if words.len() < width + 2 {
            return Err(DsError::undetermined_query(clause));
        }

        let written = &words[1..=width];
        if !written
            .iter()
            .copied()
            .eq(operator.surface().split_whitespace())
        {
            return Err(DsError::invalid_operator(clause));
        }

        let column = words[0].to_string();
        let value = Literal::coerce(words[width + 1], Some(operator));

        tracing::debug!(%column, %operator, ?value, "Parsed query clause");

        Ok(Self {
            column,
            operator,
            value,
        })
    }

    /// Filter key for this clause
    pub fn key(&self) -> String {
        self.operator.key_for(&self.column)
    }

    /// Convert into a single-entry filter term
    pub fn into_term(self) -> FilterTerm {
        let mut term = FilterTerm::new();
        term.insert(self.key(), self.value);
        term
    }
}

/// Parse a comparison clause into a single-entry filter term
pub fn parse(clause: &str) -> DsResult<FilterTerm> {
    FilterTerm::parse(clause)
}
