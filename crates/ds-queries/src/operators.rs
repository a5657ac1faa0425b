//! Query Operators
//!
//! Comparison operators accepted in clause strings and the field suffixes
//! they are written as on the wire.

/// Comparison operators that can appear in a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Not equals (!=)
    NotEquals,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Equals (=)
    Equals,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Not in list (not in)
    NotIn,
    /// In list (in)
    In,
}

impl Operator {
    /// All operators, in the order clauses are scanned for them.
    ///
    /// Two-character tokens precede their one-character prefixes and
    /// `not in` precedes `in`.
    pub const SCAN_ORDER: [Operator; 8] = [
        Self::NotEquals,
        Self::GreaterThanOrEqual,
        Self::LessThanOrEqual,
        Self::Equals,
        Self::GreaterThan,
        Self::LessThan,
        Self::NotIn,
        Self::In,
    ];

    /// Parse operator from its surface token
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "!=" => Some(Self::NotEquals),
            ">=" => Some(Self::GreaterThanOrEqual),
            "<=" => Some(Self::LessThanOrEqual),
            "=" => Some(Self::Equals),
            ">" => Some(Self::GreaterThan),
            "<" => Some(Self::LessThan),
            "not in" => Some(Self::NotIn),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    /// Token as written in a clause
    pub fn surface(&self) -> &'static str {
        match self {
            Self::NotEquals => "!=",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
            Self::Equals => "=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::NotIn => "not in",
            Self::In => "in",
        }
    }

    /// Suffix appended to the column name in a filter key
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::NotEquals => "__not",
            Self::GreaterThanOrEqual => "__gte",
            Self::LessThanOrEqual => "__lte",
            Self::Equals => "",
            Self::GreaterThan => "__gt",
            Self::LessThan => "__lt",
            Self::NotIn => "__notin",
            Self::In => "__in",
        }
    }

    /// Check if this operator takes a parenthesized list of values
    pub fn takes_list(&self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// Number of whitespace-separated words in the surface token
    pub fn word_count(&self) -> usize {
        self.surface().split_whitespace().count()
    }

    /// Find the first operator, in scan order, whose token occurs anywhere in `text`
    pub fn scan(text: &str) -> Option<Self> {
        Self::SCAN_ORDER
            .into_iter()
            .find(|op| text.contains(op.surface()))
    }

    /// Filter key for `column` compared with this operator
    pub fn key_for(&self, column: &str) -> String {
        format!("{}{}", column, self.suffix())
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.surface())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parsing() {
        assert_eq!(Operator::from_str("!="), Some(Operator::NotEquals));
        assert_eq!(Operator::from_str(">="), Some(Operator::GreaterThanOrEqual));
        assert_eq!(Operator::from_str("NOT IN"), Some(Operator::NotIn));
        assert_eq!(Operator::from_str("in"), Some(Operator::In));
        assert_eq!(Operator::from_str("~"), None);
    }

    #[test]
    fn test_operator_suffixes() {
        assert_eq!(Operator::Equals.suffix(), "");
        assert_eq!(Operator::LessThanOrEqual.suffix(), "__lte");
        assert_eq!(Operator::NotIn.suffix(), "__notin");
        assert_eq!(Operator::GreaterThan.key_for("bar"), "bar__gt");
        assert_eq!(Operator::Equals.key_for("foo"), "foo");
    }

    #[test]
    fn test_scan_prefers_longer_tokens() {
        assert_eq!(Operator::scan("foo >= 99"), Some(Operator::GreaterThanOrEqual));
        assert_eq!(Operator::scan("foo <= 1"), Some(Operator::LessThanOrEqual));
        assert_eq!(Operator::scan("foo != 'bar'"), Some(Operator::NotEquals));
        assert_eq!(Operator::scan("foo not in (1,2)"), Some(Operator::NotIn));
        assert_eq!(Operator::scan("foo in (1,2)"), Some(Operator::In));
    }

    #[test]
    fn test_scan_follows_table_order() {
        // `>` is listed before `<`, so it wins when both are present.
        assert_eq!(Operator::scan("foo <>< 'bar'"), Some(Operator::GreaterThan));
        assert_eq!(Operator::scan("foo ~ 'bar'"), None);
    }

    #[test]
    fn test_takes_list() {
        assert!(Operator::In.takes_list());
        assert!(Operator::NotIn.takes_list());
        assert!(!Operator::Equals.takes_list());
        assert_eq!(Operator::NotIn.word_count(), 2);
        assert_eq!(Operator::LessThan.word_count(), 1);
    }
}
