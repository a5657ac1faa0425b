//! Filter Literals
//!
//! Values compared against in a filter term, and the coercion rules that turn
//! raw clause text into them.

use serde::{Serialize, Serializer};

use crate::operators::Operator;

/// Characters stripped from both ends of string literals
const QUOTE_CHARS: &[char] = &['\'', '"', '(', ')'];

/// A single element of a list literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Integer(i64),
    String(String),
}

impl ListItem {
    /// Coerce one list element: integer if all digits, otherwise a string
    pub fn coerce(raw: &str) -> Self {
        let raw = strip_quotes(raw.trim());
        match Shape::of(raw) {
            Shape::Integer => raw
                .parse()
                .map(Self::Integer)
                .unwrap_or_else(|_| Self::String(raw.to_string())),
            _ => Self::String(raw.to_string()),
        }
    }
}

impl Serialize for ListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}

impl From<i64> for ListItem {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ListItem {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<&str> for ListItem {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ListItem {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Filter literal types
#[derive(Debug, Clone)]
pub enum Literal {
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value, quotes removed
    String(String),
    /// List of values for `in` / `not in`
    List(Vec<ListItem>),
}

impl Literal {
    /// Interpret raw clause text as a literal.
    ///
    /// Rules, first match wins:
    /// 1. digits only → integer
    /// 2. digits, a dot, digits → float
    /// 3. `in` / `not in` context → comma-separated list of integers or strings
    /// 4. anything else → string with surrounding quotes and parentheses removed
    pub fn coerce(raw: &str, operator: Option<Operator>) -> Self {
        match Shape::of(raw) {
            Shape::Integer => match raw.parse::<i64>() {
                Ok(n) => Self::Integer(n),
                // Too many digits for i64; still numeric.
                Err(_) => Self::finite_float(raw),
            },
            Shape::Float => Self::finite_float(raw),
            Shape::Other if operator.is_some_and(|op| op.takes_list()) => Self::List(
                strip_quotes(raw)
                    .split(',')
                    .filter(|item| !item.trim().is_empty())
                    .map(ListItem::coerce)
                    .collect(),
            ),
            Shape::Other => Self::String(strip_quotes(raw).to_string()),
        }
    }

    /// A float, or the raw text when it does not fit a finite `f64`
    fn finite_float(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Float(n),
            _ => Self::String(raw.to_string()),
        }
    }

    /// Normalize a literal supplied directly by the caller in mapping form.
    ///
    /// Numbers and lists pass through; strings only have quotes stripped.
    pub fn normalized(self) -> Self {
        match self {
            Self::String(s) => Self::String(strip_quotes(&s).to_string()),
            other => other,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ListItem]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Integers and floats compare by numeric value, so `1` equals `1.0`.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Integer(_) | Self::Float(_), Self::Integer(_) | Self::Float(_)) => {
                self.as_f64() == other.as_f64()
            }
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<ListItem>> From<Vec<T>> for Literal {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Lexical shape of a raw token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `\d+`
    Integer,
    /// `\d+\.\d+`
    Float,
    Other,
}

impl Shape {
    fn of(raw: &str) -> Self {
        let mut chars = raw.chars().peekable();
        if !digits(&mut chars) {
            return Self::Other;
        }
        match chars.next() {
            None => Self::Integer,
            Some('.') if digits(&mut chars) && chars.peek().is_none() => Self::Float,
            Some(_) => Self::Other,
        }
    }
}

/// Consume a run of ASCII digits; false if the run is empty
fn digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> bool {
    let mut seen = false;
    while chars.next_if(|c| c.is_ascii_digit()).is_some() {
        seen = true;
    }
    seen
}

fn strip_quotes(raw: &str) -> &str {
    raw.trim_matches(QUOTE_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_integer() {
        assert_eq!(Literal::coerce("1", None).as_i64(), Some(1));
        assert_eq!(Literal::coerce("0042", None).as_i64(), Some(42));
    }

    #[test]
    fn test_coerce_float() {
        let value = Literal::coerce("1.2", None);
        assert!(matches!(value, Literal::Float(f) if (f - 1.2).abs() < f64::EPSILON));
    }

    #[test]
    fn test_coerce_string_strips_quotes() {
        assert_eq!(Literal::coerce("'foo'", None), Literal::from("foo"));
        assert_eq!(Literal::coerce("(foo)", None), Literal::from("foo"));
        assert_eq!(Literal::coerce("-5", None), Literal::from("-5"));
        assert_eq!(Literal::coerce("1.", None), Literal::from("1."));
        assert_eq!(Literal::coerce(".5", None), Literal::from(".5"));
    }

    #[test]
    fn test_coerce_list() {
        let value = Literal::coerce("(bar,barb,barber)", Some(Operator::In));
        assert_eq!(value, Literal::from(vec!["bar", "barb", "barber"]));

        let value = Literal::coerce("('a',2,'c')", Some(Operator::NotIn));
        assert_eq!(
            value,
            Literal::List(vec![
                ListItem::String("a".into()),
                ListItem::Integer(2),
                ListItem::String("c".into()),
            ])
        );
    }

    #[test]
    fn test_list_elements_are_never_floats() {
        let value = Literal::coerce("(1.5,2)", Some(Operator::In));
        assert_eq!(
            value,
            Literal::List(vec![ListItem::String("1.5".into()), ListItem::Integer(2)])
        );
    }

    #[test]
    fn test_list_context_does_not_override_numbers() {
        assert_eq!(Literal::coerce("7", Some(Operator::In)).as_i64(), Some(7));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        let value = Literal::coerce("99999999999999999999", None);
        assert!(matches!(value, Literal::Float(_)));
    }

    #[test]
    fn test_oversized_number_stays_text() {
        let digits = "9".repeat(400);
        assert_eq!(Literal::coerce(&digits, None), Literal::from(digits.as_str()));

        let fraction = format!("{}.5", digits);
        assert_eq!(Literal::coerce(&fraction, None), Literal::from(fraction.as_str()));
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(Literal::Integer(1), Literal::Float(1.0));
        assert_ne!(Literal::Integer(1), Literal::Float(1.5));
        assert_ne!(Literal::Integer(1), Literal::from("1"));
    }

    #[test]
    fn test_normalized_only_strips_strings() {
        assert_eq!(Literal::from("'almighty'").normalized(), Literal::from("almighty"));
        assert_eq!(Literal::from("12").normalized(), Literal::from("12"));
        assert_eq!(Literal::from(3).normalized(), Literal::Integer(3));
    }

    #[test]
    fn test_serialization() {
        let value = serde_json::to_value(Literal::from(vec![1, 2])).unwrap();
        assert_eq!(value, serde_json::json!([1, 2]));
        let value = serde_json::to_value(Literal::from("x")).unwrap();
        assert_eq!(value, serde_json::json!("x"));
    }
}
