//! Query Model
//!
//! A `Query` is an immutable set of directives against one schema. Every
//! chain method returns a new query with a single directive set; the
//! receiver is left untouched, so a query can be branched freely.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use ds_core::config::OrderFormat;
use ds_core::{DsError, DsResult};

use crate::directives::{Directive, DirectiveKind, DirectiveList};
use crate::filters::{Clause, FilterTerm};
use crate::sorts::OrderSpec;

/// Valid schema names: letters, digits and underscores
static SCHEMA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// A query against a single schema
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    schema: String,
    directives: DirectiveList,
    order_format: OrderFormat,
}

impl Query {
    /// Create a query for `schema`.
    ///
    /// Fails with [`DsError::InvalidSchema`] unless the name is non-empty and
    /// made of letters, digits and underscores.
    pub fn new(schema: impl Into<String>) -> DsResult<Self> {
        let schema = schema.into();
        if !Self::schema_valid(&schema) {
            return Err(DsError::invalid_schema(schema));
        }
        Ok(Self {
            schema,
            directives: DirectiveList::new(),
            order_format: OrderFormat::default(),
        })
    }

    /// Check a schema name
    pub fn schema_valid(schema: &str) -> bool {
        SCHEMA_PATTERN.is_match(schema)
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn directives(&self) -> &DirectiveList {
        &self.directives
    }

    /// The accumulated filter term
    pub fn filters(&self) -> &FilterTerm {
        self.directives.filter()
    }

    pub fn order_format(&self) -> OrderFormat {
        self.order_format
    }

    /// Copy of this query with one directive set
    fn with_directive(&self, directive: Directive) -> Self {
        let mut next = self.clone();
        next.directives.merge(directive);
        next
    }

    /// Copy of this query serializing its order directive in `format`
    pub fn with_order_format(&self, format: OrderFormat) -> Self {
        Self {
            order_format: format,
            ..self.clone()
        }
    }

    /// Maximum number of results; `None` stores null
    pub fn limit(&self, max: impl Into<Option<u64>>) -> Self {
        self.with_directive(Directive::Limit(max.into()))
    }

    /// Number of results to skip; `None` stores null
    pub fn offset(&self, value: impl Into<Option<u64>>) -> Self {
        self.with_directive(Directive::Offset(value.into()))
    }

    /// Order results.
    ///
    /// Accepts `"field [asc|desc]"` or a `(field, direction)` pair. Missing
    /// or unknown directions sort ascending.
    pub fn order(&self, clause: impl Into<OrderSpec>) -> Self {
        self.with_directive(Directive::Order(clause.into()))
    }

    /// Add a where clause.
    ///
    /// Accepts a comparison string (`"rating >= 4"`) or column/value pairs
    /// (`[("genre", "horror")]`). New keys are added to the filter, existing
    /// keys are overwritten.
    pub fn filter(&self, clause: impl Into<Clause>) -> DsResult<Self> {
        let incoming = clause.into().into_term()?;
        let mut term = self.directives.filter().clone();
        term.merge(incoming);
        Ok(self.with_directive(Directive::Filter(term)))
    }

    /// Select a set of columns from the result set
    pub fn select<I, S>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_directive(Directive::Pluck(
            columns.into_iter().map(Into::into).collect(),
        ))
    }

    /// Pluck just one column from the result set
    pub fn pluck(&self, column: impl Into<String>) -> Self {
        self.with_directive(Directive::Pluck(vec![column.into()]))
    }

    /// Index to use for the query
    pub fn index(&self, field: impl Into<String>) -> Self {
        self.with_directive(Directive::Index(field.into()))
    }

    pub fn get(&self, kind: DirectiveKind) -> Option<&Directive> {
        self.directives.get(kind)
    }

    /// Request body: `{"schema": ..., "query": [[name, payload], ...]}`
    pub fn to_value(&self) -> Value {
        json!({
            "schema": self.schema,
            "query": self.directives.to_value(self.order_format),
        })
    }

    /// Request body as a JSON string
    pub fn to_json(&self) -> DsResult<String> {
        serde_json::to_string(self).map_err(DsError::Encode)
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;
    use crate::sorts::SortDirection;

    fn query() -> Query {
        Query::new("test").unwrap()
    }

    #[test]
    fn test_valid_schemas() {
        for schema in ["test", "movies_2024", "A", "_"] {
            assert!(Query::new(schema).is_ok(), "{} should be valid", schema);
        }
    }

    #[test]
    fn test_invalid_schemas() {
        for schema in ["", "two words", "kebab-case", "dotted.name", "tab\t", "ünïcode"] {
            let err = Query::new(schema).unwrap_err();
            assert!(matches!(err, DsError::InvalidSchema { .. }), "{:?}", schema);
        }
    }

    #[test]
    fn test_new_query_body() {
        assert_eq!(
            query().to_value(),
            json!({"schema": "test", "query": [["filter", {}]]})
        );
    }

    #[test]
    fn test_limit() {
        let q = query().limit(10);
        assert_eq!(q.get(DirectiveKind::Limit), Some(&Directive::Limit(Some(10))));
        assert_eq!(
            query().limit(None).to_value()["query"],
            json!([["filter", {}], ["limit", null]])
        );
    }

    #[test]
    fn test_offset() {
        assert_eq!(
            query().offset(14).to_value()["query"],
            json!([["filter", {}], ["offset", 14]])
        );
        assert_eq!(
            query().offset(None).to_value()["query"],
            json!([["filter", {}], ["offset", null]])
        );
    }

    #[test]
    fn test_limit_replacement_is_idempotent() {
        let twice = query().limit(3).index("foo").limit(5);
        let once = query().limit(5).index("foo");
        assert_eq!(twice.to_json().unwrap(), once.to_json().unwrap());
        assert_eq!(
            twice.directives().kinds(),
            vec![DirectiveKind::Filter, DirectiveKind::Limit, DirectiveKind::Index]
        );
    }

    #[test]
    fn test_order_string_and_pair() {
        let expected = json!([["filter", {}], ["order_by", ["asc", "foobar"]]]);
        assert_eq!(query().order("foobar asc").to_value()["query"], expected);
        assert_eq!(query().order("foobar").to_value()["query"], expected);
        assert_eq!(query().order(("foobar", "asc")).to_value()["query"], expected);
        assert_eq!(
            query().order(("foobar", SortDirection::Asc)).to_value()["query"],
            expected
        );
    }

    #[test]
    fn test_order_clause_format() {
        let q = query()
            .with_order_format(OrderFormat::Clause)
            .order(("created_at", "desc"));
        assert_eq!(
            q.to_value()["query"],
            json!([["filter", {}], ["order_by", "created_at desc"]])
        );
    }

    #[test]
    fn test_where_string() {
        let q = query().filter("foo <= 1").unwrap();
        assert_eq!(q.filters().get("foo__lte"), Some(&Literal::Float(1.0)));
    }

    #[test]
    fn test_where_hash() {
        let q = query().filter([("cloud_type", "almighty")]).unwrap();
        assert_eq!(
            q.to_value()["query"],
            json!([["filter", {"cloud_type": "almighty"}]])
        );
    }

    #[test]
    fn test_where_merges_distinct_columns() {
        let q = query()
            .filter("rating >= 4")
            .unwrap()
            .filter([("genre", "horror")])
            .unwrap();
        assert_eq!(q.filters().len(), 2);
        assert!(q.filters().contains_key("rating__gte"));
        assert!(q.filters().contains_key("genre"));
    }

    #[test]
    fn test_where_same_column_last_write_wins() {
        let q = query()
            .filter([("genre", "horror")])
            .unwrap()
            .filter("genre = 'comedy'")
            .unwrap();
        assert_eq!(q.filters().len(), 1);
        assert_eq!(q.filters().get("genre"), Some(&Literal::from("comedy")));
    }

    #[test]
    fn test_failed_where_leaves_receiver_untouched() {
        let q = query().filter([("foo", 1)]).unwrap();
        assert!(q.filter("foo <>< 'bar'").is_err());
        assert_eq!(q.filters().len(), 1);
    }

    #[test]
    fn test_select_and_pluck() {
        assert_eq!(
            query().select(["id", "name"]).to_value()["query"],
            json!([["filter", {}], ["pluck", ["id", "name"]]])
        );
        assert_eq!(
            query().select(["id", "name"]).pluck("id").to_value()["query"],
            json!([["filter", {}], ["pluck", ["id"]]])
        );
    }

    #[test]
    fn test_index() {
        assert_eq!(
            query().index("foo").to_value()["query"],
            json!([["filter", {}], ["index", "foo"]])
        );
    }

    #[test]
    fn test_chain_serialization() {
        let json = query()
            .filter([("foo", 1)])
            .unwrap()
            .filter("bar > 2")
            .unwrap()
            .order(("created_at", "desc"))
            .limit(10)
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            r#"{"schema":"test","query":[["filter",{"foo":1,"bar__gt":2}],["order_by",["desc","created_at"]],["limit",10]]}"#
        );
    }

    #[test]
    fn test_branching_does_not_mutate_receiver() {
        let base = query().limit(5);
        let left = base.limit(1);
        let right = base.filter("foo = 1").unwrap();

        assert_eq!(base.get(DirectiveKind::Limit), Some(&Directive::Limit(Some(5))));
        assert!(base.filters().is_empty());
        assert_eq!(left.get(DirectiveKind::Limit), Some(&Directive::Limit(Some(1))));
        assert!(left.filters().is_empty());
        assert_eq!(right.filters().len(), 1);
    }

    #[test]
    fn test_branching_across_threads() {
        let base = query().filter("foo = 1").unwrap();
        let handles: Vec<_> = (0..4u64)
            .map(|n| {
                let base = base.clone();
                std::thread::spawn(move || base.limit(n))
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let q = handle.join().unwrap();
            assert_eq!(q.get(DirectiveKind::Limit), Some(&Directive::Limit(Some(n as u64))));
            assert_eq!(q.filters(), base.filters());
        }
        assert!(base.get(DirectiveKind::Limit).is_none());
    }
}
