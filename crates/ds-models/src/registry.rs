//! Resource Registry
//!
//! Maps resource labels to decoders. Plural labels resolve to collections of
//! the singular type.

use std::collections::HashMap;

use ds_core::{DsError, DsResult};
use serde_json::Value;

use crate::resource::{Collection, Member, Resource};

/// Label of the error resource
pub const ERROR_LABEL: &str = "error";

/// Label used when a response names no resource
pub const DEFAULT_LABEL: &str = "resource";

/// Decodes a JSON body into a resource
pub type ResourceFactory = fn(Value) -> Result<Resource, serde_json::Error>;

/// Plural form of a resource label
pub fn pluralize(label: &str) -> String {
    format!("{}s", label)
}

fn token(value: Value) -> Result<Resource, serde_json::Error> {
    serde_json::from_value(value).map(Resource::Token)
}

fn schema(value: Value) -> Result<Resource, serde_json::Error> {
    serde_json::from_value(value).map(Resource::Schema)
}

fn document(value: Value) -> Result<Resource, serde_json::Error> {
    serde_json::from_value(value).map(Resource::Document)
}

fn error(value: Value) -> Result<Resource, serde_json::Error> {
    serde_json::from_value(value).map(Resource::Error)
}

/// Lookup table from resource label to decoder
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    factories: HashMap<String, ResourceFactory>,
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("token", token)
            .register("schema", schema)
            .register("document", document)
            .register(ERROR_LABEL, error);
        registry
    }
}

impl ResourceRegistry {
    /// Create a registry with no labels
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a decoder for a singular label
    pub fn register(&mut self, label: impl Into<String>, factory: ResourceFactory) -> &mut Self {
        self.factories.insert(label.into(), factory);
        self
    }

    /// Check if a label has its own decoder
    pub fn is_registered(&self, label: &str) -> bool {
        self.factories.contains_key(label)
    }

    /// Decoder for a label; unknown labels decode as plain documents
    pub fn find(&self, label: &str) -> ResourceFactory {
        self.factories.get(label).copied().unwrap_or(document)
    }

    /// Decode one resource
    pub fn build(&self, label: &str, value: Value) -> DsResult<Resource> {
        (self.find(label))(value).map_err(DsError::Decode)
    }

    /// Decode a list of resources into a collection labelled with the plural form
    pub fn build_collection(&self, label: &str, values: Vec<Value>) -> DsResult<Collection> {
        let items = values
            .into_iter()
            .map(|value| self.build(label, value))
            .collect::<DsResult<Vec<_>>>()?;
        Ok(Collection::new(pluralize(label), items))
    }

    /// Decode a normalized body: arrays become collections, anything else a single resource
    pub fn build_member(&self, label: &str, body: Value) -> DsResult<Member> {
        match body {
            Value::Array(values) => self.build_collection(label, values).map(Member::Collection),
            other => self.build(label, other).map(Member::Resource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("token"), "tokens");
        assert_eq!(pluralize("document"), "documents");
    }

    #[test]
    fn test_default_labels() {
        let registry = ResourceRegistry::default();
        for label in ["token", "schema", "document", ERROR_LABEL] {
            assert!(registry.is_registered(label), "{} should be registered", label);
        }
        assert!(!registry.is_registered("movie"));
    }

    #[test]
    fn test_build_token() {
        let registry = ResourceRegistry::default();
        let resource = registry.build("token", json!({"token": "X"})).unwrap();
        assert_eq!(resource.as_token().map(|t| t.value()), Some("X"));
    }

    #[test]
    fn test_unknown_label_decodes_as_document() {
        let registry = ResourceRegistry::default();
        let resource = registry.build("movie", json!({"title": "Jaws"})).unwrap();
        assert_eq!(resource.as_document().and_then(|d| d.get_str("title")), Some("Jaws"));
    }

    #[test]
    fn test_build_collection() {
        let registry = ResourceRegistry::default();
        let member = registry
            .build_member("document", json!([{"id": "1"}, {"id": "2"}]))
            .unwrap();
        let collection = member.as_collection().unwrap();
        assert_eq!(collection.label, "documents");
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_decode_failure() {
        let registry = ResourceRegistry::default();
        let err = registry.build("token", json!({"value": 1})).unwrap_err();
        assert!(matches!(err, DsError::Decode(_)));
    }

    #[test]
    fn test_custom_factory() {
        fn always_error(_: Value) -> Result<Resource, serde_json::Error> {
            Ok(Resource::Error(Default::default()))
        }

        let mut registry = ResourceRegistry::empty();
        registry.register("broken", always_error);
        assert!(registry.build("broken", json!({})).unwrap().is_error());
    }
}
