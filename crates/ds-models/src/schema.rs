//! Schema resource
//!
//! Describes one collection of documents and its fields.

use serde::{Deserialize, Serialize};

/// A document schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

/// A single field of a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,

    /// Field type as reported by the server (e.g. "text", "numeric")
    #[serde(default)]
    pub datatype: String,

    #[serde(default)]
    pub indexed: bool,

    #[serde(default)]
    pub required: bool,
}

impl Schema {
    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the indexed fields
    pub fn indexed_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.indexed)
            .map(|f| f.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_from_body() {
        let schema: Schema = serde_json::from_value(json!({
            "name": "movies",
            "fields": [
                {"name": "title", "datatype": "text", "indexed": true, "required": true},
                {"name": "rating", "datatype": "numeric"}
            ]
        }))
        .unwrap();

        assert_eq!(schema.name, "movies");
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.indexed_fields(), vec!["title"]);
        assert!(!schema.field("rating").unwrap().required);
    }
}
