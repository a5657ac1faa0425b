//! Document resource
//!
//! A schemaless record. Known bookkeeping fields are typed when they can be
//! read; everything else stays in `attributes`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use ds_core::traits::Timestamped;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Timestamp layouts accepted besides RFC 3339
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// A stored document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Remaining fields, in server order
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Document {
    /// Get an attribute by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field)
    }

    /// Get a string attribute
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(mut attributes: Map<String, Value>) -> Self {
        let id = take_field(&mut attributes, "id", read_id);
        let created_at = take_field(&mut attributes, "created_at", read_timestamp);
        let updated_at = take_field(&mut attributes, "updated_at", read_timestamp);
        Self {
            id,
            created_at,
            updated_at,
            attributes,
        }
    }
}

impl Timestamped for Document {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// Remove `key` when `read` understands it or it is null; otherwise leave it in place
fn take_field<T>(
    fields: &mut Map<String, Value>,
    key: &str,
    read: fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = fields.get(key)?;
    if value.is_null() {
        fields.shift_remove(key);
        return None;
    }
    let parsed = read(value)?;
    fields.shift_remove(key);
    Some(parsed)
}

fn read_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// RFC 3339, naive UTC date-times, or epoch seconds
fn read_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|at| at.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NAIVE_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                    .map(|naive| Utc.from_utc_datetime(&naive))
            }),
        Value::Number(seconds) => seconds
            .as_i64()
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0)),
        _ => None,
    }
}
