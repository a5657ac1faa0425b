//! Response Mapping
//!
//! Classifies a raw reply and decodes its payload into a typed [`Member`],
//! once, at construction. The member is reachable under the resource label
//! and its plural.

use std::sync::LazyLock;

use ds_core::{DsError, DsResult, RawResponse};
use ds_models::{pluralize, ApiErrors, Collection, Member, Resource, ResourceRegistry};
use ds_models::{DEFAULT_LABEL, ERROR_LABEL};
use serde_json::{Map, Value};

static DEFAULT_REGISTRY: LazyLock<ResourceRegistry> = LazyLock::new(ResourceRegistry::default);

/// A classified API response
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    body: Value,
    resource_name: String,
    member: Member,
}

impl Response {
    /// Classify a reply using the default resource registry
    pub fn new(status: u16, body: Value, resource_name: impl Into<String>) -> DsResult<Self> {
        Self::with_registry(status, body, resource_name, &DEFAULT_REGISTRY)
    }

    /// Classify a reply labelled with the generic `"resource"` name
    pub fn unlabelled(status: u16, body: Value) -> DsResult<Self> {
        Self::new(status, body, DEFAULT_LABEL)
    }

    /// Classify a raw transport reply
    pub fn from_raw(raw: RawResponse, resource_name: impl Into<String>) -> DsResult<Self> {
        Self::new(raw.status, raw.body, resource_name)
    }

    /// Classify a reply, decoding its member through `registry`
    pub fn with_registry(
        status: u16,
        body: Value,
        resource_name: impl Into<String>,
        registry: &ResourceRegistry,
    ) -> DsResult<Self> {
        let resource_name = resource_name.into();
        let body = normalize_body(body);
        let member = match resolve_member(registry, &resource_name, body.clone()) {
            Ok(member) => member,
            Err(DsError::Decode(e)) if !status_success(status) => {
                tracing::warn!(
                    status,
                    resource = %resource_name,
                    error = %e,
                    "Failure response did not decode as resource, keeping it as an error"
                );
                Member::Resource(Resource::Error(ApiErrors {
                    errors: body.clone(),
                }))
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            status,
            resource = %resource_name,
            error = member.is_error(),
            "Classified response"
        );

        Ok(Self {
            status,
            body,
            resource_name,
            member,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// The normalized body
    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// False when the body reports errors, otherwise whether the status is 2xx
    pub fn is_success(&self) -> bool {
        if has_errors(&self.body) {
            return false;
        }
        status_success(self.status)
    }

    /// The decoded payload
    pub fn members(&self) -> &Member {
        &self.member
    }

    pub fn into_members(self) -> Member {
        self.member
    }

    /// Check if `name` addresses the payload
    pub fn responds_to(&self, name: &str) -> bool {
        name == self.resource_name || name == pluralize(&self.resource_name)
    }

    /// The payload, addressed by the singular or plural resource label.
    ///
    /// Any other name fails with [`DsError::UndefinedMember`].
    pub fn member(&self, name: &str) -> DsResult<&Member> {
        if self.responds_to(name) {
            Ok(&self.member)
        } else {
            Err(DsError::undefined_member(name))
        }
    }

    /// The payload as a single resource, addressed like [`Response::member`]
    pub fn resource(&self, name: &str) -> DsResult<&Resource> {
        self.member(name)?
            .as_resource()
            .ok_or_else(|| DsError::undefined_member(name))
    }

    /// The payload as a collection, addressed like [`Response::member`]
    pub fn collection(&self, name: &str) -> DsResult<&Collection> {
        self.member(name)?
            .as_collection()
            .ok_or_else(|| DsError::undefined_member(name))
    }
}

fn status_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn has_errors(body: &Value) -> bool {
    body.as_object().is_some_and(|fields| fields.contains_key("errors"))
}

/// Objects unwrap to their `data` field when present; null becomes an empty list
fn normalize_body(body: Value) -> Value {
    match body {
        Value::Object(mut fields) => {
            if fields.get("data").is_some_and(|data| !data.is_null()) {
                fields.shift_remove("data").unwrap_or(Value::Null)
            } else {
                Value::Object(fields)
            }
        }
        Value::Null => Value::Array(vec![]),
        other => other,
    }
}

/// Copy `_meta.created` / `_meta.modified` into `created_at` / `updated_at`
fn remap_meta(fields: &mut Map<String, Value>) {
    let Some(meta) = fields.get("_meta").and_then(Value::as_object) else {
        return;
    };
    let created = meta.get("created").cloned().unwrap_or(Value::Null);
    let modified = meta.get("modified").cloned().unwrap_or(Value::Null);
    fields.insert("created_at".to_string(), created);
    fields.insert("updated_at".to_string(), modified);
}

fn resolve_member(registry: &ResourceRegistry, label: &str, body: Value) -> DsResult<Member> {
    match body {
        Value::Array(items) => {
            let collection = if items.iter().any(has_errors) {
                registry.build_collection(ERROR_LABEL, items)?
            } else {
                registry.build_collection(label, items)?
            };
            Ok(Member::Collection(collection))
        }
        Value::Object(mut fields) => {
            remap_meta(&mut fields);
            let label = if fields.contains_key("errors") {
                ERROR_LABEL
            } else {
                label
            };
            registry.build_member(label, Value::Object(fields))
        }
        other => registry.build_member(label, other),
    }
}
