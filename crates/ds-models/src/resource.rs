//! Resources, collections, and response members

use crate::api_error::ApiErrors;
use crate::document::Document;
use crate::schema::Schema;
use crate::token::Token;

/// A single decoded resource
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Token(Token),
    Schema(Schema),
    Document(Document),
    Error(ApiErrors),
}

impl Resource {
    /// Registry label of the resource type
    pub fn label(&self) -> &'static str {
        match self {
            Self::Token(_) => "token",
            Self::Schema(_) => "schema",
            Self::Document(_) => "document",
            Self::Error(_) => "error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            Self::Schema(schema) => Some(schema),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ApiErrors> {
        match self {
            Self::Error(errors) => Some(errors),
            _ => None,
        }
    }
}

/// An ordered list of resources of one type
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Plural label, e.g. "documents"
    pub label: String,
    pub items: Vec<Resource>,
}

impl Collection {
    pub fn new(label: impl Into<String>, items: Vec<Resource>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&Resource> {
        self.items.first()
    }

    /// Check if this is a collection of errors
    pub fn is_error(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(Resource::is_error)
    }
}

impl IntoIterator for Collection {
    type Item = Resource;
    type IntoIter = std::vec::IntoIter<Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// The typed payload of a response
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Resource(Resource),
    Collection(Collection),
}

impl Member {
    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Whether the payload describes an error
    pub fn is_error(&self) -> bool {
        match self {
            Self::Resource(resource) => resource.is_error(),
            Self::Collection(collection) => collection.is_error(),
        }
    }
}
