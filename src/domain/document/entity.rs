// src/domain/document/entity.rs
use crate::domain::document::title::Title;
use crate::domain::document::value_objects::{DocumentId, DocumentType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One document of a dataset export.
///
/// Only the fields this crate works with are modeled; everything else a
/// document carries is kept in `extra` so nothing is dropped when a
/// record passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(rename = "_type")]
    pub doc_type: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<SlugField>,
    #[serde(rename = "_createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// The stored slug value, when the slug field is present and set.
    pub fn slug_value(&self) -> Option<&str> {
        self.slug.as_ref()?.current.as_deref()
    }
}

/// The stored shape of a slug field, an object holding `current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlugField {
    #[serde(rename = "_type", default = "slug_field_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
}

impl SlugField {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            kind: slug_field_type(),
            current: Some(current.into()),
        }
    }
}

fn slug_field_type() -> String {
    "slug".to_owned()
}
