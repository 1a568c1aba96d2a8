use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Prefix that marks the unpublished copy of a document.
pub const DRAFT_PREFIX: &str = "drafts.";

/// Identity of a dataset document. A document can exist under two
/// identities at once, the published id and its `drafts.`-prefixed copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("document id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn is_draft(&self) -> bool {
        self.0.starts_with(DRAFT_PREFIX)
    }

    /// The identity without the draft prefix.
    pub fn published_id(&self) -> Self {
        match self.0.strip_prefix(DRAFT_PREFIX) {
            Some(rest) => Self(rest.to_owned()),
            None => self.clone(),
        }
    }

    /// The `drafts.`-prefixed identity.
    pub fn draft_id(&self) -> Self {
        if self.is_draft() {
            self.clone()
        } else {
            Self(format!("{DRAFT_PREFIX}{}", self.0))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

/// Schema type name of a document (`article`, `category`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentType(String);

impl DocumentType {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "document type cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DocumentType> for String {
    fn from(value: DocumentType) -> Self {
        value.0
    }
}

impl TryFrom<String> for DocumentType {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

/// A resolved slug value. Only lowercase ASCII letters, digits and
/// hyphens are admitted; emptiness is expressed by absence, never by an
/// empty slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(DomainError::Validation(format!(
                "slug may only contain lowercase letters, digits and hyphens: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Identities whose slugs do not count as collisions, normally both
/// identity forms of the document being edited.
#[derive(Debug, Clone, Default)]
pub struct ExcludedIds(HashSet<String>);

impl ExcludedIds {
    pub fn none() -> Self {
        Self::default()
    }

    /// Excludes both the published and the draft identity of `id`.
    pub fn for_document(id: &DocumentId) -> Self {
        let mut ids = HashSet::new();
        ids.insert(id.published_id().into());
        ids.insert(id.draft_id().into());
        Self(ids)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}
