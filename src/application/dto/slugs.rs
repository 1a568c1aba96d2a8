// src/application/dto/slugs.rs
use crate::domain::document::Slug;
use serde::{Deserialize, Serialize};

/// Write instruction for a slug field. `Unset` clears the field;
/// an empty slug value is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugPatch {
    Set(Slug),
    Unset,
}

/// Outcome of a one-shot slug generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugResolutionDto {
    /// `None` means the field should be cleared.
    pub slug: Option<String>,
}

impl From<Option<Slug>> for SlugResolutionDto {
    fn from(slug: Option<Slug>) -> Self {
        Self {
            slug: slug.map(String::from),
        }
    }
}
