// src/application/dto/titles.rs
use crate::domain::portable_text::ContentNode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One mutation line of a migration plan: a `set` patch replacing a
/// document's plain-string title with its rich-text equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleMutationDto {
    pub patch: TitlePatchDto,
}

impl TitleMutationDto {
    pub fn new(id: impl Into<String>, title: Vec<ContentNode>) -> Self {
        Self {
            patch: TitlePatchDto {
                id: id.into(),
                set: TitleSetDto { title },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitlePatchDto {
    pub id: String,
    pub set: TitleSetDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSetDto {
    pub title: Vec<ContentNode>,
}

/// A full migration plan over one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationPlanDto {
    pub generated_at: DateTime<Utc>,
    pub mutations: Vec<TitleMutationDto>,
    pub stats: Vec<TypeStatsDto>,
}

/// Per-type counters of a migration plan. `scanned` is the sum of the
/// other four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeStatsDto {
    pub doc_type: String,
    pub scanned: usize,
    pub planned: usize,
    pub already_rich: usize,
    pub missing_title: usize,
    pub unsupported: usize,
}
