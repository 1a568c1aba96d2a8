// src/domain/document/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::document::repository::SlugIndex;
use crate::domain::document::value_objects::{DocumentType, ExcludedIds, Slug};

/// Domain service responsible for producing unique slugs for documents.
///
/// Uniqueness is resolved against the slug index for the document's
/// type, ignoring the entries that belong to the document being edited
/// (its draft and published identities both).
pub struct SlugResolver {
    index: Arc<dyn SlugIndex>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugResolver {
    pub fn new(index: Arc<dyn SlugIndex>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { index, generator }
    }

    /// Derives the base slug for a raw title text, without touching the
    /// index.
    pub fn derive_base(&self, input: &str) -> String {
        self.generator.slugify(input)
    }

    /// Derives the base slug for `input` and resolves it to a value
    /// unique among documents of `doc_type`.
    ///
    /// Returns `None` when the input yields an empty base, meaning the
    /// slug field should be cleared rather than set. If the base is
    /// already taken by a non-excluded document, a numeric suffix one
    /// past the highest suffix in use is appended; the bare base counts
    /// as suffix 1, so the first duplicate becomes `base-2` and gaps in
    /// the sequence are never reused. When the index cannot be read the
    /// bare base is kept instead of failing the edit.
    pub async fn resolve_unique(
        &self,
        input: &str,
        doc_type: &DocumentType,
        excluded: &ExcludedIds,
    ) -> Option<Slug> {
        let base = self.generator.slugify(input);
        if base.is_empty() {
            return None;
        }

        let entries = match self.index.slug_entries(doc_type).await {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(%doc_type, %error, "slug index unavailable, keeping base slug");
                return Slug::new(base).ok();
            }
        };

        let taken: Vec<&str> = entries
            .iter()
            .filter(|entry| !excluded.contains(&entry.id))
            .map(|entry| entry.slug.as_str())
            .collect();

        if !taken.iter().any(|slug| *slug == base) {
            return Slug::new(base).ok();
        }

        let mut highest = 1u64;
        for slug in &taken {
            if let Some(n) = suffix_number(slug, &base) {
                highest = highest.max(n);
            }
        }

        Slug::new(format!("{base}-{}", highest + 1)).ok()
    }
}

/// Parses the numeric suffix of `slug` relative to `base`, accepting
/// only the exact shape `{base}-{digits}`.
fn suffix_number(slug: &str, base: &str) -> Option<u64> {
    let digits = slug.strip_prefix(base)?.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // A suffix at u64::MAX has no successor; treat it as non-numeric.
    digits.parse().ok().filter(|&n| n < u64::MAX)
}
