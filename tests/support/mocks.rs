use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use stele_core::application::ports::keys::KeyGenerator;
use stele_core::application::ports::time::Clock;
use stele_core::domain::document::{DocumentType, SlugEntry, SlugIndex};
use stele_core::domain::errors::{DomainError, DomainResult};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("valid fixture timestamp")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Deterministic key generator producing `prefix_000000000`, `prefix_000000001`, ...
#[derive(Default)]
pub struct SequentialKeys {
    counter: AtomicU64,
}

impl KeyGenerator for SequentialKeys {
    fn generate(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}_{n:09}")
    }
}

/// Slug index serving a fixed set of entries for a single document type.
pub struct StaticSlugIndex {
    doc_type: String,
    entries: Vec<SlugEntry>,
}

impl StaticSlugIndex {
    pub fn new(doc_type: &str, pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(id, slug)| SlugEntry {
                id: (*id).to_owned(),
                slug: (*slug).to_owned(),
            })
            .collect();
        Self {
            doc_type: doc_type.to_owned(),
            entries,
        }
    }
}

#[async_trait]
impl SlugIndex for StaticSlugIndex {
    async fn slug_entries(&self, doc_type: &DocumentType) -> DomainResult<Vec<SlugEntry>> {
        if doc_type.as_str() == self.doc_type {
            Ok(self.entries.clone())
        } else {
            Ok(Vec::new())
        }
    }
}

/// Slug index that always fails, for exercising the keep-base fallback.
pub struct FailingSlugIndex;

#[async_trait]
impl SlugIndex for FailingSlugIndex {
    async fn slug_entries(&self, _doc_type: &DocumentType) -> DomainResult<Vec<SlugEntry>> {
        Err(DomainError::Persistence("slug index unreachable".into()))
    }
}

/// Empty slug index that records how many times it was queried.
#[derive(Default)]
pub struct CountingSlugIndex {
    calls: AtomicUsize,
}

impl CountingSlugIndex {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SlugIndex for CountingSlugIndex {
    async fn slug_entries(&self, _doc_type: &DocumentType) -> DomainResult<Vec<SlugEntry>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(Vec::new())
    }
}
