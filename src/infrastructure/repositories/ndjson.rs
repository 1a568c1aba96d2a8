// src/infrastructure/repositories/ndjson.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use async_trait::async_trait;

use crate::domain::document::{Document, DocumentType, SlugEntry};
use crate::domain::document::repository::{DocumentSource, SlugIndex};
use crate::domain::errors::{DomainError, DomainResult};

/// Read-only document store backed by an NDJSON dataset export, one
/// document per line.
///
/// Lines that fail to parse are logged and skipped so a single damaged
/// record never blocks batch work over the rest of the dataset.
pub struct NdjsonDocumentStore {
    documents: Vec<Document>,
}

impl NdjsonDocumentStore {
    pub fn from_path(path: &Path) -> DomainResult<Self> {
        let file = File::open(path).map_err(|err| {
            DomainError::Persistence(format!("open dataset {}: {err}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> DomainResult<Self> {
        let mut documents = Vec::new();
        let mut skipped = 0usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line
                .map_err(|err| DomainError::Persistence(format!("read dataset: {err}")))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<Document>(line) {
                Ok(document) => documents.push(document),
                Err(error) => {
                    skipped += 1;
                    tracing::warn!(line = index + 1, %error, "skipping malformed dataset line");
                }
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "dataset contained malformed lines");
        }
        Ok(Self { documents })
    }

    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl SlugIndex for NdjsonDocumentStore {
    async fn slug_entries(&self, doc_type: &DocumentType) -> DomainResult<Vec<SlugEntry>> {
        Ok(self
            .documents
            .iter()
            .filter(|document| document.doc_type == *doc_type)
            .filter_map(|document| {
                document.slug_value().map(|slug| SlugEntry {
                    id: document.id.as_str().to_owned(),
                    slug: slug.to_owned(),
                })
            })
            .collect())
    }
}

#[async_trait]
impl DocumentSource for NdjsonDocumentStore {
    async fn documents_of_type(&self, doc_type: &DocumentType) -> DomainResult<Vec<Document>> {
        Ok(self
            .documents
            .iter()
            .filter(|document| document.doc_type == *doc_type)
            .cloned()
            .collect())
    }
}
