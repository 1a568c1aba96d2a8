use crate::domain::document::entity::Document;
use crate::domain::document::value_objects::DocumentType;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// One row of the slug index: a document identity and its stored slug.
/// Values come back raw; drafts keep their `drafts.` prefix and stored
/// slugs are not revalidated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugEntry {
    pub id: String,
    pub slug: String,
}

#[async_trait]
pub trait SlugIndex: Send + Sync {
    /// All slug entries for documents of `doc_type` whose slug is set.
    async fn slug_entries(&self, doc_type: &DocumentType) -> DomainResult<Vec<SlugEntry>>;
}

#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn documents_of_type(&self, doc_type: &DocumentType) -> DomainResult<Vec<Document>>;
}
