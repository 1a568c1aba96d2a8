// src/application/queries/slugs/generate.rs
use super::SlugQueryService;
use crate::{
    application::{dto::SlugResolutionDto, error::ApplicationResult},
    domain::document::{DocumentId, DocumentType, ExcludedIds, Title},
};

/// One-shot slug generation for a title value, the "generate" button
/// path. The title may still be a plain string or already rich text.
pub struct GenerateSlugQuery {
    pub title: Title,
    pub doc_type: String,
    /// Identity of the document being edited, when it already exists.
    /// Its own slug never counts as a collision.
    pub document_id: Option<String>,
}

impl SlugQueryService {
    pub async fn generate_slug(
        &self,
        query: GenerateSlugQuery,
    ) -> ApplicationResult<SlugResolutionDto> {
        let doc_type = DocumentType::new(query.doc_type)?;
        let excluded = match query.document_id {
            Some(id) => ExcludedIds::for_document(&DocumentId::new(id)?),
            None => ExcludedIds::none(),
        };
        let text = query.title.plain_text();
        let resolved = self
            .resolver
            .resolve_unique(&text, &doc_type, &excluded)
            .await;
        Ok(resolved.into())
    }
}
