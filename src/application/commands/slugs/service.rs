// src/application/commands/slugs/service.rs
use std::sync::Arc;

use super::session::SlugFieldSession;
use crate::domain::document::services::SlugResolver;
use crate::domain::document::{DocumentId, DocumentType, ExcludedIds};

pub struct SlugCommandService {
    pub(super) resolver: Arc<SlugResolver>,
}

impl SlugCommandService {
    pub fn new(resolver: Arc<SlugResolver>) -> Self {
        Self { resolver }
    }

    /// Opens an editing session for one document's slug field.
    ///
    /// `document_id` is absent for documents that have never been
    /// saved; such sessions exclude nothing from uniqueness checks.
    pub fn open_session(
        &self,
        doc_type: DocumentType,
        document_id: Option<&DocumentId>,
        current_slug: Option<&str>,
    ) -> SlugFieldSession {
        let excluded = document_id.map_or_else(ExcludedIds::none, ExcludedIds::for_document);
        SlugFieldSession::new(
            Arc::clone(&self.resolver),
            doc_type,
            excluded,
            current_slug,
        )
    }
}
