use std::sync::Arc;

use stele_core::application::services::StudioServices;
use stele_core::domain::document::services::SlugResolver;
use stele_core::domain::document::{Document, DocumentSource, DocumentType, SlugIndex};
use stele_core::infrastructure::repositories::NdjsonDocumentStore;
use stele_core::infrastructure::util::BaseSlugGenerator;

use crate::support::mocks::{FixedClock, SequentialKeys};

pub fn article_type() -> DocumentType {
    DocumentType::new("article").expect("fixture document type")
}

pub fn store(documents: Vec<Document>) -> Arc<NdjsonDocumentStore> {
    Arc::new(NdjsonDocumentStore::from_documents(documents))
}

/// A resolver over the given index, using the production slugifier.
pub fn resolver(index: Arc<dyn SlugIndex>) -> Arc<SlugResolver> {
    Arc::new(SlugResolver::new(index, Arc::new(BaseSlugGenerator)))
}

/// The full service graph over an in-memory store, with deterministic
/// keys and a fixed clock.
pub fn services(store: &Arc<NdjsonDocumentStore>) -> StudioServices {
    let index: Arc<dyn SlugIndex> = store.clone();
    let source: Arc<dyn DocumentSource> = store.clone();
    StudioServices::new(
        index,
        source,
        Arc::new(BaseSlugGenerator),
        Arc::new(SequentialKeys::default()),
        Arc::new(FixedClock),
    )
}
