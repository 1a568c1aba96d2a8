// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{slugs::SlugCommandService, titles::TitleMigrationService},
        ports::{keys::KeyGenerator, time::Clock, util::SlugGenerator},
        queries::slugs::SlugQueryService,
    },
    domain::document::{DocumentSource, SlugIndex, services::SlugResolver},
};

/// Wired-up service graph of the studio core. One slug resolver is
/// shared by the command and query sides.
pub struct StudioServices {
    pub slug_commands: Arc<SlugCommandService>,
    pub slug_queries: Arc<SlugQueryService>,
    pub title_migration: Arc<TitleMigrationService>,
}

impl StudioServices {
    pub fn new(
        slug_index: Arc<dyn SlugIndex>,
        document_source: Arc<dyn DocumentSource>,
        slugger: Arc<dyn SlugGenerator>,
        keys: Arc<dyn KeyGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let resolver = Arc::new(SlugResolver::new(Arc::clone(&slug_index), Arc::clone(&slugger)));

        let slug_commands = Arc::new(SlugCommandService::new(Arc::clone(&resolver)));
        let slug_queries = Arc::new(SlugQueryService::new(Arc::clone(&resolver)));
        let title_migration = Arc::new(TitleMigrationService::new(
            Arc::clone(&document_source),
            Arc::clone(&keys),
            Arc::clone(&clock),
        ));

        Self {
            slug_commands,
            slug_queries,
            title_migration,
        }
    }
}
