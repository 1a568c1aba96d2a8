// src/application/commands/titles/service.rs
use std::sync::Arc;

use crate::application::ports::{keys::KeyGenerator, time::Clock};
use crate::domain::document::DocumentSource;

pub struct TitleMigrationService {
    pub(super) source: Arc<dyn DocumentSource>,
    pub(super) keys: Arc<dyn KeyGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TitleMigrationService {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        keys: Arc<dyn KeyGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            keys,
            clock,
        }
    }
}
