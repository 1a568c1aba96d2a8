// src/application/queries/slugs/service.rs
use std::sync::Arc;

use crate::domain::document::services::SlugResolver;

pub struct SlugQueryService {
    pub(super) resolver: Arc<SlugResolver>,
}

impl SlugQueryService {
    pub fn new(resolver: Arc<SlugResolver>) -> Self {
        Self { resolver }
    }
}
