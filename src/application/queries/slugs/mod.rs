// src/application/queries/slugs/mod.rs
mod generate;
mod service;

pub use generate::GenerateSlugQuery;
pub use service::SlugQueryService;
