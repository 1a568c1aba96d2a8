// src/application/commands/titles/mod.rs
mod migrate;
mod service;

pub use migrate::MigrateTitlesCommand;
pub use service::TitleMigrationService;
