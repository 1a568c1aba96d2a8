// src/config.rs
use std::env;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::schema;

#[derive(Clone, Debug)]
pub struct StudioConfig {
    dataset_path: PathBuf,
    document_types: Vec<String>,
    api_version: String,
    studio_title: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_document_types() -> Vec<String> {
    schema::document_type_names()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

fn default_api_version() -> String {
    "2023-06-15".into()
}

fn default_studio_title() -> String {
    "Content Studio".into()
}

impl StudioConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let dataset_path = env::var("STUDIO_DATASET")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::Missing("STUDIO_DATASET"))?;

        let document_types = match env::var("STUDIO_DOC_TYPES") {
            Ok(raw) => parse_document_types(&raw)?,
            Err(_) => default_document_types(),
        };

        let api_version =
            env::var("STUDIO_API_VERSION").unwrap_or_else(|_| default_api_version());
        validate_api_version(&api_version)?;

        let studio_title =
            env::var("STUDIO_TITLE").unwrap_or_else(|_| default_studio_title());

        Ok(Self {
            dataset_path,
            document_types,
            api_version,
            studio_title,
        })
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    pub fn document_types(&self) -> &[String] {
        &self.document_types
    }

    /// Pinned date version of the store API that hosted deployments
    /// query with.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn studio_title(&self) -> &str {
        &self.studio_title
    }
}

fn parse_document_types(raw: &str) -> Result<Vec<String>, ConfigError> {
    let types: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect();
    if types.is_empty() {
        return Err(ConfigError::Invalid(
            "STUDIO_DOC_TYPES must name at least one document type".into(),
        ));
    }
    Ok(types)
}

fn validate_api_version(version: &str) -> Result<(), ConfigError> {
    NaiveDate::parse_from_str(version, "%Y-%m-%d").map_err(|_| {
        ConfigError::Invalid(format!(
            "STUDIO_API_VERSION must be a YYYY-MM-DD date, got {version}"
        ))
    })?;
    Ok(())
}
