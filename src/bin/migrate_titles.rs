// src/bin/migrate_titles.rs
//! Plans the plain-string to rich-text title migration for a dataset
//! export and writes the resulting mutations to stdout as NDJSON, one
//! `patch` per line. Logs go to stderr so the mutation stream stays
//! clean for piping.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stele_core::application::commands::titles::MigrateTitlesCommand;
use stele_core::application::ports::{keys::KeyGenerator, time::Clock, util::SlugGenerator};
use stele_core::application::services::StudioServices;
use stele_core::config::StudioConfig;
use stele_core::domain::document::{DocumentSource, SlugIndex};
use stele_core::infrastructure::repositories::NdjsonDocumentStore;
use stele_core::infrastructure::time::SystemClock;
use stele_core::infrastructure::util::{BaseSlugGenerator, UuidKeyGenerator};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = StudioConfig::from_env()?;
    tracing::info!(
        dataset = %config.dataset_path().display(),
        api_version = config.api_version(),
        studio = config.studio_title(),
        "planning title migration"
    );

    let store = Arc::new(NdjsonDocumentStore::from_path(config.dataset_path())?);
    tracing::info!(documents = store.len(), "dataset loaded");

    let slug_index: Arc<dyn SlugIndex> = store.clone();
    let document_source: Arc<dyn DocumentSource> = store;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(BaseSlugGenerator);
    let keys: Arc<dyn KeyGenerator> = Arc::new(UuidKeyGenerator);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = StudioServices::new(slug_index, document_source, slugger, keys, clock);

    let plan = services
        .title_migration
        .plan(MigrateTitlesCommand {
            document_types: config.document_types().to_vec(),
        })
        .await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for mutation in &plan.mutations {
        let line = serde_json::to_string(mutation).context("serialize mutation")?;
        writeln!(out, "{line}").context("write mutation")?;
    }

    for stats in &plan.stats {
        tracing::info!(
            doc_type = %stats.doc_type,
            scanned = stats.scanned,
            planned = stats.planned,
            already_rich = stats.already_rich,
            missing_title = stats.missing_title,
            unsupported = stats.unsupported,
            "type summary"
        );
    }
    tracing::info!(
        mutations = plan.mutations.len(),
        generated_at = %plan.generated_at,
        "title migration planned"
    );

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
