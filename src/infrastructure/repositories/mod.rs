// src/infrastructure/repositories/mod.rs
mod ndjson;

pub use ndjson::NdjsonDocumentStore;
