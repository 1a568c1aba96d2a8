//! Core services for a headless content studio: portable-text titles,
//! unique slug resolution, and batch title migrations over NDJSON
//! dataset exports.
//!
//! The crate is layered the same way throughout: `domain` holds the
//! document model and the slug resolver, `application` the command and
//! query services plus the ports they depend on, `infrastructure` the
//! default port implementations and the dataset-backed store, and
//! `presentation` the HTML serializers for portable text.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
