// src/presentation/html/mod.rs
mod serializers;

pub use serializers::{HtmlSerializer, html_escape};
