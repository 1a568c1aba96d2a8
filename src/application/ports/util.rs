// src/application/ports/util.rs

/// Derives a base slug from raw text.
///
/// Implementations must only emit lowercase ASCII letters, digits and
/// hyphens, and must map whitespace-only input to the empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
