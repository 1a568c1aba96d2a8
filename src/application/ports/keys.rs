// src/application/ports/keys.rs

/// Produces `_key` values for newly created portable-text members.
///
/// Keys take the shape `{prefix}_{suffix}` with a short random suffix;
/// they only need to be unique within one document field.
pub trait KeyGenerator: Send + Sync {
    fn generate(&self, prefix: &str) -> String;
}
