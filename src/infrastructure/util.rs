// src/infrastructure/util.rs
//! Default implementations of the small application ports.

use crate::application::ports::{keys::KeyGenerator, util::SlugGenerator};
use uuid::Uuid;

/// The studio's slug derivation: lowercase, trim, collapse each
/// whitespace run to one hyphen, drop everything outside `[a-z0-9-]`.
/// Non-ASCII letters are dropped, not transliterated.
#[derive(Default, Clone)]
pub struct BaseSlugGenerator;

impl SlugGenerator for BaseSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let trimmed = lowered.trim();
        let mut out = String::with_capacity(trimmed.len());
        let mut pending_hyphen = false;
        for ch in trimmed.chars() {
            if ch.is_whitespace() {
                pending_hyphen = true;
                continue;
            }
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
                out.push(ch);
            }
        }
        out
    }
}

/// Key generator producing `{prefix}_{nine hex chars}` from random
/// UUIDs, matching the key shape of studio-authored content.
#[derive(Default, Clone)]
pub struct UuidKeyGenerator;

impl KeyGenerator for UuidKeyGenerator {
    fn generate(&self, prefix: &str) -> String {
        let id = Uuid::new_v4().simple().to_string();
        format!("{prefix}_{}", &id[..9])
    }
}
