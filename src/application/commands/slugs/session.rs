// src/application/commands/slugs/session.rs
use std::sync::Arc;

use crate::application::dto::SlugPatch;
use crate::domain::document::services::SlugResolver;
use crate::domain::document::{DocumentType, ExcludedIds, Slug, Title};

/// Editing state of one document's slug field.
///
/// The session starts in auto mode, tracking the projected title text
/// and staging a freshly derived base slug whenever it changes. The
/// first direct edit of the field switches to manual mode for the rest
/// of the session. Every staged value triggers an asynchronous
/// uniqueness check; checks are numbered, and a completed check is only
/// applied while no newer one has been issued since.
pub struct SlugFieldSession {
    resolver: Arc<SlugResolver>,
    doc_type: DocumentType,
    excluded: ExcludedIds,
    mode: SlugMode,
    stored: Option<String>,
    last_title: Option<String>,
    candidate: Option<String>,
    generation: u64,
    checking: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugMode {
    Auto,
    Manual,
}

/// Handle for one issued uniqueness check. Resolve `base` and hand the
/// result back to [`SlugFieldSession::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTicket {
    pub generation: u64,
    pub base: String,
}

/// What a synchronous input demands from the host: an immediate
/// write-back, an asynchronous check, both, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlugFieldUpdate {
    pub patch: Option<SlugPatch>,
    pub check: Option<CheckTicket>,
}

impl SlugFieldUpdate {
    fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.patch.is_none() && self.check.is_none()
    }
}

/// Result of applying a completed uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A newer check was issued after this one; the result is dropped.
    Stale,
    /// The resolved value already matches the stored one.
    Unchanged,
    /// The stored value was overwritten; surface the patch to the user.
    Corrected(SlugPatch),
}

impl SlugFieldSession {
    pub(super) fn new(
        resolver: Arc<SlugResolver>,
        doc_type: DocumentType,
        excluded: ExcludedIds,
        current_slug: Option<&str>,
    ) -> Self {
        Self {
            resolver,
            doc_type,
            excluded,
            mode: SlugMode::Auto,
            stored: current_slug.map(ToOwned::to_owned),
            last_title: None,
            candidate: current_slug.map(ToOwned::to_owned),
            generation: 0,
            checking: false,
        }
    }

    pub fn mode(&self) -> SlugMode {
        self.mode
    }

    pub fn stored(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    pub fn is_checking(&self) -> bool {
        self.checking
    }

    /// Issues a check for the value the session was opened with, so a
    /// stale stored slug is corrected even before anything is edited.
    pub fn open_check(&mut self) -> Option<CheckTicket> {
        let base = self.candidate.clone()?;
        self.generation += 1;
        self.checking = true;
        Some(CheckTicket {
            generation: self.generation,
            base,
        })
    }

    /// Feeds a new title value to the session. In manual mode this is a
    /// no-op; in auto mode a changed projection stages a fresh base.
    pub fn title_changed(&mut self, title: &Title) -> SlugFieldUpdate {
        if self.mode == SlugMode::Manual {
            return SlugFieldUpdate::idle();
        }
        let projected = title.plain_text();
        if self.last_title.as_deref() == Some(projected.as_str()) {
            return SlugFieldUpdate::idle();
        }
        let base = self.resolver.derive_base(&projected);
        self.last_title = Some(projected);
        self.stage(base)
    }

    /// Feeds a direct edit of the slug field. Switches the session to
    /// manual mode, normalizes the input and writes it back right away;
    /// the uniqueness check still runs behind it.
    pub fn slug_edited(&mut self, raw: &str) -> SlugFieldUpdate {
        self.mode = SlugMode::Manual;
        let value = self.resolver.derive_base(raw);
        if value.is_empty() {
            return self.stage(value);
        }
        self.stored = Some(value.clone());
        let mut update = self.stage(value.clone());
        update.patch = set_patch(value);
        update
    }

    /// Resolves `ticket` against the slug index and applies the result.
    pub async fn check(&mut self, ticket: CheckTicket) -> CheckOutcome {
        let resolved = self
            .resolver
            .resolve_unique(&ticket.base, &self.doc_type, &self.excluded)
            .await;
        self.apply(&ticket, resolved)
    }

    /// Applies a completed check. Results of superseded checks are
    /// discarded; a differing resolution overwrites the stored value in
    /// both auto and manual mode.
    pub fn apply(&mut self, ticket: &CheckTicket, resolved: Option<Slug>) -> CheckOutcome {
        if ticket.generation != self.generation {
            return CheckOutcome::Stale;
        }
        self.checking = false;
        match resolved {
            Some(slug) => {
                if self.stored.as_deref() == Some(slug.as_str()) {
                    return CheckOutcome::Unchanged;
                }
                self.stored = Some(slug.as_str().to_owned());
                self.candidate = Some(slug.as_str().to_owned());
                CheckOutcome::Corrected(SlugPatch::Set(slug))
            }
            None => {
                if self.stored.is_none() {
                    return CheckOutcome::Unchanged;
                }
                self.stored = None;
                self.candidate = None;
                CheckOutcome::Corrected(SlugPatch::Unset)
            }
        }
    }

    /// Stages `base` as the candidate value. An unchanged candidate
    /// does nothing; an empty one clears the field and cancels any
    /// in-flight check; a non-empty one issues the next check.
    fn stage(&mut self, base: String) -> SlugFieldUpdate {
        let candidate = if base.is_empty() { None } else { Some(base) };
        if candidate == self.candidate {
            return SlugFieldUpdate::idle();
        }
        self.candidate = candidate;
        self.generation += 1;
        match &self.candidate {
            None => {
                self.checking = false;
                self.stored = None;
                SlugFieldUpdate {
                    patch: Some(SlugPatch::Unset),
                    check: None,
                }
            }
            Some(base) => {
                self.checking = true;
                SlugFieldUpdate {
                    patch: None,
                    check: Some(CheckTicket {
                        generation: self.generation,
                        base: base.clone(),
                    }),
                }
            }
        }
    }
}

fn set_patch(value: String) -> Option<SlugPatch> {
    Slug::new(value).map(SlugPatch::Set).ok()
}
