//! Storage port for the preference record.
//!
//! The state machine never talks to a concrete backend; it goes through
//! [`PrefsStore`] so the merge/apply logic is testable without a browser.
//! The web crate provides the localStorage-backed implementation.

use std::cell::RefCell;

use thiserror::Error;

use crate::prefs::AccessibilityPrefs;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused or failed the write (quota, access denial).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The record could not be serialized for storage.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence port for [`AccessibilityPrefs`].
///
/// `load` returns `None` for missing, unreadable, or unparsable persisted
/// data; the caller falls back to the default record in every one of those
/// cases. `save` failures are swallowed by the caller (logged, then
/// dropped) so the in-memory state still takes effect for the session.
pub trait PrefsStore {
    fn load(&self) -> Option<AccessibilityPrefs>;

    /// Persist the full record.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the record cannot be serialized or the
    /// backend rejects the write.
    fn save(&self, prefs: &AccessibilityPrefs) -> Result<(), StoreError>;
}

/// Load the persisted record, falling back to the default on any failure.
#[must_use]
pub fn load_or_default<S: PrefsStore>(store: &S) -> AccessibilityPrefs {
    store.load().unwrap_or_default()
}

/// In-memory JSON-backed store for tests and non-browser hosts.
///
/// Holds the serialized payload rather than the record itself so it
/// exercises the same parse-or-fallback path the real backend does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw payload, valid or not.
    #[must_use]
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: RefCell::new(Some(payload.to_string())),
        }
    }
}

impl PrefsStore for MemoryStore {
    fn load(&self) -> Option<AccessibilityPrefs> {
        self.payload
            .borrow()
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    fn save(&self, prefs: &AccessibilityPrefs) -> Result<(), StoreError> {
        let raw = serde_json::to_string(prefs)?;
        *self.payload.borrow_mut() = Some(raw);
        Ok(())
    }
}
