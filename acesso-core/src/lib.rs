//! acesso core
//!
//! Platform-agnostic logic for the acesso page-enhancement layer: the
//! accessibility preference record and its action dispatch, derivation of
//! visual effects from that record, the storage port the web layer plugs
//! into, and the PDF document path mapping.

#![forbid(unsafe_code)]

pub mod effects;
pub mod pdf;
pub mod prefs;
pub mod store;

// Re-export commonly used types
pub use effects::{MARKER_CLASSES, filter_chain, font_size_pct, marker_classes};
pub use pdf::document_path;
pub use prefs::{Action, AccessibilityPrefs, Dalton, FONT_SCALE_MAX, FONT_SCALE_MIN};
pub use store::{MemoryStore, PrefsStore, StoreError, load_or_default};
