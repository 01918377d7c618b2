//! localStorage-backed implementation of the preference storage port.

use acesso_core::{AccessibilityPrefs, PrefsStore, StoreError};

use crate::dom;

/// Fixed key the preference record is persisted under. The serialized
/// shape is shared with earlier builds of the site; do not rename.
pub const STORAGE_KEY: &str = "pib_accessibility";

/// Preference store over the browser's `localStorage`.
///
/// Read failures of any kind (storage unavailable, key missing, payload
/// unparsable) surface as `None` and the caller default-fills; write
/// failures become [`StoreError::Backend`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl PrefsStore for LocalStore {
    fn load(&self) -> Option<AccessibilityPrefs> {
        let raw = dom::local_storage()
            .ok()?
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, prefs: &AccessibilityPrefs) -> Result<(), StoreError> {
        let raw = serde_json::to_string(prefs)?;
        let storage = dom::local_storage()
            .map_err(|err| StoreError::Backend(dom::js_error_message(&err)))?;
        storage
            .set_item(STORAGE_KEY, &raw)
            .map_err(|err| StoreError::Backend(dom::js_error_message(&err)))
    }
}
