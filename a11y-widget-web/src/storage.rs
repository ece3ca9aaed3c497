//! `localStorage`-backed settings store

use crate::dom;
use a11y_widget_core::SettingsStore;

/// Web-specific settings storage using `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorageStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, WebStorageError> {
        dom::local_storage()
            .map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))?
            .ok_or_else(|| WebStorageError::Unavailable("localStorage unavailable".to_string()))
    }
}

impl SettingsStore for LocalStorageStore {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn store_reports_unavailable_outside_browser() {
        let err = LocalStorageStore.get("accessibility-font-size").unwrap_err();
        assert!(matches!(err, WebStorageError::Unavailable(_)));
        assert!(LocalStorageStore.set("accessibility-font-size", "110").is_err());
        assert!(LocalStorageStore.delete("accessibility-font-size").is_err());
    }
}
