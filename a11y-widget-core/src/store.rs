//! Persistence capability for widget settings

/// Trait for abstracting the browser-local key-value store.
/// Platform-specific implementations should provide this.
pub trait SettingsStore {
    type Error: std::error::Error + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store rejects the removal.
    fn delete(&self, key: &str) -> Result<(), Self::Error>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        (**self).delete(key)
    }
}

/// Read `key`, logging and discarding store failures.
pub fn read_or_none<S: SettingsStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to read setting {key}: {err}");
            None
        }
    }
}

/// Write `key`, logging failures.
pub fn write_or_log<S: SettingsStore>(store: &S, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        log::warn!("failed to persist setting {key}={value}: {err}");
    }
}

/// Delete `key`, logging failures.
pub fn delete_or_log<S: SettingsStore>(store: &S, key: &str) {
    if let Err(err) = store.delete(key) {
        log::warn!("failed to delete setting {key}: {err}");
    }
}
