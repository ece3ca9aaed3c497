//! Headless implementations of [`SettingsStore`] and [`UiBinding`]
//!
//! These let the widget run without a browser: the store is an in-memory map
//! and the page is a small model of `<body>` classes, inline styles and the
//! overlay count. Clones share the same underlying data so callers can keep a
//! handle for inspection after moving one into a [`crate::Widget`].

use crate::binding::UiBinding;
use crate::settings::{FontSize, NAMESPACE};
use crate::store::SettingsStore;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeadlessError {
    #[error("store is read-only")]
    ReadOnly,
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.borrow_mut();
            for (key, value) in pairs {
                inner.entries.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    /// Reject writes and deletes, as a full or disabled browser store would.
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
    }

    /// Write directly, bypassing the read-only flag. Used to simulate
    /// corruption or another tab's writes.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    #[must_use]
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.inner.borrow().entries.clone()
    }

    /// Keys that belong to the widget namespace.
    #[must_use]
    pub fn namespaced_keys(&self) -> Vec<String> {
        self.inner
            .borrow()
            .entries
            .keys()
            .filter(|k| k.starts_with(NAMESPACE))
            .cloned()
            .collect()
    }
}

impl SettingsStore for MemoryStore {
    type Error = HeadlessError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut inner = self.inner.borrow_mut();
        if inner.read_only {
            return Err(HeadlessError::ReadOnly);
        }
        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        let mut inner = self.inner.borrow_mut();
        if inner.read_only {
            return Err(HeadlessError::ReadOnly);
        }
        inner.entries.remove(key);
        Ok(())
    }
}

/// Observable page state produced by a [`HeadlessPage`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageSnapshot {
    pub body_classes: BTreeSet<String>,
    /// Inline root font-size, e.g. `"130%"`.
    pub root_font_size: Option<String>,
    /// Inline body font-family; `None` when cleared.
    pub body_font_family: Option<String>,
    /// Number of reading-guide overlay nodes currently attached.
    pub overlays: usize,
}

impl PageSnapshot {
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    #[must_use]
    pub fn namespaced_classes(&self) -> Vec<&str> {
        self.body_classes
            .iter()
            .filter(|c| c.starts_with(NAMESPACE))
            .map(String::as_str)
            .collect()
    }
}

/// Page model that records every mutation like a DOM would.
///
/// `create_overlay` appends a new node each call, the way a raw
/// `appendChild` does, so double creation is observable.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    model: Rc<RefCell<PageSnapshot>>,
}

impl HeadlessPage {
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        self.model.borrow().clone()
    }

    /// Remove the overlay behind the widget's back, as other page script might.
    pub fn remove_overlay_externally(&self) {
        let mut model = self.model.borrow_mut();
        model.overlays = model.overlays.saturating_sub(1);
    }
}

impl UiBinding for HeadlessPage {
    fn add_class(&self, class: &str) {
        self.model.borrow_mut().body_classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.model.borrow_mut().body_classes.remove(class);
    }

    fn set_root_font_size(&self, size: FontSize) {
        self.model.borrow_mut().root_font_size = Some(size.css());
    }

    fn set_body_font_family(&self, stack: Option<&str>) {
        self.model.borrow_mut().body_font_family = stack.map(str::to_string);
    }

    fn create_overlay(&self) {
        self.model.borrow_mut().overlays += 1;
    }

    fn remove_overlay(&self) {
        let mut model = self.model.borrow_mut();
        model.overlays = model.overlays.saturating_sub(1);
    }
}
