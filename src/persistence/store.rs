//! Load/save of the showcase slots
//!
//! Wraps an optional backend: `None` means there is no persistent store
//! (native build, pre-render), in which case every call is a silent no-op.

use super::gate::{self, GateOutcome, VersionGate};
use super::Storage;
use crate::config::{BuildInfo, StorageKeys};
use crate::model::Document;

pub struct AppStore<S> {
    backend: Option<S>,
    keys: StorageKeys,
}

impl<S: Storage> AppStore<S> {
    pub fn new(backend: Option<S>, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    /// Store with no backend at all
    pub fn detached(keys: StorageKeys) -> Self {
        Self::new(None, keys)
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&S> {
        self.backend.as_ref()
    }

    pub fn into_backend(self) -> Option<S> {
        self.backend
    }

    /// Run the version/deployment gate. Without a backend this reports `Kept`
    /// and touches nothing.
    pub fn run_gate(&mut self, build: &BuildInfo) -> GateOutcome {
        let Some(storage) = self.backend.as_mut() else {
            return GateOutcome::Kept;
        };
        match VersionGate::new(&self.keys, build).check(storage) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Version check failed, keeping stored data: {}", e);
                GateOutcome::Kept
            }
        }
    }

    /// Gate, then read the stored document. `None` means "use the default":
    /// nothing stored, data just cleared, or the slot didn't parse.
    pub fn load_document(&mut self, build: &BuildInfo) -> Option<Document> {
        if self.run_gate(build).was_cleared() {
            return None;
        }

        let storage = self.backend.as_ref()?;
        let json = match storage.get(&self.keys.sections) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read saved sections: {}", e);
                return None;
            }
        };

        match Document::from_json(&json) {
            Ok(doc) => {
                log::info!("Loaded {} sections from storage", doc.sections.len());
                Some(doc)
            }
            Err(e) => {
                log::warn!("Failed to parse saved sections: {}", e);
                None
            }
        }
    }

    pub fn save_document(&mut self, doc: &Document) {
        let Some(storage) = self.backend.as_mut() else {
            return;
        };
        let json = match doc.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize sections: {}", e);
                return;
            }
        };
        match storage.set(&self.keys.sections, &json) {
            Ok(()) => log::debug!("Sections saved ({} cards)", doc.card_count()),
            Err(e) => log::warn!("Failed to save sections: {}", e),
        }
    }

    /// Stored desktop preference for the sidebar, if any
    pub fn load_sidebar(&self) -> Option<bool> {
        let storage = self.backend.as_ref()?;
        let raw = match storage.get(&self.keys.sidebar) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("Failed to read sidebar state: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(collapsed) => Some(collapsed),
            Err(e) => {
                log::warn!("Ignoring malformed sidebar state {:?}: {}", raw, e);
                None
            }
        }
    }

    pub fn save_sidebar(&mut self, collapsed: bool) {
        let Some(storage) = self.backend.as_mut() else {
            return;
        };
        let value = if collapsed { "true" } else { "false" };
        if let Err(e) = storage.set(&self.keys.sidebar, value) {
            log::warn!("Failed to save sidebar state: {}", e);
        }
    }

    /// Delete every slot, markers included
    pub fn clear_all(&mut self) {
        let Some(storage) = self.backend.as_mut() else {
            return;
        };
        match gate::clear_slots(storage, &self.keys) {
            Ok(()) => log::info!("All showcase data cleared"),
            Err(e) => log::warn!("Failed to clear showcase data: {}", e),
        }
    }
}
