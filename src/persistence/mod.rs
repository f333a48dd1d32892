//! Persistence of the showcase document in string-keyed storage
//!
//! Features:
//! - Four independent slots: document JSON, sidebar flag, schema version, build id
//! - Version/deployment gate that wipes stale data before anything loads
//! - Storage faults degrade to "nothing stored", they never reach the UI

pub mod gate;
pub mod memory;
pub mod store;

pub use gate::{GateOutcome, VersionGate};
pub use memory::MemoryStorage;
pub use store::AppStore;

use thiserror::Error;

/// Failure reported by a storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Synchronous string key/value store (LocalStorage in the browser)
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
