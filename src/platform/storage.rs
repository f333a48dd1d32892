//! LocalStorage backend
//!
//! Only the browser build has a persistent store. Everywhere else
//! `open_storage` returns `None` and the showcase runs from defaults.

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsValue;

    use crate::persistence::{Storage, StorageError};

    /// `window.localStorage`
    pub struct BrowserStorage {
        inner: web_sys::Storage,
    }

    impl BrowserStorage {
        /// `Unavailable` when there is no window or the browser denies
        /// LocalStorage (private mode, disabled cookies)
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window().ok_or(StorageError::Unavailable)?;
            let inner = window
                .local_storage()
                .map_err(backend_error)?
                .ok_or(StorageError::Unavailable)?;
            Ok(Self { inner })
        }
    }

    fn backend_error(err: JsValue) -> StorageError {
        let message = err
            .as_string()
            .or_else(|| js_sys::Reflect::get(&err, &JsValue::from_str("name")).ok()?.as_string())
            .unwrap_or_else(|| format!("{:?}", err));
        if message.contains("Quota") {
            StorageError::QuotaExceeded
        } else {
            StorageError::Backend(message)
        }
    }

    impl Storage for BrowserStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key).map_err(backend_error)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.set_item(key, value).map_err(backend_error)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.inner.remove_item(key).map_err(backend_error)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

/// Storage type used by this platform's build
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = BrowserStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = crate::persistence::MemoryStorage;

/// Open the platform's persistent store, if it has one
#[cfg(target_arch = "wasm32")]
pub fn open_storage() -> Option<PlatformStorage> {
    match BrowserStorage::open() {
        Ok(storage) => Some(storage),
        Err(e) => {
            log::warn!("Changes will not be saved: {}", e);
            None
        }
    }
}

/// Native builds have no persistent store
#[cfg(not(target_arch = "wasm32"))]
pub fn open_storage() -> Option<PlatformStorage> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_has_no_persistent_store() {
        assert!(open_storage().is_none());
    }
}
