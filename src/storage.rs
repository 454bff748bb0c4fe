//! Browser Storage
//!
//! `window.localStorage` as the store's key-value backend.

use user_store::{KeyValueStorage, StoreError, StoreResult};

/// Handle to `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::storage("no window"))?;
        window
            .local_storage()
            .map_err(|e| StoreError::storage(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| StoreError::storage("localStorage disabled"))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::storage(format!("getItem({}) failed: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::storage(format!("setItem({}) failed: {:?}", key, e)))
    }
}
