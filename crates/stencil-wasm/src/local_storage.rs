//! `localStorage`-backed blob store.

use stencil_editor::BlobStore;

/// Reads and writes `window.localStorage`. Without a window (or with
/// storage disabled) reads come back empty and writes are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl BlobStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: String) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, {key:?} not written");
            return;
        };
        if storage.set_item(key, &value).is_err() {
            log::warn!("localStorage rejected write of {key:?}");
        }
    }
}
