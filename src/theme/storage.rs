//! `localStorage` backed theme preference.

use folio_core::{FolioError, FolioResult, PreferenceStore};
use web_sys::{Storage, Window};

use crate::error::describe;

/// Browser storage; without it (private mode, sandboxed frames) reads
/// yield nothing and writes fail.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {}", describe(&e));
                None
            }
        };
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> FolioResult<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| FolioError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(describe(&e)))
    }
}
