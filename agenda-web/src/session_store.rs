use gloo_storage::{SessionStorage, Storage};
use shared::session::{SessionStore, StoreError};

/// [`SessionStore`] backed by `window.sessionStorage`.
///
/// Values go through the raw `web_sys::Storage` handle instead of
/// `gloo_storage`'s JSON helpers so the token is stored as the bare string
/// other tabs and tools expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?;
        Some(SessionStorage::raw())
    }
}

impl SessionStore for BrowserSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Rejected(format!("{err:?}")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage()
            && let Err(err) = storage.remove_item(key)
        {
            log::warn!("failed to remove {key} from session storage: {err:?}");
        }
    }
}
