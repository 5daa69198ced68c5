use sidebar_layout::{LayoutStore, StoreError};
use web_sys::{Storage, Window};

/// Layout store backed by `window.localStorage`.
///
/// When the page cannot reach `localStorage` (disabled, or denied in a
/// sandboxed frame) every read is absent and every write fails softly.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub fn from_window(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::new(storage),
            Ok(None) => {
                log::warn!("localStorage is unavailable, layout not saved");
                Self { storage: None }
            },
            Err(err) => {
                log::warn!(
                    "localStorage access denied, layout not saved: {err:?}"
                );
                Self { storage: None }
            },
        }
    }
}

impl LayoutStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key} failed: {err:?}");
                None
            },
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(StoreError::Backend(String::from(
                "localStorage is unavailable",
            )));
        };
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Backend(format!("{err:?}")))
    }
}
