use client_core::{KeyValueStorage, MemoryStorage, StorageError};

/// `window.localStorage`, or an in-memory map when the browser refuses access
/// to it (private mode, sandboxed iframes, disabled cookies).
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, session will not survive a reload");
            return Self::Memory(MemoryStorage::new());
        };
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::warn!("localStorage is unavailable, session will not survive a reload");
                Self::Memory(MemoryStorage::new())
            }
            Err(error) => {
                log::warn!("localStorage access denied, error={error:?}");
                Self::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Local(storage) => storage.get_item(key).map_err(|error| StorageError::Read {
                key: key.to_owned(),
                reason: format!("{error:?}"),
            }),
            Self::Memory(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(storage) => {
                storage
                    .set_item(key, value)
                    .map_err(|error| StorageError::Write {
                        key: key.to_owned(),
                        reason: format!("{error:?}"),
                    })
            }
            Self::Memory(storage) => storage.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(storage) => storage.remove_item(key).map_err(|error| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{error:?}"),
            }),
            Self::Memory(storage) => storage.remove(key),
        }
    }
}
