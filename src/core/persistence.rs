//! Saving and loading the desktop snapshot.
//!
//! The host calls a [`PersistencePort`] at start-up and after window
//! changes. Nothing in the shell or the window manager touches storage.

use std::cell::RefCell;

use crate::config::STORAGE_KEY;
use crate::core::error::PersistenceError;
use crate::models::SessionSnapshot;
use crate::utils::dom;

/// Where the desktop snapshot lives between visits.
pub trait PersistencePort {
    /// Read the saved snapshot. `Ok(None)` means nothing was saved yet.
    fn load(&self) -> Result<Option<SessionSnapshot>, PersistenceError>;

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), PersistenceError>;
}

/// Browser `localStorage`, one JSON value under [`STORAGE_KEY`].
#[derive(Clone, Debug)]
pub struct LocalStoragePort {
    key: String,
}

impl LocalStoragePort {
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStoragePort {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistencePort for LocalStoragePort {
    fn load(&self) -> Result<Option<SessionSnapshot>, PersistenceError> {
        let storage = dom::local_storage().ok_or(PersistenceError::StorageUnavailable)?;
        let Some(json) = storage.get_item(&self.key).ok().flatten() else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), PersistenceError> {
        let storage = dom::local_storage().ok_or(PersistenceError::StorageUnavailable)?;
        let json = serde_json::to_string(snapshot)?;
        storage
            .set_item(&self.key, &json)
            .map_err(|_| PersistenceError::WriteFailed)
    }
}

/// In-memory storage for tests and the native CLI.
///
/// Keeps the serialized form so a save/load cycle goes through JSON exactly
/// like the browser adapter does.
#[derive(Debug, Default)]
pub struct MemoryPort {
    stored: RefCell<Option<String>>,
}

impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored JSON, as if written by an earlier visit.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            stored: RefCell::new(Some(json.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.stored.borrow().clone()
    }
}

impl PersistencePort for MemoryPort {
    fn load(&self) -> Result<Option<SessionSnapshot>, PersistenceError> {
        match self.stored.borrow().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(snapshot)?;
        *self.stored.borrow_mut() = Some(json);
        Ok(())
    }
}

/// Load a snapshot, logging and swallowing failures.
///
/// A broken or missing snapshot is never fatal to the desktop; it just
/// starts fresh.
pub fn load_or_default(port: &dyn PersistencePort) -> Option<SessionSnapshot> {
    match port.load() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::error!("failed to load desktop state: {}", e);
            None
        }
    }
}

/// Save a snapshot, logging failures.
pub fn save_logged(port: &dyn PersistencePort, snapshot: &SessionSnapshot) {
    if let Err(e) = port.save(snapshot) {
        log::error!("failed to save desktop state: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WindowManager;
    use crate::core::host::WindowHost;
    use crate::models::WindowId;

    #[test]
    fn test_memory_port_starts_empty() {
        let port = MemoryPort::new();
        assert!(port.load().unwrap().is_none());
        assert!(load_or_default(&port).is_none());
    }

    #[test]
    fn test_memory_port_round_trip_through_manager() {
        let port = MemoryPort::new();
        let mut wm = WindowManager::new();
        wm.open_window(&WindowId::new("terminal"), None);
        save_logged(&port, &wm.snapshot());

        assert!(port.raw().unwrap().contains("\"terminal\""));
        let loaded = port.load().unwrap().unwrap();
        assert_eq!(loaded, wm.snapshot());
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let port = MemoryPort::with_json("{not json");
        assert!(matches!(port.load(), Err(PersistenceError::Json(_))));
        assert!(load_or_default(&port).is_none());
    }

    #[test]
    fn test_partial_snapshot_uses_defaults() {
        let port = MemoryPort::with_json(r#"{"windows": []}"#);
        let snapshot = port.load().unwrap().unwrap();
        assert!(snapshot.windows.is_empty());
        assert!(!snapshot.settings.matrix_active);
    }

    #[test]
    fn test_local_storage_key() {
        assert_eq!(LocalStoragePort::new().key(), "gelos_state");
    }
}
