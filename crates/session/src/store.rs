//! Session persistence and the in-process store.
//!
//! [`SessionStorage`] abstracts whatever the host environment offers for
//! keeping a session across restarts; [`SessionStore`] caches the current
//! session in memory and drives the explicit lifecycle: `load` once at
//! startup, `set` on login, `clear` on logout or session expiry.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use thiserror::Error;
use tracing::debug;

use stocklink_core::WarehouseId;

use crate::Session;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing storage could not be read or written.
    #[error("session storage failed: {0}")]
    Storage(String),

    /// A stored session exists but does not parse.
    #[error("stored session is unreadable: {0}")]
    Corrupt(String),
}

/// Narrow persistence contract for a single session slot.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Result<Option<Session>, SessionError>;
    fn save(&self, session: &Session) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// Storage that lives only as long as the process. Used in tests and by
/// hosts that manage persistence themselves.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slot: Mutex<Option<Session>>,
}

impl SessionStorage for InMemoryStorage {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(lock_recovering(&self.slot).clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *lock_recovering(&self.slot) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *lock_recovering(&self.slot) = None;
        Ok(())
    }
}

/// Storage backed by a JSON file in the platform data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<platform data dir>/stocklink/session.json`.
    pub fn in_user_data_dir() -> Result<Self, SessionError> {
        let base = dirs::data_dir()
            .ok_or_else(|| SessionError::Storage("no platform data directory".to_owned()))?;
        Ok(Self::new(base.join("stocklink").join("session.json")))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Storage(e.to_string())),
        };
        let session =
            serde_json::from_str(&raw).map_err(|e| SessionError::Corrupt(e.to_string()))?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Storage(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| SessionError::Storage(e.to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }
}

/// Holds the current session and keeps the storage backend in step.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            current: RwLock::new(None),
        }
    }

    /// Store with no persistence beyond the process.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStorage::default())
    }

    /// Load whatever the backend holds into the in-process cache.
    ///
    /// Called once at startup; a missing stored session is not an error.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let loaded = self.storage.load()?;
        debug!(restored = loaded.is_some(), "session loaded from storage");
        *write_recovering(&self.current) = loaded.clone();
        Ok(loaded)
    }

    /// Install a new session (login). The cache is updated before the
    /// backend so a persistence failure still leaves the session usable
    /// for this process; the error is returned for the caller to report.
    pub fn set(&self, session: Session) -> Result<(), SessionError> {
        *write_recovering(&self.current) = Some(session.clone());
        self.storage.save(&session)
    }

    /// Drop the session everywhere (logout, or a 401 from any service).
    pub fn clear(&self) -> Result<(), SessionError> {
        *write_recovering(&self.current) = None;
        debug!("session cleared");
        self.storage.clear()
    }

    pub fn current(&self) -> Option<Session> {
        read_recovering(&self.current).clone()
    }

    pub fn token(&self) -> Option<String> {
        read_recovering(&self.current)
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        read_recovering(&self.current).is_some()
    }

    pub fn is_admin(&self) -> bool {
        read_recovering(&self.current)
            .as_ref()
            .is_some_and(Session::is_admin)
    }

    pub fn is_warehouse_user(&self) -> bool {
        read_recovering(&self.current)
            .as_ref()
            .is_some_and(Session::is_warehouse_user)
    }

    pub fn warehouse_id(&self) -> Option<WarehouseId> {
        read_recovering(&self.current)
            .as_ref()
            .and_then(Session::warehouse_id)
    }
}

// Lock helpers: a poisoned lock only means another thread panicked while
// holding it; the session value itself stays coherent, so recover it.
fn lock_recovering<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

fn read_recovering<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_recovering<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}
