//! Session token persistence.
//!
//! The client never touches storage directly; it goes through a
//! [`SessionStore`], so tests can hand it a [`MemoryStore`] while the CLI
//! persists sessions to disk with [`JsonFileStore`].
//!
//! Values are plain strings keyed by [`StorageKey`]. The customer's cached
//! user record is stored as serialized JSON.

use std::collections::{BTreeMap, HashMap};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fs2::FileExt;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::SessionError;

/// Directory under the home directory holding the default session file.
const DEFAULT_SESSION_DIR: &str = ".sunshop";

/// Default session file name.
const DEFAULT_SESSION_FILE: &str = "session.json";

/// Keys the client reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum StorageKey {
    /// Bearer token of the signed-in admin.
    #[strum(serialize = "adminToken")]
    AdminToken,
    /// Bearer token of the signed-in customer.
    #[strum(serialize = "customerToken")]
    CustomerToken,
    /// JSON record of the signed-in customer, cached at login.
    #[strum(serialize = "customerUser")]
    CustomerUser,
}

impl StorageKey {
    /// Returns the key as stored.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Storage backend for session state.
///
/// Implementations must be safe to share between concurrent requests.
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Reads the value stored under `key`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: StorageKey) -> Result<Option<String>, SessionError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// ## Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: StorageKey, value: &str) -> Result<(), SessionError>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// ## Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&self, key: StorageKey) -> Result<(), SessionError>;
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single value.
    pub fn with_value(key: StorageKey, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key, value.into());
        }
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>, SessionError> {
        let values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<(), SessionError> {
        let mut values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        values.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), SessionError> {
        let mut values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        values.remove(&key);
        Ok(())
    }
}

/// JSON file session store.
///
/// The file holds a single JSON object mapping storage keys to strings,
/// e.g. `{"adminToken": "..."}`. Reads take a shared lock and writes an
/// exclusive lock via `fs2`, so several CLI processes can share one file.
///
/// ## Examples
///
/// ```no_run
/// use sunshop_lib::{JsonFileStore, SessionStore, StorageKey};
///
/// let store = JsonFileStore::new("/tmp/sunshop-session.json".into());
/// store.set(StorageKey::AdminToken, "token-123").unwrap();
/// assert_eq!(store.get(StorageKey::AdminToken).unwrap().as_deref(), Some("token-123"));
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store at `~/.sunshop/session.json`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<Self, SessionError> {
        let home = dirs::home_dir().ok_or(SessionError::NoHomeDir)?;
        Ok(Self::new(
            home.join(DEFAULT_SESSION_DIR).join(DEFAULT_SESSION_FILE),
        ))
    }

    /// Returns the path to the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(file: &mut File) -> Result<BTreeMap<String, String>, SessionError> {
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Applies `change` to the stored entries under an exclusive lock.
    fn modify(
        &self,
        change: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true).truncate(false);
        // Tokens are bearer credentials: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;

        file.lock_exclusive().map_err(|_| SessionError::Lock)?;

        let result = Self::read_entries(&mut file).and_then(|mut entries| {
            change(&mut entries);
            let json = serde_json::to_string_pretty(&entries)?;
            file.set_len(0)?;
            file.seek(SeekFrom::Start(0))?;
            file.write_all(json.as_bytes())?;
            file.flush()?;
            Ok(())
        });

        file.unlock().map_err(|_| SessionError::Lock)?;
        result
    }
}

impl SessionStore for JsonFileStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&self.path)?;
        file.lock_shared().map_err(|_| SessionError::Lock)?;
        let entries = Self::read_entries(&mut file);
        file.unlock().map_err(|_| SessionError::Lock)?;

        Ok(entries?.remove(key.as_str()))
    }

    fn set(&self, key: StorageKey, value: &str) -> Result<(), SessionError> {
        self.modify(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
        })
    }

    fn remove(&self, key: StorageKey) -> Result<(), SessionError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.modify(|entries| {
            entries.remove(key.as_str());
        })
    }
}
