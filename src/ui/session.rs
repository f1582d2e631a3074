//! Session storage: a small string key/value store that outlives a single form
//! submission. [`MemorySession`] lives as long as the process, like a browser
//! tab's session storage. [`FileSession`] keeps the map in a JSON file so
//! separate CLI invocations share one login until `logout`.
//!
//! The token is written under [`AUTH_TOKEN_KEY`] and must never be logged.

use secrecy::{ExposeSecret, SecretString};
use std::{
    collections::BTreeMap,
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const LOGGED_IN_KEY: &str = "loggedIn";
pub const USERNAME_KEY: &str = "username";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("session storage is corrupt: {0}")]
    Json(#[from] serde_json::Error),
    #[error("session storage lock poisoned")]
    Poisoned,
}

pub trait SessionStore {
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), SessionError>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        (**self).remove_item(key)
    }
}

/// Process-lifetime store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Returns an error if the lock is poisoned.
    pub fn snapshot(&self) -> Result<BTreeMap<String, String>, SessionError> {
        self.items
            .lock()
            .map(|items| items.clone())
            .map_err(|_| SessionError::Poisoned)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.lock().map_or(true, |items| items.is_empty())
    }
}

impl SessionStore for MemorySession {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        let items = self.items.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut items = self.items.lock().map_err(|_| SessionError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        let mut items = self.items.lock().map_err(|_| SessionError::Poisoned)?;
        items.remove(key);
        Ok(())
    }
}

/// JSON-file store. A missing file reads as an empty session.
#[derive(Clone, Debug)]
pub struct FileSession {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileSession {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    // Write to a sibling file and rename so readers never see a partial map.
    // The file holds the bearer token, so it is created owner-only.
    fn write(&self, items: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        // A leftover temp file would keep its old mode
        match fs::remove_file(&tmp) {
            Err(e) if e.kind() != ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&tmp)?;
        file.write_all(&serde_json::to_vec_pretty(items)?)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), keys = items.len(), "session file written");

        Ok(())
    }

    fn update(
        &self,
        apply: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), SessionError> {
        let _guard = self.lock.lock().map_err(|_| SessionError::Poisoned)?;
        let mut items = self.read()?;
        apply(&mut items);
        self.write(&items)
    }
}

impl SessionStore for FileSession {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        let _guard = self.lock.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(self.read()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.update(|items| {
            items.remove(key);
        })
    }
}

/// Store picked at startup from configuration.
#[derive(Clone, Debug)]
pub enum SessionBackend {
    Memory(MemorySession),
    File(FileSession),
}

impl SessionBackend {
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or_else(
            || Self::Memory(MemorySession::new()),
            |path| Self::File(FileSession::new(path)),
        )
    }

    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

impl SessionStore for SessionBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        match self {
            Self::Memory(store) => store.get_item(key),
            Self::File(store) => store.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        match self {
            Self::Memory(store) => store.set_item(key, value),
            Self::File(store) => store.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        match self {
            Self::Memory(store) => store.remove_item(key),
            Self::File(store) => store.remove_item(key),
        }
    }
}

/// What the session store says about the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
    pub logged_in: bool,
    pub has_token: bool,
}

impl Session {
    /// Writes the three session keys after a successful register or login.
    /// If any write fails the keys already written are removed again, so the
    /// store never holds a token without the rest of the session.
    ///
    /// # Errors
    /// Returns the first write error.
    #[instrument(skip(store, token))]
    pub fn store<S: SessionStore + ?Sized>(
        store: &S,
        token: &SecretString,
        username: &str,
    ) -> Result<(), SessionError> {
        let written = store
            .set_item(AUTH_TOKEN_KEY, token.expose_secret())
            .and_then(|()| store.set_item(LOGGED_IN_KEY, "true"))
            .and_then(|()| store.set_item(USERNAME_KEY, username));

        if let Err(e) = written {
            if let Err(rollback) = Self::clear(store) {
                warn!(%rollback, "failed to roll back partial session");
            }
            return Err(e);
        }

        Ok(())
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Result<Self, SessionError> {
        Ok(Self {
            username: store.get_item(USERNAME_KEY)?,
            logged_in: store.get_item(LOGGED_IN_KEY)?.as_deref() == Some("true"),
            has_token: store
                .get_item(AUTH_TOKEN_KEY)?
                .is_some_and(|token| !token.is_empty()),
        })
    }

    /// Removes the session keys; other keys are left alone.
    ///
    /// # Errors
    /// Returns an error if any key cannot be removed.
    pub fn clear<S: SessionStore + ?Sized>(store: &S) -> Result<(), SessionError> {
        store.remove_item(AUTH_TOKEN_KEY)?;
        store.remove_item(LOGGED_IN_KEY)?;
        store.remove_item(USERNAME_KEY)?;
        Ok(())
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.logged_in && self.has_token
    }
}
