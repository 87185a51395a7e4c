//! Credential persistence.
//!
//! The signed-in username and password are kept in the platform's native
//! credential storage:
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - macOS: Keychain
//! - Windows: Credential Manager
//!
//! [`MemoryStore`] backs tests and environments without a keyring.

use std::collections::HashMap;
use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use keyring::Entry;
use tracing::{debug, warn};

/// Service name used for keyring entries.
const SERVICE_NAME: &str = "maildesk";

/// Storage key for the username.
pub const USERNAME_KEY: &str = "username";

/// Storage key for the password.
pub const PASSWORD_KEY: &str = "password";

/// Error type for credential operations.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Failed to access keyring.
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// In-memory store lock was poisoned.
    #[error("Credential store unavailable")]
    Unavailable,
}

/// Result type for credential operations.
pub type CredentialResult<T> = std::result::Result<T, CredentialError>;

/// Username and password used for HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Both halves are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// `Authorization` header value: `Basic base64(username:password)`.
    #[must_use]
    pub fn basic_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Persistent key-value storage for credentials.
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Reads a value. `Ok(None)` when nothing is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> CredentialResult<Option<String>>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> CredentialResult<()>;

    /// Removes a value. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn delete(&self, key: &str) -> CredentialResult<()>;

    /// Loads a complete credential pair, if one is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&self) -> CredentialResult<Option<Credentials>> {
        let username = self.get(USERNAME_KEY)?.unwrap_or_default();
        let password = self.get(PASSWORD_KEY)?.unwrap_or_default();
        let credentials = Credentials::new(username, password);
        Ok(credentials.is_complete().then_some(credentials))
    }

    /// Stores both halves of a credential pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn store(&self, credentials: &Credentials) -> CredentialResult<()> {
        self.set(USERNAME_KEY, credentials.username())?;
        self.set(PASSWORD_KEY, credentials.password())?;
        Ok(())
    }

    /// Deletes both halves. Both deletes are attempted; the first failure is
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn clear(&self) -> CredentialResult<()> {
        let username = self.delete(USERNAME_KEY);
        let password = self.delete(PASSWORD_KEY);
        username.and(password)
    }
}

/// Credential store backed by the system keyring.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new(SERVICE_NAME)
    }
}

impl KeyringStore {
    /// Creates a store whose entries live under `service`.
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> CredentialResult<Entry> {
        Ok(Entry::new(&self.service, key)?)
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self, key: &str) -> CredentialResult<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => {
                debug!("No {key} stored in keyring");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> CredentialResult<()> {
        self.entry(key)?.set_password(value)?;
        debug!("Stored {key} in keyring");
        Ok(())
    }

    fn delete(&self, key: &str) -> CredentialResult<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) => {
                debug!("Deleted {key} from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No {key} to delete from keyring");
                Ok(())
            }
            Err(e) => {
                warn!("Failed to delete {key}: {e}");
                Err(e.into())
            }
        }
    }
}

/// Volatile credential store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `credentials`.
    #[must_use]
    pub fn with_credentials(credentials: &Credentials) -> Self {
        let mut entries = HashMap::new();
        entries.insert(USERNAME_KEY.to_string(), credentials.username().to_string());
        entries.insert(PASSWORD_KEY.to_string(), credentials.password().to_string());
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> CredentialResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| CredentialError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CredentialResult<()> {
        let mut entries = self.entries.lock().map_err(|_| CredentialError::Unavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> CredentialResult<()> {
        let mut entries = self.entries.lock().map_err(|_| CredentialError::Unavailable)?;
        entries.remove(key);
        Ok(())
    }
}
