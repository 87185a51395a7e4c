//! The signed-in identity.

use std::sync::Arc;

use tracing::{info, warn};

use super::credentials::{CredentialResult, CredentialStore, Credentials};

/// Authentication state owned by the application.
///
/// Storage is read once in [`Session::restore`]; afterwards the in-memory
/// copy is authoritative and the store is only written on sign-in and
/// sign-out.
pub struct Session {
    store: Arc<dyn CredentialStore>,
    credentials: Option<Credentials>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl Session {
    /// Builds a session from whatever `store` holds.
    ///
    /// Unreadable storage is treated as signed out.
    #[must_use]
    pub fn restore(store: Arc<dyn CredentialStore>) -> Self {
        let credentials = match store.load() {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("Failed to read stored credentials: {e}");
                None
            }
        };
        if let Some(creds) = &credentials {
            info!("Restored session for {}", creds.username());
        }
        Self { store, credentials }
    }

    /// A complete credential pair is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Current credentials, if signed in.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// `Authorization` header value, or an empty string when signed out.
    #[must_use]
    pub fn auth_header(&self) -> String {
        self.credentials
            .as_ref()
            .map(Credentials::basic_header)
            .unwrap_or_default()
    }

    /// Persists `credentials` and adopts them.
    ///
    /// Incomplete pairs are refused silently so the session never holds a
    /// half identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written; the session is left
    /// unchanged.
    pub fn sign_in(&mut self, credentials: Credentials) -> CredentialResult<()> {
        if !credentials.is_complete() {
            warn!("Refusing to sign in with incomplete credentials");
            return Ok(());
        }
        self.store.store(&credentials)?;
        info!("Signed in as {}", credentials.username());
        self.credentials = Some(credentials);
        Ok(())
    }

    /// Forgets the identity in memory and in storage.
    ///
    /// Idempotent. A storage failure is logged; the in-memory session is
    /// cleared regardless.
    pub fn sign_out(&mut self) {
        if let Some(creds) = self.credentials.take() {
            info!("Signing out {}", creds.username());
        }
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear stored credentials: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::credentials::{MemoryStore, PASSWORD_KEY, USERNAME_KEY};

    fn alice() -> Credentials {
        Credentials::new("alice", "pw")
    }

    #[test]
    fn test_restore_empty_store() {
        let session = Session::restore(Arc::new(MemoryStore::new()));
        assert!(!session.is_authenticated());
        assert_eq!(session.auth_header(), "");
    }

    #[test]
    fn test_restore_stored_pair() {
        let session = Session::restore(Arc::new(MemoryStore::with_credentials(&alice())));
        assert!(session.is_authenticated());
        assert_eq!(session.auth_header(), "Basic YWxpY2U6cHc=");
    }

    #[test]
    fn test_restore_reads_store_once() {
        let store = Arc::new(MemoryStore::new());
        let session = Session::restore(store.clone());
        store.store(&alice()).unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_sign_in_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut session = Session::restore(store.clone());
        session.sign_in(alice()).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(store.get(USERNAME_KEY).unwrap().as_deref(), Some("alice"));
        assert_eq!(store.get(PASSWORD_KEY).unwrap().as_deref(), Some("pw"));
    }

    #[test]
    fn test_sign_in_refuses_incomplete_pair() {
        let store = Arc::new(MemoryStore::new());
        let mut session = Session::restore(store.clone());
        session.sign_in(Credentials::new("alice", "")).unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let store = Arc::new(MemoryStore::with_credentials(&alice()));
        let mut session = Session::restore(store.clone());
        session.sign_out();
        assert!(!session.is_authenticated());
        assert_eq!(session.auth_header(), "");
        assert_eq!(store.load().unwrap(), None);

        session.sign_out();
        assert!(!session.is_authenticated());
    }
}
