//! Credentials and the signed-in session.

mod credentials;
mod session;

pub use credentials::{
    CredentialError, CredentialResult, CredentialStore, Credentials, KeyringStore, MemoryStore,
    PASSWORD_KEY, USERNAME_KEY,
};
pub use session::Session;
