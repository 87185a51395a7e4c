//! # maildesk-core
//!
//! Core logic for the `Maildesk` mail client.
//!
//! This crate provides:
//! - Credential storage and the signed-in session
//! - The REST API client
//! - Wire models and pagination
//! - Request tickets for discarding stale responses
//! - Form validation
//! - The rich-text body model

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod api;
pub mod auth;
pub mod config;
mod error;
pub mod model;
pub mod pagination;
pub mod request;
pub mod richtext;
pub mod validation;

pub use api::ApiClient;
pub use auth::{
    CredentialError, CredentialResult, CredentialStore, Credentials, KeyringStore, MemoryStore,
    Session,
};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use model::{EmailDetail, EmailId, EmailSummary, NewEmail, Registration, User};
pub use pagination::{DEFAULT_PAGE_SIZE, PaginationData};
pub use request::{RequestTracker, Ticket};
pub use richtext::{Document, RawContent, RichTextError};
pub use validation::{ValidationError, ValidationResult};
