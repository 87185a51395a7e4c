//! REST client for the mail service.
//!
//! Every operation issues exactly one HTTP request. Non-2xx answers become
//! [`crate::Error::Api`] carrying the server's `detail` text or one of the
//! fallback messages below.

mod client;

pub use client::ApiClient;

/// Fallback when login fails without a `detail`.
pub const LOGIN_FAILED: &str = "Failed to retrieve user data";
/// Fallback when registration fails without a `detail`.
pub const REGISTER_FAILED: &str = "Registration error";
/// Fallback when the current user cannot be fetched.
pub const CURRENT_USER_FAILED: &str = "Failed to retrieve user data";
/// Fallback when the email list cannot be fetched.
pub const LIST_FAILED: &str = "Failed to get list of letters";
/// Fallback when sending fails.
pub const SEND_FAILED: &str = "Error sending email";
/// Fallback when a single email cannot be fetched.
pub const DETAIL_FAILED: &str = "Failed to load email";
