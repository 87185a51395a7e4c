//! Sign-in / registration form state.

use std::collections::HashMap;

use maildesk_core::validation::{validate_login, validate_registration};
use maildesk_core::{Credentials, Registration, RequestTracker, Ticket, ValidationError};

/// Which action the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Check existing credentials.
    #[default]
    SignIn,
    /// Create an account.
    Register,
}

/// What a submission asks the service to do.
#[derive(Debug, Clone)]
pub enum AuthRequest {
    /// Verify a credential pair.
    Login(Credentials),
    /// Create an account.
    Register(Registration),
}

/// State for the login page form.
#[derive(Debug, Clone, Default)]
pub struct AuthFormState {
    /// Current mode.
    pub mode: AuthMode,
    /// Username input.
    pub username: String,
    /// Email input (registration only).
    pub email: String,
    /// Password input.
    pub password: String,
    /// Field errors keyed by field name.
    pub errors: HashMap<String, String>,
    /// Error returned by the service.
    pub submit_error: Option<String>,
    tracker: RequestTracker,
}

impl AuthFormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.tracker.is_pending()
    }

    /// Switches between sign-in and registration, dropping stale errors.
    pub fn toggle_mode(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::Register,
            AuthMode::Register => AuthMode::SignIn,
        };
        self.errors.clear();
        self.submit_error = None;
    }

    /// Validates the inputs and starts a submission.
    ///
    /// Returns `None` when validation fails or a submission is already in
    /// flight; nothing should be sent in that case.
    pub fn submit(&mut self) -> Option<(Ticket, AuthRequest)> {
        if self.is_submitting() {
            return None;
        }
        self.errors.clear();
        self.submit_error = None;

        let username = self.username.trim().to_string();
        let request = match self.mode {
            AuthMode::SignIn => validate_login(&username, &self.password)
                .map(|()| AuthRequest::Login(Credentials::new(username, self.password.clone()))),
            AuthMode::Register => {
                let registration = Registration {
                    username,
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                };
                validate_registration(&registration).map(|()| AuthRequest::Register(registration))
            }
        };

        match request {
            Ok(request) => Some((self.tracker.issue(), request)),
            Err(errors) => {
                self.record_errors(&errors);
                None
            }
        }
    }

    /// Applies a submission result. Returns `true` when `ticket` was current
    /// and the submission succeeded.
    pub fn finish(&mut self, ticket: Ticket, result: Result<(), String>) -> bool {
        if !self.tracker.complete(ticket) {
            return false;
        }
        match result {
            Ok(()) => {
                self.password.clear();
                true
            }
            Err(error) => {
                self.submit_error = Some(error);
                false
            }
        }
    }

    /// Clears inputs and drops any in-flight submission.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn record_errors(&mut self, errors: &[ValidationError]) {
        for error in errors {
            self.errors
                .entry(error.field().to_string())
                .or_insert_with(|| error.message().to_string());
        }
    }
}
