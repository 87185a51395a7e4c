//! Form validation shared by the login form and the composer.

use crate::model::Registration;

/// A rejected form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Username is empty.
    EmptyUsername,
    /// Password is empty.
    EmptyPassword,
    /// Registration email is empty.
    EmptyEmail,
    /// Registration email is malformed.
    InvalidEmail,
    /// Recipient is empty.
    EmptyRecipient,
    /// Recipient is malformed.
    InvalidRecipient,
    /// Subject is empty.
    EmptySubject,
}

impl ValidationError {
    /// Human-readable message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "Username is required",
            Self::EmptyPassword => "Password is required",
            Self::EmptyEmail => "Email address is required",
            Self::InvalidEmail | Self::InvalidRecipient => "Invalid email address format",
            Self::EmptyRecipient => "Recipient is required",
            Self::EmptySubject => "Subject is required",
        }
    }

    /// Form field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "username",
            Self::EmptyPassword => "password",
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::EmptyRecipient | Self::InvalidRecipient => "recipient",
            Self::EmptySubject => "subject",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a form. All errors are reported at once.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

fn collect(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates sign-in fields. Only presence is checked.
///
/// # Errors
///
/// Returns every missing field.
pub fn validate_login(username: &str, password: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if username.trim().is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }
    if password.is_empty() {
        errors.push(ValidationError::EmptyPassword);
    }
    collect(errors)
}

/// Validates registration fields.
///
/// # Errors
///
/// Returns every missing or malformed field.
pub fn validate_registration(registration: &Registration) -> ValidationResult {
    let mut errors = match validate_login(&registration.username, &registration.password) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };
    if registration.email.trim().is_empty() {
        errors.push(ValidationError::EmptyEmail);
    } else if !is_valid_email(&registration.email) {
        errors.push(ValidationError::InvalidEmail);
    }
    collect(errors)
}

/// Validates composer fields before anything is sent.
///
/// # Errors
///
/// Returns every missing or malformed field.
pub fn validate_new_email(recipient: &str, subject: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if recipient.trim().is_empty() {
        errors.push(ValidationError::EmptyRecipient);
    } else if !is_valid_email(recipient) {
        errors.push(ValidationError::InvalidRecipient);
    }
    if subject.trim().is_empty() {
        errors.push(ValidationError::EmptySubject);
    }
    collect(errors)
}

/// Address check in the spirit of an HTML `type=email` field: exactly one
/// `@`, non-empty local part and domain, no whitespace, and no empty domain
/// labels. A dot in the domain is not required.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    !domain.split('.').any(str::is_empty)
}
