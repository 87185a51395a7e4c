//! Message types for application events.
//!
//! Every response carries the [`Ticket`] of the request that produced it so
//! the receiving state can drop answers it no longer waits for.

use iced::widget::text_editor;
use maildesk_core::{Credentials, EmailDetail, EmailId, EmailSummary, PaginationData, Ticket, User};

use crate::model::{AppSettings, Format, Route};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Navigate to a route; the gate decides where it lands.
    NavigateTo(Route),

    // Settings
    /// Settings loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),
    /// Flip light/dark and persist.
    ToggleTheme,

    // Session
    /// Login page form messages.
    AuthForm(AuthFormMessage),
    /// Login or registration finished; carries the verified credentials.
    AuthFinished(Ticket, Result<Credentials, String>),
    /// Forget the session and return to the login page.
    Logout,
    /// Current user fetched.
    UserLoaded(Ticket, Result<User, String>),

    // Compose
    /// Composer messages.
    Composer(ComposerMessage),
    /// Send finished.
    EmailSent(Ticket, Result<EmailSummary, String>),

    // List
    /// Email list messages.
    List(ListMessage),
    /// List page fetched.
    EmailsLoaded(Ticket, Result<PaginationData<EmailSummary>, String>),

    // Detail
    /// Open the detail modal for an email.
    OpenEmail(EmailId),
    /// Close the detail modal.
    CloseEmail,
    /// Detail fetched.
    EmailLoaded(Ticket, Result<EmailDetail, String>),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Keyboard event with no binding.
    Ignored,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Open the composer (Ctrl+N).
    ComposeNew,
    /// Send the open composer (Ctrl+Enter).
    Send,
    /// Close the modal or cancel the composer (Escape).
    Cancel,
    /// Reload page 1 of the list (F5).
    Refresh,
}

/// Messages for the login/registration form.
#[derive(Debug, Clone)]
pub enum AuthFormMessage {
    /// Username changed.
    UsernameChanged(String),
    /// Email changed.
    EmailChanged(String),
    /// Password changed.
    PasswordChanged(String),
    /// Switch between sign in and register.
    ToggleMode,
    /// Submit the form.
    Submit,
}

/// Messages for the composer.
#[derive(Debug, Clone)]
pub enum ComposerMessage {
    /// "New letter" / "Cancel".
    Toggle,
    /// Recipient changed.
    RecipientChanged(String),
    /// Subject changed.
    SubjectChanged(String),
    /// Body editor action.
    Edit(text_editor::Action),
    /// Toolbar formatting.
    Format(Format),
    /// Send the letter.
    Send,
}

/// Messages for the email list.
#[derive(Debug, Clone, Copy)]
pub enum ListMessage {
    /// Fetch the previous page.
    Previous,
    /// Fetch the next page.
    Next,
    /// Fetch page 1 again.
    Refresh,
}
