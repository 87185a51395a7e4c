//! Composer model.
//!
//! The body is edited as light markup and converted to the editor's raw
//! content JSON when sent.

use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::text_editor;
use maildesk_core::richtext::from_markup;
use maildesk_core::validation::validate_new_email;
use maildesk_core::{EmailSummary, NewEmail, RequestTracker, Ticket, User};

/// Composer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerPhase {
    /// Only the "New letter" button is shown.
    #[default]
    Closed,
    /// Form visible and editable.
    Open,
    /// Send in flight; inputs locked.
    Submitting,
}

/// Toolbar formatting actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `**bold**`.
    Bold,
    /// `*italic*`.
    Italic,
    /// `__underline__`.
    Underline,
    /// `~~strike~~`.
    Strikethrough,
    /// `` `code` ``.
    Code,
    /// `# ` line.
    Heading,
    /// `- ` lines.
    Bullets,
    /// `1. ` lines.
    Numbers,
    /// `> ` lines.
    Quote,
}

impl Format {
    /// Every toolbar action in display order.
    pub const ALL: [Self; 9] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::Code,
        Self::Heading,
        Self::Bullets,
        Self::Numbers,
        Self::Quote,
    ];

    /// Toolbar button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Underline => "U",
            Self::Strikethrough => "S",
            Self::Code => "</>",
            Self::Heading => "H",
            Self::Bullets => "\u{2022}",
            Self::Numbers => "1.",
            Self::Quote => "\u{275D}",
        }
    }

    const fn inline_marker(self) -> Option<&'static str> {
        match self {
            Self::Bold => Some("**"),
            Self::Italic => Some("*"),
            Self::Underline => Some("__"),
            Self::Strikethrough => Some("~~"),
            Self::Code => Some("`"),
            _ => None,
        }
    }

    /// Markup inserted for `selection` (or at the cursor when nothing is
    /// selected).
    #[must_use]
    pub fn snippet(self, selection: Option<&str>) -> String {
        if let Some(marker) = self.inline_marker() {
            let inner = selection.filter(|s| !s.is_empty()).unwrap_or("text");
            return format!("{marker}{inner}{marker}");
        }

        let Some(selection) = selection.filter(|s| !s.is_empty()) else {
            return self.line_prefix(1);
        };
        selection
            .lines()
            .enumerate()
            .map(|(i, line)| format!("{}{line}", self.line_prefix(i + 1)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn line_prefix(self, number: usize) -> String {
        match self {
            Self::Heading => "# ".to_string(),
            Self::Bullets => "- ".to_string(),
            Self::Numbers => format!("{number}. "),
            Self::Quote => "> ".to_string(),
            _ => String::new(),
        }
    }
}

/// State for the compose form.
pub struct ComposerState {
    /// Lifecycle phase.
    pub phase: ComposerPhase,
    /// Recipient address input.
    pub recipient: String,
    /// Subject input.
    pub subject: String,
    /// Body editor (markup).
    pub body: text_editor::Content,
    /// Field errors keyed by field name.
    pub errors: HashMap<String, String>,
    /// Error returned by the service.
    pub send_error: Option<String>,
    tracker: RequestTracker,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            phase: ComposerPhase::Closed,
            recipient: String::new(),
            subject: String::new(),
            body: text_editor::Content::new(),
            errors: HashMap::new(),
            send_error: None,
            tracker: RequestTracker::new(),
        }
    }
}

impl ComposerState {
    /// Creates a closed, empty composer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the form is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.phase, ComposerPhase::Closed)
    }

    /// Whether a send is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, ComposerPhase::Submitting)
    }

    /// "New letter" / "Cancel" button. Ignored while submitting.
    pub fn toggle(&mut self) {
        self.phase = match self.phase {
            ComposerPhase::Closed => ComposerPhase::Open,
            ComposerPhase::Open => ComposerPhase::Closed,
            ComposerPhase::Submitting => ComposerPhase::Submitting,
        };
    }

    /// Closes the form if it is open and idle. Inputs are kept.
    pub fn cancel(&mut self) {
        if self.phase == ComposerPhase::Open {
            self.phase = ComposerPhase::Closed;
        }
    }

    /// Applies an editor action. Edits are refused while submitting.
    pub fn edit(&mut self, action: text_editor::Action) {
        if self.is_submitting() && action.is_edit() {
            return;
        }
        self.body.perform(action);
    }

    /// Inserts toolbar markup around the selection or at the cursor.
    pub fn apply_format(&mut self, format: Format) {
        if self.phase != ComposerPhase::Open {
            return;
        }
        let snippet = format.snippet(self.body.selection().as_deref());
        self.body
            .perform(text_editor::Action::Edit(text_editor::Edit::Paste(Arc::new(snippet))));
    }

    /// Validates the form and starts a send as `sender`.
    ///
    /// Returns `None` when the form is not open or invalid; nothing should
    /// be sent in that case.
    pub fn submit(&mut self, sender: &User) -> Option<(Ticket, NewEmail)> {
        if self.phase != ComposerPhase::Open {
            return None;
        }
        let markup = self.body.text();
        let email = self.prepare(sender, &markup)?;
        self.phase = ComposerPhase::Submitting;
        Some((self.tracker.issue(), email))
    }

    fn prepare(&mut self, sender: &User, markup: &str) -> Option<NewEmail> {
        self.errors.clear();
        self.send_error = None;

        if let Err(errors) = validate_new_email(&self.recipient, &self.subject) {
            for error in errors {
                self.errors
                    .insert(error.field().to_string(), error.message().to_string());
            }
            return None;
        }

        let message = match from_markup(markup.trim_end_matches('\n')).to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize body: {e}");
                self.send_error = Some(e.to_string());
                return None;
            }
        };

        Some(NewEmail {
            sender: sender.id,
            recipient: self.recipient.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message,
        })
    }

    /// Applies a send result. Returns `true` when `ticket` was current and
    /// the email was stored, so the list should refresh.
    pub fn finish(&mut self, ticket: Ticket, result: Result<EmailSummary, String>) -> bool {
        if !self.tracker.complete(ticket) {
            return false;
        }
        match result {
            Ok(_) => {
                *self = Self::new();
                true
            }
            Err(error) => {
                self.phase = ComposerPhase::Open;
                self.send_error = Some(error);
                false
            }
        }
    }

    /// Clears everything and drops any in-flight send.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maildesk_core::{EmailId, RawContent};

    fn alice() -> User {
        User {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    fn stored() -> EmailSummary {
        EmailSummary {
            id: EmailId::new(1),
            sender: 7,
            recipient: "bob@example.com".to_string(),
            subject: "Hi".to_string(),
            body: String::new(),
            created_at: String::new(),
        }
    }

    fn open_with(recipient: &str, subject: &str, body: &str) -> ComposerState {
        let mut state = ComposerState::new();
        state.toggle();
        state.recipient = recipient.to_string();
        state.subject = subject.to_string();
        state.body = text_editor::Content::with_text(body);
        state
    }

    #[test]
    fn test_toggle_and_cancel() {
        let mut state = ComposerState::new();
        assert!(!state.is_open());
        state.toggle();
        assert_eq!(state.phase, ComposerPhase::Open);
        state.recipient = "bob@example.com".to_string();
        state.cancel();
        assert_eq!(state.phase, ComposerPhase::Closed);
        assert_eq!(state.recipient, "bob@example.com");
    }

    #[test]
    fn test_empty_fields_issue_no_request() {
        let mut state = open_with("", "", "body");
        assert!(state.submit(&alice()).is_none());
        assert_eq!(state.phase, ComposerPhase::Open);
        assert!(state.errors.contains_key("recipient"));
        assert!(state.errors.contains_key("subject"));
    }

    #[test]
    fn test_submit_builds_raw_content() {
        let mut state = open_with(" bob@example.com ", "Hi", "**Hello**\n- item");
        let (_, email) = state.submit(&alice()).unwrap();
        assert_eq!(email.sender, 7);
        assert_eq!(email.recipient, "bob@example.com");

        let content = RawContent::parse(&email.message).unwrap();
        assert_eq!(content.blocks[0].text, "Hello");
        assert_eq!(content.blocks[0].inline_style_ranges[0].style, "BOLD");
        assert_eq!(content.blocks[1].block_type, "unordered-list-item");
        assert!(state.is_submitting());
    }

    #[test]
    fn test_cancel_disabled_while_submitting() {
        let mut state = open_with("bob@example.com", "Hi", "x");
        state.submit(&alice()).unwrap();
        state.cancel();
        state.toggle();
        assert!(state.is_submitting());
        assert!(state.submit(&alice()).is_none());
    }

    #[test]
    fn test_success_clears_and_closes() {
        let mut state = open_with("bob@example.com", "Hi", "x");
        let (ticket, _) = state.submit(&alice()).unwrap();
        assert!(state.finish(ticket, Ok(stored())));
        assert_eq!(state.phase, ComposerPhase::Closed);
        assert!(state.recipient.is_empty());
        assert!(state.subject.is_empty());
        assert_eq!(state.body.text().trim(), "");
    }

    #[test]
    fn test_failure_keeps_input() {
        let mut state = open_with("bob@example.com", "Hi", "x");
        let (ticket, _) = state.submit(&alice()).unwrap();
        assert!(!state.finish(ticket, Err("Error sending email".to_string())));
        assert_eq!(state.phase, ComposerPhase::Open);
        assert_eq!(state.send_error.as_deref(), Some("Error sending email"));
        assert_eq!(state.recipient, "bob@example.com");
    }

    #[test]
    fn test_snippets() {
        assert_eq!(Format::Bold.snippet(None), "**text**");
        assert_eq!(Format::Italic.snippet(Some("word")), "*word*");
        assert_eq!(Format::Heading.snippet(None), "# ");
        assert_eq!(Format::Numbers.snippet(Some("a\nb")), "1. a\n2. b");
        assert_eq!(Format::Quote.snippet(Some("")), "> ");
    }
}
