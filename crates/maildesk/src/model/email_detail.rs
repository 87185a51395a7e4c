//! Detail modal state.

use maildesk_core::richtext::render;
use maildesk_core::{Document, EmailDetail, EmailId, RawContent, RequestTracker, Ticket};

/// Shown when the email cannot be fetched.
pub const LOAD_ERROR: &str = "Error loading email";
/// Shown when the body is not valid rich text.
pub const PARSE_ERROR: &str = "Error parsing letter body";
/// Shown in the body area when there is nothing to render.
pub const BODY_UNAVAILABLE: &str = "Failed to display message";

/// Where the modal stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus {
    /// Fetch in flight.
    Loading,
    /// Fetch failed.
    Failed,
    /// Email fetched; the body either rendered or failed to parse.
    Loaded {
        /// Header fields and raw body.
        email: EmailDetail,
        /// Rendered body, or `None` when it did not parse.
        body: Option<Document>,
    },
}

/// One open detail modal.
#[derive(Debug, Clone)]
pub struct EmailDetailState {
    /// Email shown.
    pub id: EmailId,
    /// Fetch status.
    pub status: DetailStatus,
    tracker: RequestTracker,
}

impl EmailDetailState {
    /// Opens the modal for `id` and returns the ticket for its fetch.
    #[must_use]
    pub fn open(id: EmailId) -> (Self, Ticket) {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue();
        (
            Self {
                id,
                status: DetailStatus::Loading,
                tracker,
            },
            ticket,
        )
    }

    /// Applies the fetch result. Stale tickets are ignored.
    pub fn finish(&mut self, ticket: Ticket, result: Result<EmailDetail, String>) -> bool {
        if !self.tracker.complete(ticket) {
            return false;
        }
        self.status = match result {
            Ok(email) => {
                let body = match RawContent::parse(&email.message) {
                    Ok(content) => Some(render(&content)),
                    Err(e) => {
                        tracing::warn!("Failed to parse body of email {}: {e}", email.id);
                        None
                    }
                };
                DetailStatus::Loaded { email, body }
            }
            Err(error) => {
                tracing::warn!("Failed to load email {}: {error}", self.id);
                DetailStatus::Failed
            }
        };
        true
    }

    /// Error line for the modal, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        match &self.status {
            DetailStatus::Failed => Some(LOAD_ERROR),
            DetailStatus::Loaded { body: None, .. } => Some(PARSE_ERROR),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(message: &str) -> EmailDetail {
        EmailDetail {
            id: EmailId::new(5),
            sender: 7,
            recipient: "bob@example.com".to_string(),
            subject: "Hi".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_loaded_body_renders() {
        let (mut state, ticket) = EmailDetailState::open(EmailId::new(5));
        assert_eq!(state.status, DetailStatus::Loading);
        let json = r#"{"blocks":[{"key":"a","text":"Hello","type":"unstyled","depth":0,"inlineStyleRanges":[],"entityRanges":[],"data":{}}],"entityMap":{}}"#;
        assert!(state.finish(ticket, Ok(detail(json))));
        let DetailStatus::Loaded { body: Some(doc), .. } = &state.status else {
            panic!("expected a rendered body");
        };
        assert_eq!(doc.blocks[0].text(), "Hello");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_parse_error_keeps_header() {
        let (mut state, ticket) = EmailDetailState::open(EmailId::new(5));
        state.finish(ticket, Ok(detail("not json")));
        let DetailStatus::Loaded { email, body } = &state.status else {
            panic!("expected loaded status");
        };
        assert_eq!(email.subject, "Hi");
        assert_eq!(email.recipient, "bob@example.com");
        assert!(body.is_none());
        assert_eq!(state.error(), Some(PARSE_ERROR));
    }

    #[test]
    fn test_empty_message_is_parse_error() {
        let (mut state, ticket) = EmailDetailState::open(EmailId::new(5));
        state.finish(ticket, Ok(detail("")));
        assert_eq!(state.error(), Some(PARSE_ERROR));
    }

    #[test]
    fn test_fetch_error() {
        let (mut state, ticket) = EmailDetailState::open(EmailId::new(5));
        state.finish(ticket, Err("Failed to load email".to_string()));
        assert_eq!(state.status, DetailStatus::Failed);
        assert_eq!(state.error(), Some(LOAD_ERROR));
    }

    #[test]
    fn test_response_for_other_modal_is_dropped() {
        let (_first, stale) = EmailDetailState::open(EmailId::new(1));
        let (mut second, _) = EmailDetailState::open(EmailId::new(2));
        assert!(!second.finish(stale, Ok(detail("{}"))));
        assert_eq!(second.status, DetailStatus::Loading);
    }
}
