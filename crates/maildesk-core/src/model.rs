//! Wire types exchanged with the mail service.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub i64);

impl EmailId {
    /// Create a new email ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An account on the mail service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user id. Emails reference it as `sender`.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Mailbox address.
    pub email: String,
}

/// Email as it appears in the paginated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSummary {
    /// Email id.
    pub id: EmailId,
    /// Id of the sending user.
    pub sender: i64,
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// Letter body (the list projection calls it `body`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    /// Server timestamp, usually RFC 3339.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

impl EmailSummary {
    /// Parses `created_at` when it is an RFC 3339 timestamp.
    #[must_use]
    pub fn created_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.created_at.trim()).ok()
    }

    /// Short display form of `created_at`, falling back to the raw string.
    #[must_use]
    pub fn created_at_display(&self) -> String {
        self.created_at_parsed().map_or_else(
            || self.created_at.clone(),
            |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
        )
    }
}

/// Email as returned by the single-email endpoint.
///
/// `message` holds the serialized rich-text tree. A `null` or missing
/// message is read as an empty string, which then fails to parse as rich
/// text like any other malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDetail {
    /// Email id.
    pub id: EmailId,
    /// Id of the sending user.
    pub sender: i64,
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// Raw rich-text JSON.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

/// Body of a send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmail {
    /// Id of the sending user.
    pub sender: i64,
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// Raw rich-text JSON.
    pub message: String,
}

/// Body of a registration request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Desired login name.
    pub username: String,
    /// Mailbox address.
    pub email: String,
    /// Password.
    pub password: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_email_summary_from_json() {
        let json = r#"{
            "id": 17,
            "sender": 3,
            "recipient": "bob@example.com",
            "subject": "Hello",
            "body": "{\"blocks\":[],\"entityMap\":{}}",
            "created_at": "2024-05-01T09:30:00.123456Z"
        }"#;
        let email: EmailSummary = serde_json::from_str(json).unwrap();
        assert_eq!(email.id, EmailId::new(17));
        assert_eq!(email.sender, 3);
        assert_eq!(email.created_at_display(), "2024-05-01 09:30");
    }

    #[test]
    fn test_unparseable_timestamp_is_shown_raw() {
        let json = r#"{"id": 1, "sender": 1, "recipient": "a@b.c", "subject": "s", "body": null, "created_at": "yesterday"}"#;
        let email: EmailSummary = serde_json::from_str(json).unwrap();
        assert!(email.body.is_empty());
        assert_eq!(email.created_at_display(), "yesterday");
    }

    #[test]
    fn test_email_detail_null_message() {
        let json = r#"{"id": 5, "sender": 2, "recipient": "a@b.c", "subject": "Hi", "message": null}"#;
        let email: EmailDetail = serde_json::from_str(json).unwrap();
        assert_eq!(email.message, "");

        let json = r#"{"id": 5, "sender": 2, "recipient": "a@b.c", "subject": "Hi"}"#;
        let email: EmailDetail = serde_json::from_str(json).unwrap();
        assert_eq!(email.message, "");
    }

    #[test]
    fn test_new_email_wire_shape() {
        let email = NewEmail {
            sender: 9,
            recipient: "x@y.z".to_string(),
            subject: "S".to_string(),
            message: "{}".to_string(),
        };
        let value = serde_json::to_value(&email).unwrap();
        assert_eq!(value["sender"], 9);
        assert_eq!(value["recipient"], "x@y.z");
        assert_eq!(value["message"], "{}");
    }

    #[test]
    fn test_registration_debug_hides_password() {
        let reg = Registration {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{reg:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
