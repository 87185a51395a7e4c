//! Current-user state for the mailbox page.

use maildesk_core::{RequestTracker, Ticket, User};

/// Where the current-user fetch stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserStatus {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Fetch failed; the message is shown instead of the page.
    Failed(String),
    /// User known; the page content is mounted.
    Loaded(User),
}

/// Current user plus the ticket of its fetch.
#[derive(Debug, Clone, Default)]
pub struct UserState {
    /// Fetch status.
    pub status: UserStatus,
    tracker: RequestTracker,
}

impl UserState {
    /// Starts a fresh fetch and returns its ticket.
    pub fn begin(&mut self) -> Ticket {
        self.status = UserStatus::Loading;
        self.tracker.issue()
    }

    /// Applies a fetch result. Returns `true` when the user is now loaded.
    pub fn finish(&mut self, ticket: Ticket, result: Result<User, String>) -> bool {
        if !self.tracker.complete(ticket) {
            return false;
        }
        match result {
            Ok(user) => {
                self.status = UserStatus::Loaded(user);
                true
            }
            Err(error) => {
                self.status = UserStatus::Failed(error);
                false
            }
        }
    }

    /// The loaded user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match &self.status {
            UserStatus::Loaded(user) => Some(user),
            _ => None,
        }
    }

    /// Whether a fetch is in flight.
    #[cfg(test)]
    pub const fn is_pending(&self) -> bool {
        self.tracker.is_pending()
    }

    /// Forgets the user and drops any in-flight fetch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn test_load_user() {
        let mut state = UserState::default();
        let ticket = state.begin();
        assert!(state.finish(ticket, Ok(alice())));
        assert_eq!(state.user().map(|u| u.id), Some(7));
        assert!(!state.is_pending());
    }

    #[test]
    fn test_failure_is_shown() {
        let mut state = UserState::default();
        let ticket = state.begin();
        assert!(!state.finish(ticket, Err("Failed to retrieve user data".to_string())));
        assert_eq!(
            state.status,
            UserStatus::Failed("Failed to retrieve user data".to_string())
        );
    }

    #[test]
    fn test_response_after_reset_is_dropped() {
        let mut state = UserState::default();
        let ticket = state.begin();
        state.reset();
        assert!(!state.finish(ticket, Ok(alice())));
        assert_eq!(state.user(), None);
    }
}
