//! Sent-email list state.

use maildesk_core::{EmailSummary, PaginationData, RequestTracker, Ticket};

/// Paginated list of sent emails.
#[derive(Debug, Clone)]
pub struct EmailListState {
    /// Page shown (1-based).
    pub page: u32,
    /// Last envelope received.
    pub data: PaginationData<EmailSummary>,
    /// Last fetch error; cleared by the next successful fetch.
    pub error: Option<String>,
    page_size: u32,
    pending_page: u32,
    tracker: RequestTracker,
}

impl EmailListState {
    /// Creates an empty list that counts pages of `page_size`.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            data: PaginationData::default(),
            error: None,
            page_size,
            pending_page: 1,
            tracker: RequestTracker::new(),
        }
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.tracker.is_pending()
    }

    /// Starts fetching `page`, superseding any earlier fetch.
    pub fn request(&mut self, page: u32) -> (Ticket, u32) {
        let page = page.max(1);
        self.pending_page = page;
        (self.tracker.issue(), page)
    }

    /// Page to fetch for "Next", if the server reported one.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.data.has_next().then(|| self.page.saturating_add(1))
    }

    /// Page to fetch for "Previous", if the server reported one.
    #[must_use]
    pub fn previous_page(&self) -> Option<u32> {
        self.data
            .has_previous()
            .then(|| self.page.saturating_sub(1).max(1))
    }

    /// Page the in-flight fetch asked for.
    #[cfg(test)]
    pub const fn pending_page(&self) -> u32 {
        self.pending_page
    }

    /// Total pages for the last envelope.
    #[must_use]
    pub const fn page_count(&self) -> u64 {
        self.data.page_count(self.page_size)
    }

    /// Pagination controls are shown only for a non-empty mailbox.
    #[must_use]
    pub const fn shows_pagination(&self) -> bool {
        self.data.count > 0
    }

    /// Applies a fetch result. Stale tickets are ignored. A failure keeps
    /// the previous rows.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<PaginationData<EmailSummary>, String>,
    ) -> bool {
        if !self.tracker.complete(ticket) {
            return false;
        }
        match result {
            Ok(data) => {
                self.data = data;
                self.page = self.pending_page;
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maildesk_core::EmailId;

    fn row(id: i64) -> EmailSummary {
        EmailSummary {
            id: EmailId::new(id),
            sender: 1,
            recipient: "bob@example.com".to_string(),
            subject: format!("Email {id}"),
            body: String::new(),
            created_at: String::new(),
        }
    }

    fn envelope(count: u64, next: bool, previous: bool) -> PaginationData<EmailSummary> {
        PaginationData {
            count,
            next: next.then(|| "http://host/api/emails/?limit=5&offset=5".to_string()),
            previous: previous.then(|| "http://host/api/emails/?limit=5".to_string()),
            results: vec![row(1), row(2)],
        }
    }

    #[test]
    fn test_first_page_controls() {
        let mut list = EmailListState::new(5);
        let (ticket, page) = list.request(1);
        assert_eq!(page, 1);
        assert!(list.is_loading());

        assert!(list.finish(ticket, Ok(envelope(12, true, false))));
        assert!(!list.is_loading());
        assert_eq!(list.previous_page(), None);
        assert_eq!(list.next_page(), Some(2));
        assert_eq!(list.page_count(), 3);
        assert!(list.shows_pagination());
    }

    #[test]
    fn test_previous_follows_server_link() {
        let mut list = EmailListState::new(5);
        let (ticket, _) = list.request(1);
        list.finish(ticket, Ok(envelope(12, true, true)));
        assert_eq!(list.page, 1);
        assert_eq!(list.previous_page(), Some(1));
    }

    #[test]
    fn test_page_advances_on_success_only() {
        let mut list = EmailListState::new(5);
        let (ticket, _) = list.request(1);
        list.finish(ticket, Ok(envelope(12, true, false)));

        let (ticket, page) = list.request(2);
        assert_eq!(page, 2);
        assert!(list.finish(ticket, Err("Failed to get list of letters".to_string())));
        assert_eq!(list.page, 1);
        assert_eq!(list.data.results.len(), 2);
        assert_eq!(list.error.as_deref(), Some("Failed to get list of letters"));

        let (ticket, _) = list.request(2);
        list.finish(ticket, Ok(envelope(12, true, true)));
        assert_eq!(list.page, 2);
        assert_eq!(list.error, None);
        assert_eq!(list.previous_page(), Some(1));
    }

    #[test]
    fn test_superseded_fetch_is_dropped() {
        let mut list = EmailListState::new(5);
        let (old, _) = list.request(2);
        let (new, _) = list.request(1);
        assert!(!list.finish(old, Ok(envelope(99, true, true))));
        assert!(list.finish(new, Ok(envelope(3, false, false))));
        assert_eq!(list.data.count, 3);
        assert_eq!(list.page, 1);
    }

    #[test]
    fn test_empty_mailbox_hides_pagination() {
        let mut list = EmailListState::new(5);
        let (ticket, _) = list.request(1);
        list.finish(
            ticket,
            Ok(PaginationData {
                count: 0,
                next: None,
                previous: None,
                results: Vec::new(),
            }),
        );
        assert!(!list.shows_pagination());
        assert_eq!(list.page_count(), 0);
    }
}
