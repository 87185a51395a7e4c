//! Routes and the protected-route gate.

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Settings not loaded yet.
    #[default]
    Starting,
    /// Sign in or register (`/`).
    Login,
    /// Mailbox (`/emails`).
    Emails,
}

impl Route {
    /// Path shown in logs.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Starting => "",
            Self::Login => "/",
            Self::Emails => "/emails",
        }
    }
}

/// Resolves where a navigation actually lands.
///
/// The mailbox needs a session and the login page is skipped when one
/// exists.
#[must_use]
pub const fn gate(requested: Route, authenticated: bool) -> Route {
    match (requested, authenticated) {
        (Route::Emails, false) => Route::Login,
        (Route::Login, true) => Route::Emails,
        (route, _) => route,
    }
}
