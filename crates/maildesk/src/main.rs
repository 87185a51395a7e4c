//! `Maildesk` - desktop client for a REST webmail service.
//!
//! Built with Rust and the iced GUI framework on top of `maildesk-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use iced::keyboard::{self, Key, Modifiers};
use iced::{Element, Subscription, Task, Theme};
use maildesk_core::{
    ApiClient, ClientConfig, Credentials, EmailDetail, EmailId, EmailSummary, KeyringStore,
    NewEmail, PaginationData, Session, User,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{AuthFormMessage, ComposerMessage, KeyboardAction, ListMessage, Message};
use model::{
    AppSettings, AuthFormState, AuthRequest, ComposerState, EmailDetailState, EmailListState,
    Route, UserState, gate,
};
use style::widgets::palette::{self, ThemeMode};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maildesk=debug,maildesk_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Maildesk");

    iced::application(Maildesk::new, Maildesk::update, Maildesk::view)
        .title("Maildesk")
        .theme(Maildesk::theme)
        .subscription(Maildesk::subscription)
        .run()
}

/// Main application state.
struct Maildesk {
    /// Current route; `Starting` until settings are loaded.
    route: Route,
    /// Persisted settings.
    settings: AppSettings,
    /// Signed-in identity.
    session: Session,
    /// Service client, built once settings are known.
    client: Option<ApiClient>,
    /// Why the client could not be built from settings.
    startup_error: Option<String>,
    /// Login page form.
    auth_form: AuthFormState,
    /// Current user on the mailbox page.
    user: UserState,
    /// Compose form.
    composer: ComposerState,
    /// Sent-email list.
    list: EmailListState,
    /// Open detail modal.
    detail: Option<EmailDetailState>,
}

impl Maildesk {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::with_session(Session::restore(Arc::new(KeyringStore::default())));
        app.apply_theme();
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    fn with_session(session: Session) -> Self {
        let settings = AppSettings::default();
        Self {
            route: Route::Starting,
            list: EmailListState::new(settings.page_size),
            settings,
            session,
            client: None,
            startup_error: None,
            auth_form: AuthFormState::new(),
            user: UserState::default(),
            composer: ComposerState::new(),
            detail: None,
        }
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        palette::set_theme(self.settings.theme_mode);
    }

    /// Builds the service client from settings, falling back to the
    /// default address when the configured one is invalid.
    fn connect(&mut self) {
        let client = match ApiClient::new(&self.settings.client_config()) {
            Ok(client) => Ok(client),
            Err(e) => {
                warn!("Invalid service settings, using defaults: {e}");
                self.startup_error = Some(format!("Invalid service settings: {e}"));
                ApiClient::new(&ClientConfig::default().with_env_override())
            }
        };
        match client {
            Ok(client) => {
                info!("Using mail service at {}", client.base_url());
                self.list = EmailListState::new(client.page_size());
                self.client = Some(client);
            }
            Err(e) => {
                warn!("No usable mail service address: {e}");
                self.startup_error = Some(format!("No usable mail service address: {e}"));
            }
        }
    }

    fn api(&self) -> Result<ApiClient, String> {
        self.client.clone().ok_or_else(|| {
            self.startup_error
                .clone()
                .unwrap_or_else(|| "Mail service is not configured".to_string())
        })
    }

    fn auth(&self) -> Option<Credentials> {
        self.session.credentials().cloned()
    }

    fn page_size(&self) -> u32 {
        self.client
            .as_ref()
            .map_or(self.settings.page_size, ApiClient::page_size)
    }

    /// Moves to `requested` as the gate allows and starts what the new
    /// route needs.
    fn navigate(&mut self, requested: Route) -> Task<Message> {
        let route = gate(requested, self.session.is_authenticated());
        if route != requested {
            info!("Redirecting {} to {}", requested.path(), route.path());
        }
        if route == self.route {
            return Task::none();
        }
        info!("Navigating to {}", route.path());
        self.route = route;
        match route {
            Route::Emails => self.fetch_current_user(),
            Route::Login | Route::Starting => Task::none(),
        }
    }

    fn fetch_current_user(&mut self) -> Task<Message> {
        let ticket = self.user.begin();
        Task::perform(fetch_current_user(self.api(), self.auth()), move |result| {
            Message::UserLoaded(ticket, result)
        })
    }

    fn fetch_emails(&mut self, page: u32) -> Task<Message> {
        let (ticket, page) = self.list.request(page);
        debug!("Fetching page {page} of sent emails");
        Task::perform(fetch_emails(self.api(), self.auth(), page), move |result| {
            Message::EmailsLoaded(ticket, result)
        })
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(route) => {
                return self.navigate(route);
            }
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => {
                        info!("Settings loaded: theme={:?}", settings.theme_mode);
                        self.settings = settings;
                    }
                    Err(e) => {
                        info!("Failed to load settings, using defaults: {}", e);
                    }
                }
                self.apply_theme();
                self.connect();
                return self.navigate(Route::Login);
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {e}");
                }
            }
            Message::ToggleTheme => {
                self.settings.toggle_theme();
                self.apply_theme();
                info!("Theme changed to {:?}", self.settings.theme_mode);
                return Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
            }
            Message::AuthForm(msg) => {
                return self.handle_auth_form(msg);
            }
            Message::AuthFinished(ticket, result) => match result {
                Ok(credentials) => {
                    if !self.auth_form.finish(ticket, Ok(())) {
                        return Task::none();
                    }
                    if let Err(e) = self.session.sign_in(credentials) {
                        warn!("Failed to store credentials: {e}");
                        self.auth_form.submit_error = Some(format!("Failed to store credentials: {e}"));
                        return Task::none();
                    }
                    self.auth_form.reset();
                    return self.navigate(Route::Emails);
                }
                Err(error) => {
                    warn!("Authentication failed: {error}");
                    self.auth_form.finish(ticket, Err(error));
                }
            },
            Message::Logout => {
                self.session.sign_out();
                self.user.reset();
                self.composer.reset();
                self.list = EmailListState::new(self.page_size());
                self.detail = None;
                self.auth_form.reset();
                return self.navigate(Route::Login);
            }
            Message::UserLoaded(ticket, result) => {
                if let Err(e) = &result {
                    warn!("Failed to load current user: {e}");
                }
                if self.user.finish(ticket, result) {
                    return self.fetch_emails(1);
                }
            }
            Message::Composer(msg) => {
                return self.handle_composer(msg);
            }
            Message::EmailSent(ticket, result) => {
                if let Err(e) = &result {
                    warn!("Failed to send email: {e}");
                }
                if self.composer.finish(ticket, result) {
                    info!("Email sent");
                    return self.fetch_emails(1);
                }
            }
            Message::List(msg) => {
                let page = match msg {
                    ListMessage::Previous => self.list.previous_page(),
                    ListMessage::Next => self.list.next_page(),
                    ListMessage::Refresh => Some(1),
                };
                if let Some(page) = page {
                    return self.fetch_emails(page);
                }
            }
            Message::EmailsLoaded(ticket, result) => {
                if let Err(e) = &result {
                    warn!("Failed to load emails: {e}");
                }
                self.list.finish(ticket, result);
            }
            Message::OpenEmail(id) => {
                let (detail, ticket) = EmailDetailState::open(id);
                self.detail = Some(detail);
                return Task::perform(fetch_email(self.api(), self.auth(), id), move |result| {
                    Message::EmailLoaded(ticket, result)
                });
            }
            Message::CloseEmail => {
                self.detail = None;
            }
            Message::EmailLoaded(ticket, result) => {
                if let Some(detail) = &mut self.detail {
                    detail.finish(ticket, result);
                }
            }
            Message::KeyPressed(action) => {
                return self.handle_keyboard_action(action);
            }
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Handle login form messages.
    fn handle_auth_form(&mut self, msg: AuthFormMessage) -> Task<Message> {
        match msg {
            AuthFormMessage::UsernameChanged(username) => {
                self.auth_form.username = username;
            }
            AuthFormMessage::EmailChanged(email) => {
                self.auth_form.email = email;
            }
            AuthFormMessage::PasswordChanged(password) => {
                self.auth_form.password = password;
            }
            AuthFormMessage::ToggleMode => {
                self.auth_form.toggle_mode();
            }
            AuthFormMessage::Submit => {
                if let Some((ticket, request)) = self.auth_form.submit() {
                    return Task::perform(authenticate(self.api(), request), move |result| {
                        Message::AuthFinished(ticket, result)
                    });
                }
            }
        }
        Task::none()
    }

    /// Handle composer messages.
    fn handle_composer(&mut self, msg: ComposerMessage) -> Task<Message> {
        match msg {
            ComposerMessage::Toggle => {
                self.composer.toggle();
            }
            ComposerMessage::RecipientChanged(recipient) => {
                if !self.composer.is_submitting() {
                    self.composer.recipient = recipient;
                }
            }
            ComposerMessage::SubjectChanged(subject) => {
                if !self.composer.is_submitting() {
                    self.composer.subject = subject;
                }
            }
            ComposerMessage::Edit(action) => {
                self.composer.edit(action);
            }
            ComposerMessage::Format(format) => {
                self.composer.apply_format(format);
            }
            ComposerMessage::Send => {
                let Some(sender) = self.user.user() else {
                    return Task::none();
                };
                if let Some((ticket, email)) = self.composer.submit(sender) {
                    info!("Sending email to {}", email.recipient);
                    return Task::perform(
                        send_email(self.api(), self.auth(), email),
                        move |result| Message::EmailSent(ticket, result),
                    );
                }
            }
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        if self.route != Route::Emails || self.user.user().is_none() {
            return Task::none();
        }
        match action {
            KeyboardAction::ComposeNew => {
                if !self.composer.is_open() {
                    self.composer.toggle();
                }
            }
            KeyboardAction::Send => {
                if self.composer.is_open() {
                    return Task::done(Message::Composer(ComposerMessage::Send));
                }
            }
            KeyboardAction::Cancel => {
                if self.detail.take().is_none() {
                    self.composer.cancel();
                }
            }
            KeyboardAction::Refresh => {
                return Task::done(Message::List(ListMessage::Refresh));
            }
        }
        Task::none()
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        match self.route {
            Route::Starting => view::view_loading(),
            Route::Login => view::view_login(&self.auth_form, self.startup_error.as_deref()),
            Route::Emails => view::view_emails_page(
                &self.user,
                &self.composer,
                &self.list,
                self.detail.as_ref(),
                self.settings.theme_mode,
            ),
        }
    }

    /// Built-in theme matching the palette, for widgets without a custom style.
    fn theme(&self) -> Theme {
        match self.settings.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(&key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    let action = match key {
        Key::Character(c) if ctrl && c.as_str() == "n" => KeyboardAction::ComposeNew,
        Key::Named(keyboard::key::Named::Enter) if ctrl => KeyboardAction::Send,
        Key::Named(keyboard::key::Named::Escape) => KeyboardAction::Cancel,
        Key::Named(keyboard::key::Named::F5) => KeyboardAction::Refresh,
        _ => return None,
    };
    Some(Message::KeyPressed(action))
}

fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("maildesk")
        .join("settings.json")
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    read_settings(&settings_path())
        .await
        .map_err(|e| format!("{e:#}"))
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    write_settings(&settings_path(), &settings)
        .await
        .map_err(|e| format!("{e:#}"))
}

async fn read_settings(path: &Path) -> anyhow::Result<AppSettings> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?;
    if !exists {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

async fn write_settings(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let contents = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Settings saved to {}", path.display());
    Ok(())
}

/// Verify a login or create an account; returns the credentials to keep.
async fn authenticate(
    client: Result<ApiClient, String>,
    request: AuthRequest,
) -> Result<Credentials, String> {
    let client = client?;
    match request {
        AuthRequest::Login(credentials) => {
            let user = client
                .login(&credentials)
                .await
                .map_err(|e| e.to_string())?;
            info!("Logged in as {}", user.username);
            Ok(credentials)
        }
        AuthRequest::Register(registration) => {
            let credentials = client
                .register(&registration)
                .await
                .map_err(|e| e.to_string())?;
            info!("Registered {}", credentials.username());
            Ok(credentials)
        }
    }
}

async fn fetch_current_user(
    client: Result<ApiClient, String>,
    auth: Option<Credentials>,
) -> Result<User, String> {
    client?
        .get_current_user(auth.as_ref())
        .await
        .map_err(|e| e.to_string())
}

async fn fetch_emails(
    client: Result<ApiClient, String>,
    auth: Option<Credentials>,
    page: u32,
) -> Result<PaginationData<EmailSummary>, String> {
    client?
        .get_emails(auth.as_ref(), page)
        .await
        .map_err(|e| e.to_string())
}

async fn send_email(
    client: Result<ApiClient, String>,
    auth: Option<Credentials>,
    email: NewEmail,
) -> Result<EmailSummary, String> {
    client?
        .send_email(auth.as_ref(), &email)
        .await
        .map_err(|e| e.to_string())
}

async fn fetch_email(
    client: Result<ApiClient, String>,
    auth: Option<Credentials>,
    id: EmailId,
) -> Result<EmailDetail, String> {
    client?
        .get_email(auth.as_ref(), id)
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maildesk_core::{CredentialStore, MemoryStore};

    fn app(store: MemoryStore) -> Maildesk {
        let mut app = Maildesk::with_session(Session::restore(Arc::new(store)));
        app.connect();
        app
    }

    fn signed_in() -> Maildesk {
        app(MemoryStore::with_credentials(&Credentials::new("alice", "pw")))
    }

    fn alice() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    /// Signed in on the mailbox page with the current user loaded.
    fn on_mailbox() -> Maildesk {
        let mut app = signed_in();
        let _ = app.update(Message::NavigateTo(Route::Emails));
        let ticket = app.user.begin();
        app.user.finish(ticket, Ok(alice()));
        app
    }

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("maildesk-{name}-{}", std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn test_signed_out_navigation_lands_on_login() {
        let mut app = app(MemoryStore::new());
        let _ = app.update(Message::NavigateTo(Route::Emails));
        assert_eq!(app.route, Route::Login);
        assert!(!app.user.is_pending());
        assert!(!app.list.is_loading());
    }

    #[test]
    fn test_signed_in_navigation_fetches_user() {
        let mut app = signed_in();
        let _ = app.update(Message::NavigateTo(Route::Emails));
        assert_eq!(app.route, Route::Emails);
        assert!(app.user.is_pending());
    }

    #[test]
    fn test_login_success_persists_and_opens_mailbox() {
        let store = Arc::new(MemoryStore::new());
        let mut app = Maildesk::with_session(Session::restore(store.clone()));
        app.connect();
        let _ = app.update(Message::NavigateTo(Route::Login));
        app.auth_form.username = "alice".to_string();
        app.auth_form.password = "pw".to_string();
        let (ticket, _) = app.auth_form.submit().unwrap();

        let _ = app.update(Message::AuthFinished(ticket, Ok(Credentials::new("alice", "pw"))));
        assert!(app.session.is_authenticated());
        assert_eq!(store.load().unwrap(), Some(Credentials::new("alice", "pw")));
        assert_eq!(app.route, Route::Emails);
        assert!(app.user.is_pending());
    }

    #[test]
    fn test_login_failure_persists_nothing() {
        let store = Arc::new(MemoryStore::new());
        let mut app = Maildesk::with_session(Session::restore(store.clone()));
        app.connect();
        let _ = app.update(Message::NavigateTo(Route::Login));
        app.auth_form.username = "alice".to_string();
        app.auth_form.password = "wrong".to_string();
        let (ticket, _) = app.auth_form.submit().unwrap();

        let _ = app.update(Message::AuthFinished(
            ticket,
            Err("Invalid username/password.".to_string()),
        ));
        assert!(!app.session.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(app.route, Route::Login);
        assert_eq!(
            app.auth_form.submit_error.as_deref(),
            Some("Invalid username/password.")
        );
    }

    #[test]
    fn test_sent_email_closes_composer_and_reloads_first_page() {
        let mut app = on_mailbox();
        let (ticket, _) = app.list.request(3);
        app.list.finish(
            ticket,
            Ok(PaginationData {
                count: 12,
                next: None,
                previous: Some("http://host/api/emails/?limit=5&offset=5".to_string()),
                results: Vec::new(),
            }),
        );
        assert_eq!(app.list.page, 3);

        app.composer.toggle();
        app.composer.recipient = "bob@example.com".to_string();
        app.composer.subject = "Hi".to_string();
        let (ticket, email) = app.composer.submit(&alice()).unwrap();

        let stored = EmailSummary {
            id: EmailId::new(12),
            sender: email.sender,
            recipient: email.recipient,
            subject: email.subject,
            body: email.message,
            created_at: "2024-05-01T09:30:00Z".to_string(),
        };
        let _ = app.update(Message::EmailSent(ticket, Ok(stored)));

        assert!(!app.composer.is_open());
        assert!(app.composer.recipient.is_empty());
        assert!(app.composer.subject.is_empty());
        assert!(app.list.is_loading());
        assert_eq!(app.list.pending_page(), 1);
    }

    #[test]
    fn test_failed_send_keeps_list_idle() {
        let mut app = on_mailbox();
        app.composer.toggle();
        app.composer.recipient = "bob@example.com".to_string();
        app.composer.subject = "Hi".to_string();
        let (ticket, _) = app.composer.submit(&alice()).unwrap();

        let _ = app.update(Message::EmailSent(ticket, Err("Error sending email".to_string())));
        assert!(app.composer.is_open());
        assert_eq!(app.composer.recipient, "bob@example.com");
        assert!(!app.list.is_loading());
    }

    #[test]
    fn test_signed_in_login_redirects_to_emails() {
        let mut app = signed_in();
        let _ = app.update(Message::NavigateTo(Route::Login));
        assert_eq!(app.route, Route::Emails);
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut app = signed_in();
        let _ = app.update(Message::NavigateTo(Route::Emails));
        app.composer.toggle();
        app.composer.recipient = "bob@example.com".to_string();
        let _ = app.update(Message::OpenEmail(EmailId::new(3)));
        assert!(app.detail.is_some());

        let _ = app.update(Message::Logout);
        assert_eq!(app.route, Route::Login);
        assert!(!app.session.is_authenticated());
        assert!(app.session.auth_header().is_empty());
        assert!(!app.composer.is_open());
        assert!(app.composer.recipient.is_empty());
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_escape_closes_modal_before_composer() {
        let mut app = on_mailbox();
        let _ = app.update(Message::KeyPressed(KeyboardAction::ComposeNew));
        let _ = app.update(Message::OpenEmail(EmailId::new(3)));

        let _ = app.update(Message::KeyPressed(KeyboardAction::Cancel));
        assert!(app.detail.is_none());
        assert!(app.composer.is_open());

        let _ = app.update(Message::KeyPressed(KeyboardAction::Cancel));
        assert!(!app.composer.is_open());
    }

    #[test]
    fn test_shortcuts_ignored_on_login_page() {
        let mut app = app(MemoryStore::new());
        let _ = app.update(Message::NavigateTo(Route::Login));
        let _ = app.update(Message::KeyPressed(KeyboardAction::ComposeNew));
        assert!(!app.composer.is_open());
    }

    #[test]
    fn test_handle_key_press() {
        let ctrl_n = handle_key_press(&Key::Character("n".into()), Modifiers::COMMAND);
        assert!(matches!(
            ctrl_n,
            Some(Message::KeyPressed(KeyboardAction::ComposeNew))
        ));

        let plain_n = handle_key_press(&Key::Character("n".into()), Modifiers::empty());
        assert!(plain_n.is_none());

        let escape = handle_key_press(
            &Key::Named(keyboard::key::Named::Escape),
            Modifiers::empty(),
        );
        assert!(matches!(
            escape,
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        ));
    }

    #[tokio::test]
    async fn test_missing_settings_file_gives_defaults() {
        let path = temp_settings_path("missing");
        let settings = read_settings(&path).await.unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn test_settings_persist() {
        let path = temp_settings_path("persist");
        let mut settings = AppSettings::default();
        settings.toggle_theme();
        settings.page_size = 10;

        write_settings(&path, &settings).await.unwrap();
        let loaded = read_settings(&path).await.unwrap();
        assert_eq!(loaded, settings);

        if let Some(dir) = path.parent() {
            tokio::fs::remove_dir_all(dir).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_corrupt_settings_report_path() {
        let path = temp_settings_path("corrupt");
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "{not json").await.unwrap();

        let error = format!("{:#}", read_settings(&path).await.unwrap_err());
        assert!(error.contains("Failed to parse"));

        tokio::fs::remove_dir_all(path.parent().unwrap()).await.unwrap();
    }
}
