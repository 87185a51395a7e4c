//! State models for the mail client.

mod auth_form;
mod composer;
mod email_detail;
mod email_list;
mod route;
mod settings;
mod user;

pub use auth_form::{AuthFormState, AuthMode, AuthRequest};
pub use composer::{ComposerState, Format};
pub use email_detail::{BODY_UNAVAILABLE, DetailStatus, EmailDetailState};
pub use email_list::EmailListState;
pub use route::{Route, gate};
pub use settings::AppSettings;
pub use user::{UserState, UserStatus};
