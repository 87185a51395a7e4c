//! Login page: sign in or register with one form.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::{error_banner, labeled_input, labeled_password};
use crate::message::{AuthFormMessage, Message};
use crate::model::{AuthFormState, AuthMode};
use crate::style::widgets::{self, palette};

/// Render the login page.
pub fn view_login<'a>(
    state: &'a AuthFormState,
    startup_error: Option<&'a str>,
) -> Element<'a, Message> {
    let p = palette::current();
    let submitting = state.is_submitting();

    let (title, submit_label, busy_label, switch_label) = match state.mode {
        AuthMode::SignIn => (
            "Sign in",
            "Sign in",
            "Signing in...",
            "No account? Register",
        ),
        AuthMode::Register => (
            "Register",
            "Register",
            "Registering...",
            "Already registered? Sign in",
        ),
    };

    let mut form = column![
        text("Mail client").size(28).color(p.text_primary),
        text(title).size(16).color(p.text_secondary),
        Space::new().height(8),
        labeled_input(
            "Username",
            "Username",
            &state.username,
            |s| Message::AuthForm(AuthFormMessage::UsernameChanged(s)),
            !submitting,
            state.errors.get("username"),
        ),
    ]
    .spacing(12);

    if state.mode == AuthMode::Register {
        form = form.push(labeled_input(
            "Email",
            "user@example.com",
            &state.email,
            |s| Message::AuthForm(AuthFormMessage::EmailChanged(s)),
            !submitting,
            state.errors.get("email"),
        ));
    }

    form = form.push(labeled_password(
        "Password",
        &state.password,
        |s| Message::AuthForm(AuthFormMessage::PasswordChanged(s)),
        !submitting,
        state.errors.get("password"),
    ));

    if let Some(error) = &state.submit_error {
        form = form.push(error_banner(error));
    }
    if let Some(error) = startup_error {
        form = form.push(error_banner(error));
    }

    let submit = button(text(if submitting { busy_label } else { submit_label }).size(14))
        .padding([10, 20])
        .style(widgets::primary_button_style)
        .on_press_maybe((!submitting).then_some(Message::AuthForm(AuthFormMessage::Submit)));

    let switch = button(text(switch_label).size(13))
        .padding([6, 8])
        .style(widgets::link_button_style)
        .on_press_maybe((!submitting).then_some(Message::AuthForm(AuthFormMessage::ToggleMode)));

    form = form.push(
        row![submit, Space::new().width(Length::Fill), switch]
            .spacing(12)
            .align_y(Alignment::Center),
    );

    let card = container(form)
        .padding(32)
        .max_width(420)
        .style(widgets::card_style);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(widgets::page_style)
        .into()
}
