//! View components for the application.

mod composer;
mod email_detail;
mod email_list;
mod emails_page;
mod login;
mod user_info;

use iced::widget::{column, container, text, text_input};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets::{self, palette};

pub use emails_page::view_emails_page;
pub use login::view_login;

/// Full-window "Loading..." placeholder.
pub fn view_loading() -> Element<'static, Message> {
    let p = palette::current();
    container(text("Loading...").size(16).color(p.text_secondary))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(widgets::page_style)
        .into()
}

/// Inline error box.
fn error_banner(message: &str) -> Element<'_, Message> {
    container(text(message).size(14))
        .padding([10, 14])
        .width(Length::Fill)
        .style(widgets::error_banner_style)
        .into()
}

/// Label, input and the field's validation error underneath.
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    enabled: bool,
    error: Option<&'a String>,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input_maybe(enabled.then_some(on_input))
        .padding(10)
        .size(14)
        .style(widgets::input_style);
    with_label(label, input, error)
}

/// Masked variant of [`labeled_input`].
fn labeled_password<'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    enabled: bool,
    error: Option<&'a String>,
) -> Element<'a, Message> {
    let input = text_input("", value)
        .on_input_maybe(enabled.then_some(on_input))
        .padding(10)
        .size(14)
        .secure(true)
        .style(widgets::input_style);
    with_label(label, input, error)
}

fn with_label<'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
    error: Option<&'a String>,
) -> Element<'a, Message> {
    let p = palette::current();
    let mut col = column![text(label).size(13).color(p.text_secondary), input.into()].spacing(4);

    if let Some(err) = error {
        col = col.push(text(err).size(12).color(p.danger));
    }

    col.into()
}
