//! Mailbox page (`/emails`).

use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length};

use super::composer::view_composer;
use super::email_detail::view_modal;
use super::email_list::view_email_list;
use super::user_info::view_user_info;
use super::{error_banner, view_loading};
use crate::message::Message;
use crate::model::{ComposerState, EmailDetailState, EmailListState, UserState, UserStatus};
use crate::style::widgets;
use crate::style::widgets::palette::ThemeMode;

/// Renders the mailbox: "Loading..." until the user is known, then the
/// header, composer and list, with the detail modal on top when open.
pub fn view_emails_page<'a>(
    user: &'a UserState,
    composer: &'a ComposerState,
    list: &'a EmailListState,
    detail: Option<&'a EmailDetailState>,
    theme_mode: ThemeMode,
) -> Element<'a, Message> {
    let user = match &user.status {
        UserStatus::Loading => return view_loading(),
        UserStatus::Failed(error) => return view_user_error(error),
        UserStatus::Loaded(user) => user,
    };

    let body = column![view_composer(composer, user), view_email_list(list)]
        .spacing(20)
        .padding(24)
        .max_width(1000);

    let page: Element<'a, Message> = container(
        column![
            view_user_info(user, theme_mode),
            scrollable(container(body).center_x(Length::Fill))
                .height(Length::Fill)
                .style(widgets::scrollable_style),
        ]
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .style(widgets::page_style)
    .into();

    match detail {
        Some(detail) => view_modal(page, detail),
        None => page,
    }
}

fn view_user_error(error: &str) -> Element<'_, Message> {
    let logout = button(text("Log out").size(14))
        .padding([8, 16])
        .style(widgets::danger_button_style)
        .on_press(Message::Logout);

    container(
        column![error_banner(error), logout]
            .spacing(16)
            .max_width(480),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(widgets::page_style)
    .into()
}
