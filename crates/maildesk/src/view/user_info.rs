//! Header with the signed-in user.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use maildesk_core::User;

use crate::message::Message;
use crate::style::widgets;
use crate::style::widgets::palette::{self, ThemeMode};

/// Renders the title bar with the user, the theme switch and "Log out".
pub fn view_user_info(user: &User, theme_mode: ThemeMode) -> Element<'_, Message> {
    let p = palette::current();

    let title = text("Mail client")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.primary);

    let who = text(format!("User: {} ({})", user.username, user.email))
        .size(14)
        .color(p.text_secondary);

    let theme_label = match theme_mode {
        ThemeMode::Light => "\u{263E} Dark",
        ThemeMode::Dark => "\u{2600} Light",
    };
    let theme_toggle = button(text(theme_label).size(13))
        .padding([6, 10])
        .style(widgets::link_button_style)
        .on_press(Message::ToggleTheme);

    let logout = button(text("Log out").size(14))
        .padding([8, 16])
        .style(widgets::danger_button_style)
        .on_press(Message::Logout);

    container(
        row![
            title,
            Space::new().width(Length::Fill),
            who,
            theme_toggle,
            logout
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding([14, 24])
    .width(Length::Fill)
    .style(widgets::header_style)
    .into()
}
