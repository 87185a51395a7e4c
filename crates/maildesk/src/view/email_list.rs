//! Sent-letters table with pagination.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use maildesk_core::EmailSummary;

use super::error_banner;
use crate::message::{ListMessage, Message};
use crate::model::EmailListState;
use crate::style::widgets::{self, palette};

const ID_WIDTH: f32 = 60.0;
const SENT_WIDTH: f32 = 150.0;

/// Renders the list card.
pub fn view_email_list(state: &EmailListState) -> Element<'_, Message> {
    let p = palette::current();

    let heading = row![
        text("Sent letters").size(20).color(p.text_primary),
        Space::new().width(Length::Fill),
        text(format!("Total emails {}", state.data.count))
            .size(14)
            .color(p.text_secondary),
    ]
    .align_y(Alignment::Center);

    let mut content = column![heading].spacing(12);

    if let Some(error) = &state.error {
        content = content.push(error_banner(error));
    }

    if state.is_loading() {
        content = content.push(text("Loading...").size(14).color(p.text_secondary));
    }

    if state.data.results.is_empty() {
        if !state.is_loading() && state.error.is_none() {
            content = content.push(text("No emails sent").size(14).color(p.text_muted));
        }
    } else {
        content = content.push(view_table(&state.data.results));
    }

    if state.shows_pagination() {
        content = content.push(view_pagination(state));
    }

    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(widgets::card_style)
        .into()
}

fn view_table(emails: &[EmailSummary]) -> Element<'_, Message> {
    let header = container(
        row![
            text("ID").size(13).width(Length::Fixed(ID_WIDTH)),
            text("Recipient").size(13).width(Length::FillPortion(2)),
            text("Topic").size(13).width(Length::FillPortion(3)),
            text("Sent").size(13).width(Length::Fixed(SENT_WIDTH)),
        ]
        .spacing(12),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(widgets::table_header_style);

    emails
        .iter()
        .fold(Column::new().push(header), |table, email| {
            table.push(view_row(email))
        })
        .into()
}

fn view_row(email: &EmailSummary) -> Element<'_, Message> {
    let p = palette::current();

    let cells = row![
        text(email.id.to_string())
            .size(14)
            .color(p.text_muted)
            .width(Length::Fixed(ID_WIDTH)),
        text(&email.recipient)
            .size(14)
            .width(Length::FillPortion(2)),
        text(&email.subject).size(14).width(Length::FillPortion(3)),
        text(email.created_at_display())
            .size(13)
            .color(p.text_secondary)
            .width(Length::Fixed(SENT_WIDTH)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let divider = container(Space::new().height(1))
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(widgets::row_border_style);

    column![
        button(cells)
            .padding([10, 12])
            .width(Length::Fill)
            .style(widgets::row_button_style)
            .on_press(Message::OpenEmail(email.id)),
        divider,
    ]
    .into()
}

fn view_pagination(state: &EmailListState) -> Element<'_, Message> {
    let p = palette::current();

    let previous = button(text("Previous").size(13))
        .padding([6, 14])
        .style(widgets::secondary_button_style)
        .on_press_maybe(
            state
                .previous_page()
                .map(|_| Message::List(ListMessage::Previous)),
        );

    let next = button(text("Next").size(13))
        .padding([6, 14])
        .style(widgets::secondary_button_style)
        .on_press_maybe(state.next_page().map(|_| Message::List(ListMessage::Next)));

    row![
        previous,
        Space::new().width(Length::Fill),
        text(format!("Page {} from {}", state.page, state.page_count()))
            .size(13)
            .color(p.text_secondary),
        Space::new().width(Length::Fill),
        next,
    ]
    .align_y(Alignment::Center)
    .into()
}
