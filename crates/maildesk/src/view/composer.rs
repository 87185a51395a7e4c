//! Composer panel.

use iced::widget::{Row, Space, button, column, container, row, text, text_editor};
use iced::{Alignment, Element, Length};
use maildesk_core::User;

use super::{error_banner, labeled_input};
use crate::message::{ComposerMessage, Message};
use crate::model::{ComposerState, Format};
use crate::style::widgets::{self, palette};

/// Renders the "New letter" button, plus the form when it is open.
pub fn view_composer<'a>(state: &'a ComposerState, sender: &'a User) -> Element<'a, Message> {
    let submitting = state.is_submitting();

    let toggle = if state.is_open() {
        button(text("Cancel").size(14))
            .padding([8, 16])
            .style(widgets::secondary_button_style)
            .on_press_maybe((!submitting).then_some(Message::Composer(ComposerMessage::Toggle)))
    } else {
        button(text("New letter").size(14))
            .padding([8, 16])
            .style(widgets::primary_button_style)
            .on_press(Message::Composer(ComposerMessage::Toggle))
    };

    if !state.is_open() {
        return row![toggle].into();
    }

    let mut form = column![
        toggle,
        labeled_input("Sender", "", &sender.email, |_| Message::Ignored, false, None),
        labeled_input(
            "Recipient",
            "recipient@example.com",
            &state.recipient,
            |s| Message::Composer(ComposerMessage::RecipientChanged(s)),
            !submitting,
            state.errors.get("recipient"),
        ),
        labeled_input(
            "Topic",
            "Topic",
            &state.subject,
            |s| Message::Composer(ComposerMessage::SubjectChanged(s)),
            !submitting,
            state.errors.get("subject"),
        ),
        view_body(state),
    ]
    .spacing(12);

    if let Some(error) = &state.send_error {
        form = form.push(error_banner(error));
    }

    let send = button(text(if submitting { "Sending..." } else { "Send" }).size(14))
        .padding([10, 24])
        .style(widgets::primary_button_style)
        .on_press_maybe((!submitting).then_some(Message::Composer(ComposerMessage::Send)));
    form = form.push(send);

    container(form)
        .padding(20)
        .width(Length::Fill)
        .style(widgets::card_style)
        .into()
}

/// "Text of the letter" label, the formatting toolbar and the editor.
fn view_body(state: &ComposerState) -> Element<'_, Message> {
    let p = palette::current();
    let submitting = state.is_submitting();

    let toolbar = Format::ALL
        .iter()
        .fold(Row::new().spacing(4), |toolbar, &format| {
            toolbar.push(
                button(text(format.label()).size(13))
                    .padding([4, 10])
                    .style(widgets::toolbar_button_style)
                    .on_press_maybe(
                        (!submitting)
                            .then_some(Message::Composer(ComposerMessage::Format(format))),
                    ),
            )
        })
        .align_y(Alignment::Center);

    let editor = text_editor(&state.body)
        .placeholder("Write your letter...")
        .on_action(|action| Message::Composer(ComposerMessage::Edit(action)))
        .height(Length::Fixed(200.0))
        .padding(10)
        .style(widgets::editor_style);

    column![
        text("Text of the letter").size(13).color(p.text_secondary),
        toolbar,
        Space::new().height(2),
        editor,
    ]
    .spacing(4)
    .into()
}
