//! Email detail modal with the read-only rich-text body.

use iced::font::{Style as FontStyle, Weight};
use iced::widget::text::Span;
use iced::widget::{
    Column, Space, button, center, column, container, mouse_area, opaque, rich_text, row,
    scrollable, span, text,
};
use iced::{Alignment, Element, Font, Length, Padding};
use maildesk_core::richtext::{BlockKind, InlineStyle, RenderedBlock, StyledSpan};
use maildesk_core::{Document, EmailDetail};

use super::error_banner;
use crate::message::Message;
use crate::model::{BODY_UNAVAILABLE, DetailStatus, EmailDetailState};
use crate::style::widgets::{self, palette};

const BODY_SIZE: u16 = 15;
const INDENT: f32 = 22.0;

/// Lays the modal over `base`. Clicking the backdrop closes it.
pub fn view_modal<'a>(
    base: Element<'a, Message>,
    state: &'a EmailDetailState,
) -> Element<'a, Message> {
    let dialog = container(view_dialog(state))
        .padding(24)
        .max_width(720)
        .max_height(600)
        .style(widgets::modal_style);

    iced::widget::stack![
        base,
        opaque(
            mouse_area(center(opaque(dialog)).style(widgets::modal_backdrop_style))
                .on_press(Message::CloseEmail)
        )
    ]
    .into()
}

fn view_dialog(state: &EmailDetailState) -> Element<'_, Message> {
    let p = palette::current();

    let title = match &state.status {
        DetailStatus::Loaded { email, .. } => email.subject.as_str(),
        DetailStatus::Loading => "Loading...",
        DetailStatus::Failed => "Letter not found",
    };

    let close = button(text("\u{00D7}").size(22))
        .padding([0, 10])
        .style(widgets::link_button_style)
        .on_press(Message::CloseEmail);

    let mut content = column![
        row![
            text(title).size(22).color(p.text_primary).width(Length::Fill),
            close
        ]
        .align_y(Alignment::Center)
    ]
    .spacing(14);

    if let Some(error) = state.error() {
        content = content.push(error_banner(error));
    }

    if let DetailStatus::Loaded { email, body } = &state.status {
        content = content.push(view_header(email));
        content = content.push(text("Letter body:").size(13).color(p.text_secondary));
        content = content.push(match body {
            Some(document) => scrollable(view_document(document))
                .height(Length::Shrink)
                .style(widgets::scrollable_style)
                .into(),
            None => Element::from(text(BODY_UNAVAILABLE).size(14).color(p.text_muted)),
        });
    }

    content.into()
}

fn view_header(email: &EmailDetail) -> Element<'_, Message> {
    let p = palette::current();
    let field = |label: &'static str, value: String| {
        row![
            text(label).size(14).color(p.text_secondary).width(Length::Fixed(90.0)),
            text(value).size(14).color(p.text_primary),
        ]
        .spacing(8)
    };

    column![
        field("Sender:", email.sender.to_string()),
        field("Recipient:", email.recipient.clone()),
    ]
    .spacing(6)
    .into()
}

/// Renders a parsed body block by block.
fn view_document(document: &Document) -> Element<'static, Message> {
    document
        .blocks
        .iter()
        .fold(Column::new().spacing(8).padding([0, 8]), |col, block| {
            col.push(view_block(block))
        })
        .into()
}

fn view_block(block: &RenderedBlock) -> Element<'static, Message> {
    let p = palette::current();
    #[allow(clippy::cast_precision_loss)] // depth is capped well below f32 precision
    let indent = block.depth as f32 * INDENT;

    let element: Element<'static, Message> = match block.kind {
        BlockKind::HeadingOne => view_runs(block, 26, bold()),
        BlockKind::HeadingTwo => view_runs(block, 22, bold()),
        BlockKind::HeadingThree => view_runs(block, 18, bold()),
        BlockKind::BulletItem | BlockKind::NumberedItem => {
            let marker = block.marker().unwrap_or_default();
            row![
                text(marker)
                    .size(f32::from(BODY_SIZE))
                    .color(p.text_secondary)
                    .width(Length::Fixed(INDENT)),
                view_runs(block, BODY_SIZE, Font::DEFAULT),
            ]
            .into()
        }
        BlockKind::Quote => row![
            container(Space::new().width(3))
                .width(Length::Fixed(3.0))
                .height(Length::Fixed(f32::from(BODY_SIZE) * 1.6))
                .style(widgets::quote_bar_style),
            view_runs(
                block,
                BODY_SIZE,
                Font {
                    style: FontStyle::Italic,
                    ..Font::DEFAULT
                },
            ),
        ]
        .spacing(10)
        .into(),
        BlockKind::Code => container(view_runs(block, 14, Font::MONOSPACE))
            .padding([6, 10])
            .width(Length::Fill)
            .style(widgets::code_block_style)
            .into(),
        BlockKind::Paragraph => {
            if block.spans.is_empty() {
                Space::new().height(f32::from(BODY_SIZE)).into()
            } else {
                view_runs(block, BODY_SIZE, Font::DEFAULT)
            }
        }
    };

    container(element)
        .padding(Padding {
            left: indent,
            ..Padding::ZERO
        })
        .into()
}

fn view_runs(block: &RenderedBlock, size: u16, base: Font) -> Element<'static, Message> {
    let spans: Vec<Span<'static, Message>> =
        block.spans.iter().map(|run| styled_span(run, base)).collect();
    rich_text(spans).size(f32::from(size)).font(base).into()
}

fn styled_span(run: &StyledSpan, base: Font) -> Span<'static, Message> {
    let p = palette::current();

    let mut font = base;
    if run.has(InlineStyle::Bold) {
        font.weight = Weight::Bold;
    }
    if run.has(InlineStyle::Italic) {
        font.style = FontStyle::Italic;
    }
    if run.has(InlineStyle::Code) {
        font.family = Font::MONOSPACE.family;
    }

    let mut styled = span(run.text.clone())
        .font(font)
        .underline(run.has(InlineStyle::Underline))
        .strikethrough(run.has(InlineStyle::Strikethrough));
    if run.has(InlineStyle::Code) {
        styled = styled.background(p.code_surface);
    }
    styled
}

const fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}
