//! Text input, editor and scrollable style functions.

use iced::widget::{container, scrollable, text_editor, text_input};
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Form text input.
pub fn input_style(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let p = palette::current();

    let base = text_input::Style {
        background: Background::Color(p.surface),
        border: Border {
            color: p.border_strong,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        icon: p.text_muted,
        placeholder: p.text_muted,
        value: p.text_primary,
        selection: p.pressed,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: p.text_muted,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: p.primary,
                width: 2.0,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: Background::Color(p.surface_sunken),
            value: p.text_muted,
            ..base
        },
    }
}

/// Letter body editor, layered over the built-in style.
pub fn editor_style(theme: &iced::Theme, status: text_editor::Status) -> text_editor::Style {
    let p = palette::current();

    let mut style = text_editor::default(theme, status);
    style.background = Background::Color(p.surface);
    style.placeholder = p.text_muted;
    style.value = p.text_primary;
    style.selection = p.pressed;
    style.border = Border {
        color: p.border_strong,
        width: 1.0,
        radius: radius::MEDIUM.into(),
    };

    match status {
        text_editor::Status::Hovered => {
            style.border.color = p.text_muted;
        }
        text_editor::Status::Focused { .. } => {
            style.border.color = p.primary;
            style.border.width = 2.0;
        }
        text_editor::Status::Disabled => {
            style.background = Background::Color(p.surface_sunken);
            style.value = p.text_muted;
        }
        text_editor::Status::Active => {}
    }
    style
}

/// Scrollable style.
pub fn scrollable_style(_theme: &iced::Theme, status: scrollable::Status) -> scrollable::Style {
    let p = palette::current();

    let scroller_border = Border {
        color: Color::TRANSPARENT,
        width: 0.0,
        radius: radius::SMALL.into(),
    };
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(p.border_strong),
            border: scroller_border,
        },
    };

    let base = scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(p.surface),
            border: Border::default(),
            shadow: shadows::none(),
            icon: p.text_muted,
        },
    };

    match status {
        scrollable::Status::Active { .. } => base,
        scrollable::Status::Hovered {
            is_vertical_scrollbar_hovered,
            ..
        } => {
            let mut style = base;
            if is_vertical_scrollbar_hovered {
                style.vertical_rail.scroller.background = Background::Color(p.text_muted);
            }
            style
        }
        scrollable::Status::Dragged {
            is_vertical_scrollbar_dragged,
            ..
        } => {
            let mut style = base;
            if is_vertical_scrollbar_dragged {
                style.vertical_rail.scroller.background = Background::Color(p.primary);
            }
            style
        }
    }
}
