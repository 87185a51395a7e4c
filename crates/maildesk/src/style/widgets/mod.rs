//! Widget styles with rounded corners and a light/dark palette.

#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use containers::{
    card_style, code_block_style, error_banner_style, header_style, modal_backdrop_style,
    modal_style, page_style, quote_bar_style, row_border_style, table_header_style,
};

pub use buttons::{
    danger_button_style, link_button_style, primary_button_style, row_button_style,
    secondary_button_style, toolbar_button_style,
};

pub use inputs::{editor_style, input_style, scrollable_style};
