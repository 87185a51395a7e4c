//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Brand
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_pressed: Color,

    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub surface_sunken: Color,
    pub code_surface: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Feedback
    pub danger: Color,
    pub danger_surface: Color,

    // States
    pub hover: Color,
    pub pressed: Color,

    // Borders
    pub border_subtle: Color,
    pub border_strong: Color,
    pub quote_bar: Color,

    // Overlays
    pub backdrop: Color,
    pub shadow: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.15, 0.39, 0.92),
            primary_hover: Color::from_rgb(0.11, 0.31, 0.85),
            primary_pressed: Color::from_rgb(0.09, 0.25, 0.70),

            background: Color::from_rgb(0.95, 0.96, 0.97),
            surface: Color::WHITE,
            surface_sunken: Color::from_rgb(0.97, 0.98, 0.98),
            code_surface: Color::from_rgb(0.94, 0.95, 0.96),

            text_primary: Color::from_rgb(0.07, 0.09, 0.15),
            text_secondary: Color::from_rgb(0.29, 0.33, 0.39),
            text_muted: Color::from_rgb(0.42, 0.45, 0.50),
            text_on_primary: Color::WHITE,

            danger: Color::from_rgb(0.86, 0.15, 0.15),
            danger_surface: Color::from_rgb(1.0, 0.95, 0.95),

            hover: Color::from_rgb(0.95, 0.96, 0.98),
            pressed: Color::from_rgb(0.90, 0.93, 0.98),

            border_subtle: Color::from_rgb(0.90, 0.91, 0.92),
            border_strong: Color::from_rgb(0.82, 0.84, 0.86),
            quote_bar: Color::from_rgb(0.61, 0.64, 0.69),

            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.10),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.38, 0.65, 0.98),
            primary_hover: Color::from_rgb(0.58, 0.77, 0.99),
            primary_pressed: Color::from_rgb(0.23, 0.51, 0.96),

            background: Color::from_rgb(0.07, 0.09, 0.11),
            surface: Color::from_rgb(0.12, 0.14, 0.17),
            surface_sunken: Color::from_rgb(0.10, 0.12, 0.14),
            code_surface: Color::from_rgb(0.17, 0.19, 0.23),

            text_primary: Color::from_rgb(0.95, 0.96, 0.97),
            text_secondary: Color::from_rgb(0.82, 0.84, 0.86),
            text_muted: Color::from_rgb(0.61, 0.64, 0.69),
            text_on_primary: Color::from_rgb(0.07, 0.09, 0.11),

            danger: Color::from_rgb(0.97, 0.44, 0.44),
            danger_surface: Color::from_rgb(0.27, 0.10, 0.10),

            hover: Color::from_rgb(0.16, 0.18, 0.22),
            pressed: Color::from_rgb(0.14, 0.20, 0.30),

            border_subtle: Color::from_rgb(0.22, 0.25, 0.29),
            border_strong: Color::from_rgb(0.29, 0.33, 0.39),
            quote_bar: Color::from_rgb(0.42, 0.45, 0.50),

            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.65),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}
