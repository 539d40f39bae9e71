//! Light/dark theme flag.

use crate::config::theme::{DARK_BODY_BACKGROUND, LIGHT_BODY_BACKGROUND};

/// Site-wide color mode. Lives in memory only; a reload starts dark again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Background color applied to `<body>` so overscroll matches the page.
    pub fn body_background(self) -> &'static str {
        match self {
            Self::Light => LIGHT_BODY_BACKGROUND,
            Self::Dark => DARK_BODY_BACKGROUND,
        }
    }

    /// Root class name used by the stylesheet to select theme tokens.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}
