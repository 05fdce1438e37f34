// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colors of the page surfaces for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub page_background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub nav_panel: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub link_hover: Color,

    // Accent bands
    pub hero_start: Color,
    pub hero_end: Color,
    pub contact_band: Color,
    pub footer_background: Color,
    pub footer_text: Color,
}

impl ColorScheme {
    /// Light theme, the page's native look.
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::GRAY_50,
            surface: palette::WHITE,
            surface_muted: palette::GRAY_100,
            nav_panel: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,
            link_hover: palette::BLUE_600,

            hero_start: palette::BLUE_100,
            hero_end: palette::BLUE_200,
            contact_band: palette::BLUE_50,
            footer_background: palette::GRAY_800,
            footer_text: palette::GRAY_200,
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::GRAY_900,
            surface: palette::GRAY_800,
            surface_muted: Color::from_rgb(0.09, 0.12, 0.18),
            nav_panel: Color::from_rgb(0.16, 0.2, 0.26),

            text_primary: palette::GRAY_50,
            text_secondary: palette::GRAY_200,
            link_hover: palette::BLUE_200,

            hero_start: Color::from_rgb(0.12, 0.2, 0.36),
            hero_end: Color::from_rgb(0.16, 0.27, 0.48),
            contact_band: Color::from_rgb(0.1, 0.15, 0.26),
            footer_background: palette::BLACK,
            footer_text: palette::GRAY_200,
        }
    }

    /// Picks the scheme matching an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Error returned when parsing an unknown theme mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeModeError(String);

impl fmt::Display for ParseThemeModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid theme mode '{}' (expected light, dark or system)",
            self.0
        )
    }
}

impl std::error::Error for ParseThemeModeError {}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}
