// SPDX-License-Identifier: MPL-2.0
//! Inline SVG icons.
//!
//! Icons are embedded as SVG source and their handles cached with `OnceLock`
//! so every render reuses the parsed document.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

const MENU_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/></svg>"#;

/// Three-bar "hamburger" glyph for the menu toggle.
pub fn menu<'a>() -> Svg<'a, Theme> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    let handle = HANDLE.get_or_init(|| Handle::from_memory(MENU_SVG.as_bytes()));
    Svg::new(handle.clone()).style(tinted)
}

/// Resizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'_, Theme>, size: f32) -> Svg<'_, Theme> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Draws the glyph in the theme's text color.
fn tinted(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}
