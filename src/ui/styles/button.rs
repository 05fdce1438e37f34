// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Ghost button holding the menu icon: no chrome until hovered.
pub fn menu_toggle(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(colors.surface_muted))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only navigation link; turns blue on hover.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.link_hover,
        button::Status::Active | button::Status::Disabled => colors.text_primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Call-to-action button of the contact section.
///
/// The button carries no handler, so Iced reports it as `Disabled`; it is
/// drawn like an active button in every status.
pub fn call_to_action(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BLUE_700,
        button::Status::Active | button::Status::Disabled => palette::GRAY_900,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}
