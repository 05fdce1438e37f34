// SPDX-License-Identifier: MPL-2.0
//! Container styles for the page sections.

use crate::content::Generation;
use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Gradient, Radians, Theme};

/// Whole-window background behind every section.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.page_background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Sticky header bar.
pub fn header(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: Some(colors.text_primary),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Dropdown panel holding the navigation links.
pub fn nav_panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.nav_panel)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Left-to-right blue gradient behind the hero text.
pub fn hero(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    let gradient = Linear::new(Radians(std::f32::consts::FRAC_PI_2))
        .add_stop(0.0, colors.hero_start)
        .add_stop(1.0, colors.hero_end);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Full-width band on the plain surface color (stories).
pub fn band_surface(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        ..Default::default()
    }
}

/// Full-width band on the muted surface color (family tree).
pub fn band_muted(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_muted)),
        ..Default::default()
    }
}

/// Light blue band behind the contact call-to-action.
pub fn band_contact(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.contact_band)),
        ..Default::default()
    }
}

pub fn footer(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.footer_background)),
        text_color: Some(colors.footer_text),
        ..Default::default()
    }
}

/// Rounded card holding a photo and its caption.
pub fn photo_card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Rounded card holding a story.
pub fn story_card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.page_background)),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Label bubble of a family-tree node, colored by generation.
pub fn tree_node(generation: Generation) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (color, corner, node_shadow) = match generation {
            Generation::GreatGrandparents => (palette::BLUE_200, radius::XL, shadow::MD),
            Generation::Grandparents => (palette::GREEN_200, radius::LG, shadow::NONE),
            Generation::Parents => (palette::YELLOW_200, radius::MD, shadow::NONE),
            Generation::Children => (palette::PINK_200, radius::MD, shadow::NONE),
        };

        container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(palette::GRAY_900),
            border: Border {
                radius: corner.into(),
                ..Default::default()
            },
            shadow: node_shadow,
            ..Default::default()
        }
    }
}
