// SPDX-License-Identifier: MPL-2.0
//! Widgets for the parts of the page body.
//!
//! Each submodule maps one part of the [`Document`](crate::page::Document)
//! onto Iced widgets. None of them produce messages of their own, so their
//! views are generic over the parent's message type.

pub mod contact;
pub mod family_tree;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod stories;

use crate::ui::design_tokens::typography;
use iced::{font::Weight, widget::Text, Font};

/// Bold font used by headings.
pub(crate) fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

/// Centered section heading ("Family Photos", "Contact", ...).
pub(crate) fn heading<'a>(label: &'static str) -> Text<'a> {
    Text::new(label)
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Semibold,
            ..Font::default()
        })
        .center()
}
