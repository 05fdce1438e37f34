// SPDX-License-Identifier: MPL-2.0
//! Photo gallery: three cards side by side.
//!
//! Photos are loaded from disk through Iced's image pipeline. A missing file
//! simply renders an empty frame above its caption.

use super::heading;
use crate::content::resolve_asset;
use crate::page::{Gallery, PhotoCard};
use crate::ui::design_tokens::{section, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{image, Column, Container, Row, Text},
    ContentFit, Element, Length, Theme,
};
use std::path::Path;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub gallery: &'a Gallery,
    /// Directory site-root image references resolve against.
    pub asset_root: &'a Path,
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'_>) -> Element<'a, M> {
    let cards = ctx
        .gallery
        .photos
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, photo| {
            row.push(build_card(photo, ctx.asset_root))
        });

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading(ctx.gallery.heading))
        .push(cards);

    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([spacing::XXXL, spacing::MD]),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(section::PHOTOS))
    .into()
}

fn build_card<'a, M: 'a>(photo: &PhotoCard, asset_root: &Path) -> Element<'a, M> {
    let handle = image::Handle::from_path(resolve_asset(asset_root, photo.source));
    let picture = image(handle)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PHOTO_HEIGHT))
        .content_fit(ContentFit::Cover);

    let caption = Container::new(
        Text::new(photo.caption)
            .size(typography::CAPTION)
            .center()
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(ColorScheme::for_theme(theme).text_secondary),
            }),
    )
    .padding(spacing::MD)
    .center_x(Length::Fill);

    Container::new(Column::new().push(picture).push(caption))
        .width(Length::FillPortion(1))
        .clip(true)
        .style(styles::container::photo_card)
        .into()
}
