// SPDX-License-Identifier: MPL-2.0
//! Hero banner under the header.

use super::bold;
use crate::page::Hero;
use crate::ui::design_tokens::{section, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Text},
    Element, Length,
};

pub fn view<'a, M: 'a>(hero: &Hero) -> Element<'a, M> {
    let heading = Text::new(hero.heading)
        .size(typography::DISPLAY)
        .font(bold())
        .center();

    let tagline = Container::new(Text::new(hero.tagline).size(typography::BODY_LG).center())
        .max_width(sizing::TAGLINE_MAX_WIDTH);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(tagline);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(section::HERO))
        .padding([spacing::XXXL, spacing::MD])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::hero)
        .into()
}
