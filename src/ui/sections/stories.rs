// SPDX-License-Identifier: MPL-2.0
//! Story list: one card per story, stacked.

use super::{bold, heading};
use crate::page::{StoryCard, StoryList};
use crate::ui::design_tokens::{section, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Text},
    Element, Length,
};

pub fn view<'a, M: 'a>(stories: &StoryList) -> Element<'a, M> {
    let cards = stories
        .entries
        .iter()
        .fold(Column::new().spacing(spacing::LG), |column, story| {
            column.push(build_card(story))
        });

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading(stories.heading))
        .push(cards);

    Container::new(
        Container::new(content)
            .max_width(sizing::PROSE_MAX_WIDTH)
            .padding([spacing::XXXL, spacing::MD]),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(section::STORIES))
    .style(styles::container::band_surface)
    .into()
}

fn build_card<'a, M: 'a>(story: &StoryCard) -> Element<'a, M> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(story.title).size(typography::TITLE_SM).font(bold()))
        .push(Text::new(story.body).size(typography::BODY));

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::story_card)
        .into()
}
