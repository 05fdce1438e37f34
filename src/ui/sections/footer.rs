// SPDX-License-Identifier: MPL-2.0
use crate::page::Footer;
use crate::ui::design_tokens::{section, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{Column, Container, Space, Text},
    Element, Length,
};

pub fn view<'a, M: 'a>(footer: &Footer) -> Element<'a, M> {
    let band = Container::new(Text::new(footer.copyright.clone()).size(typography::BODY))
        .center_x(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .style(styles::container::footer);

    Column::new()
        .height(Length::Fixed(section::FOOTER))
        .push(Space::new().height(Length::Fixed(spacing::XXXL)))
        .push(band)
        .into()
}
