// SPDX-License-Identifier: MPL-2.0
//! Contact call-to-action.

use super::heading;
use crate::page::ContactSection;
use crate::ui::design_tokens::{section, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Text},
    Element, Length,
};

pub fn view<'a, M: Clone + 'a>(contact: &ContactSection) -> Element<'a, M> {
    let blurb = Container::new(Text::new(contact.blurb).size(typography::BODY).center())
        .max_width(sizing::BLURB_MAX_WIDTH);

    // No messaging service exists yet: the button has no `on_press`.
    let action = button(Text::new(contact.action_label).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::call_to_action);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(heading(contact.heading))
        .push(blurb)
        .push(action);

    Container::new(content)
        .center_x(Length::Fill)
        .height(Length::Fixed(section::CONTACT))
        .padding([spacing::XXXL, spacing::MD])
        .style(styles::container::band_contact)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page;

    #[test]
    fn contact_view_renders() {
        let doc = page::render(false, 2024);
        let _element: Element<'_, ()> = view(&doc.contact);
    }
}
