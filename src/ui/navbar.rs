// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for the page header.
//!
//! The header shows the site title and a menu button. The button toggles a
//! dropdown panel listing one link per anchored section.

use crate::content::Anchor;
use crate::page::Header;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub header: &'a Header,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    JumpTo(Anchor),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    JumpTo(Anchor),
}

/// Process a navbar message and return the corresponding event.
///
/// Following a link leaves the menu as it is.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::JumpTo(anchor) => Event::JumpTo(anchor),
    }
}

/// Render the header, with the dropdown when the document carries one.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(ctx.header));

    if let Some(nav) = &ctx.header.nav {
        let links = nav
            .links
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, link| {
                column.push(build_link(link.label, link.anchor))
            });

        content = content.push(
            Container::new(links)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD])
                .style(styles::container::nav_panel),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}

/// Title on the left, menu toggle on the right.
fn build_top_bar<'a>(header: &Header) -> Element<'a, Message> {
    let title = Text::new(header.title)
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let menu_button = button(icons::sized(icons::menu(), sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::menu_toggle);

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([spacing::MD, spacing::MD])
        .center_x(Length::Fill)
        .into()
}

fn build_link<'a>(label: &'static str, anchor: Anchor) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::JumpTo(anchor))
        .padding(0)
        .style(styles::button::nav_link)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page;

    #[test]
    fn navbar_view_renders() {
        let doc = page::render(false, 2024);
        let _element = view(ViewContext {
            header: &doc.header,
        });
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let doc = page::render(true, 2024);
        let _element = view(ViewContext {
            header: &doc.header,
        });
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn menu_state_tracks_toggle_parity() {
        let mut menu_open = false;
        for count in 1..=9 {
            update(Message::ToggleMenu, &mut menu_open);
            assert_eq!(menu_open, count % 2 == 1);
        }
    }

    #[test]
    fn jump_keeps_menu_open_and_emits_anchor() {
        for anchor in Anchor::ALL {
            let mut menu_open = true;
            let event = update(Message::JumpTo(anchor), &mut menu_open);
            assert!(menu_open);
            assert_eq!(event, Event::JumpTo(anchor));
        }
    }

    #[test]
    fn jump_does_not_open_closed_menu() {
        let mut menu_open = false;
        let _ = update(Message::JumpTo(Anchor::Contact), &mut menu_open);
        assert!(!menu_open);
    }
}
