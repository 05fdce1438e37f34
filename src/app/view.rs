// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header stays pinned above a scrollable body holding the page
//! sections in document order.

use super::update::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::page::Document;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections::{self, gallery};
use crate::ui::styles;
use iced::{
    widget::{scrollable, Column, Container, Id},
    Element, Length,
};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub document: &'a Document,
    pub asset_root: &'a Path,
}

/// Renders the whole page.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let doc = ctx.document;

    let header = navbar::view(NavbarViewContext {
        header: &doc.header,
    })
    .map(Message::Navbar);

    let body = Column::new()
        .width(Length::Fill)
        .push(sections::hero::view(&doc.hero))
        .push(gallery::view(gallery::ViewContext {
            gallery: &doc.gallery,
            asset_root: ctx.asset_root,
        }))
        .push(sections::stories::view(&doc.stories))
        .push(sections::family_tree::view(&doc.family_tree))
        .push(sections::contact::view(&doc.contact))
        .push(sections::footer::view(&doc.footer));

    let body = scrollable(body)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(Column::new().push(header).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
