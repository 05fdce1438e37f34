// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::Message;
use crate::content::Anchor;
use crate::page::layout;
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Identifier of the scrollable holding the page body.
pub const PAGE_SCROLLABLE_ID: &str = "page-body-scrollable";

/// Mutable slice of application state the handlers may touch.
pub struct UpdateContext<'a> {
    pub menu_open: &'a mut bool,
}

/// Handles messages coming from the header.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => {
            log::debug!("menu {}", if *ctx.menu_open { "opened" } else { "closed" });
            Task::none()
        }
        NavbarEvent::JumpTo(anchor) => jump_to(anchor),
    }
}

/// Scrolls the page body so `anchor` sits at the top of the viewport.
fn jump_to(anchor: Anchor) -> Task<Message> {
    let y = layout::anchor_offset(anchor);
    log::debug!("jumping to {} at {y}px", anchor.id());
    operation::scroll_to(Id::new(PAGE_SCROLLABLE_ID), AbsoluteOffset { x: 0.0, y })
}
