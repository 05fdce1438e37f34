// SPDX-License-Identifier: MPL-2.0
//! Vertical layout of the scrolling page body.
//!
//! Every section below the header is drawn at a fixed height, so the offset
//! of an anchored section is the sum of the heights above it.

use crate::content::Anchor;
use crate::ui::design_tokens::section;

/// Sections of the scrolling body, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Hero,
    Photos,
    Stories,
    FamilyTree,
    Contact,
    Footer,
}

impl Block {
    pub const ALL: [Block; 6] = [
        Block::Hero,
        Block::Photos,
        Block::Stories,
        Block::FamilyTree,
        Block::Contact,
        Block::Footer,
    ];

    pub fn height(self) -> f32 {
        match self {
            Block::Hero => section::HERO,
            Block::Photos => section::PHOTOS,
            Block::Stories => section::STORIES,
            Block::FamilyTree => section::FAMILY_TREE,
            Block::Contact => section::CONTACT,
            Block::Footer => section::FOOTER,
        }
    }
}

impl From<Anchor> for Block {
    fn from(anchor: Anchor) -> Self {
        match anchor {
            Anchor::Photos => Block::Photos,
            Anchor::Stories => Block::Stories,
            Anchor::FamilyTree => Block::FamilyTree,
            Anchor::Contact => Block::Contact,
        }
    }
}

/// Offset in pixels from the top of the scrolling body to `anchor`.
pub fn anchor_offset(anchor: Anchor) -> f32 {
    let target = Block::from(anchor);
    Block::ALL
        .iter()
        .take_while(|&&block| block != target)
        .map(|block| block.height())
        .sum()
}

/// Total height of the scrolling body.
pub fn body_height() -> f32 {
    Block::ALL.iter().map(|block| block.height()).sum()
}
