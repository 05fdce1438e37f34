// SPDX-License-Identifier: MPL-2.0
//! Organizational chart of the family.
//!
//! Each node is drawn as a colored label above the row of its children's
//! subtrees, recursively.

use super::heading;
use crate::content::{Generation, TreeNode};
use crate::page::FamilyTreeSection;
use crate::ui::design_tokens::{section, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Element, Length,
};

pub fn view<'a, M: 'a>(tree: &FamilyTreeSection) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading(tree.heading))
        .push(subtree(tree.root));

    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([spacing::XXXL, spacing::MD]),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(section::FAMILY_TREE))
    .style(styles::container::band_muted)
    .into()
}

fn subtree<'a, M: 'a>(node: &'static TreeNode) -> Element<'a, M> {
    let label = Container::new(Text::new(node.label).size(label_size(node.generation)))
        .padding(label_padding(node.generation))
        .style(styles::container::tree_node(node.generation));

    if node.children.is_empty() {
        return label.into();
    }

    let children = node.children.iter().fold(
        Row::new().spacing(spacing::MD).align_y(Vertical::Top),
        |row, child| row.push(subtree(child)),
    );

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(label)
        .push(children)
        .into()
}

fn label_padding(generation: Generation) -> f32 {
    match generation {
        Generation::GreatGrandparents => spacing::MD,
        Generation::Grandparents => spacing::SM,
        Generation::Parents | Generation::Children => spacing::XS,
    }
}

fn label_size(generation: Generation) -> f32 {
    match generation {
        Generation::GreatGrandparents => typography::BODY_LG,
        Generation::Grandparents | Generation::Parents => typography::BODY,
        Generation::Children => typography::CAPTION,
    }
}
