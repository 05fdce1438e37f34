// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! The page follows the Elm-style "state down, messages up" pattern: the
//! application renders a [`Document`](crate::page::Document) and these
//! modules turn it into widgets.
//!
//! - [`navbar`] - Sticky header with the menu toggle and navigation links
//! - [`sections`] - Hero, gallery, stories, family tree, contact and footer
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Inline SVG icons

pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod sections;
pub mod styles;
pub mod theming;
