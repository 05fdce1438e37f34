// SPDX-License-Identifier: MPL-2.0
//! `putti_archive` is a single-page family history archive built with the
//! Iced GUI framework.
//!
//! The page content is fixed at compile time in [`content`]. [`page`] turns it
//! into a plain render model, and [`ui`] maps that model onto widgets.

pub mod app;
pub mod content;
pub mod error;
pub mod page;
pub mod ui;
