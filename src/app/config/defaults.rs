// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::ui::theming::ThemeMode;

// ==========================================================================
// General Defaults
// ==========================================================================

/// Theme used when the config file does not name one. The page is designed
/// around its light palette.
pub const DEFAULT_THEME_MODE: ThemeMode = ThemeMode::Light;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Directory that site-root image references (`/photos/...`) resolve
/// against, relative to the working directory.
pub const DEFAULT_ASSET_ROOT: &str = "public";
