// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navbar(navbar::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PUTTI_ARCHIVE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional asset directory override; wins over `[assets] root`.
    pub asset_root: Option<String>,
    /// Optional theme override; wins over `[general] theme_mode`.
    pub theme: Option<ThemeMode>,
}
