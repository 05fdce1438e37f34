// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the archive page.
//!
//! The `App` struct only owns what changes at runtime: whether the
//! navigation menu is open, the active theme mode, and where photos are
//! loaded from. Everything visible is derived from that state through
//! [`page::render`] on each frame.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::PAGE_SCROLLABLE_ID;

use crate::content::SITE_TITLE;
use crate::page::{self, Document};
use crate::ui::theming::ThemeMode;
use config::defaults::DEFAULT_ASSET_ROOT;
use iced::{window, Element, Task, Theme};
use std::path::{Path, PathBuf};

/// Root Iced application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Whether the navigation dropdown is shown.
    menu_open: bool,
    theme_mode: ThemeMode,
    /// Directory that site-root image references resolve against.
    asset_root: PathBuf,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 takes an `Fn` boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            menu_open: false,
            theme_mode: ThemeMode::default(),
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
        }
    }
}

impl App {
    /// Initializes application state from the persisted config and the
    /// launcher's `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let app = Self::from_config(&config, &flags);
        log::info!(
            "starting with theme {:?}, assets from {}",
            app.theme_mode,
            app.asset_root.display()
        );

        (app, Task::none())
    }

    /// Command-line flags win over the config file.
    fn from_config(config: &config::Config, flags: &Flags) -> Self {
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let asset_root = flags
            .asset_root
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| config.assets.root_or_default());

        Self {
            menu_open: false,
            theme_mode,
            asset_root,
        }
    }

    fn title(&self) -> String {
        SITE_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            menu_open: &mut self.menu_open,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
        }
    }

    /// The page as it should look right now.
    pub fn document(&self) -> Document {
        page::render(self.menu_open, page::current_year())
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    fn view(&self) -> Element<'_, Message> {
        let document = self.document();
        view::view(view::ViewContext {
            document: &document,
            asset_root: &self.asset_root,
        })
    }
}
