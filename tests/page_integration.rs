// SPDX-License-Identifier: MPL-2.0
use putti_archive::app::config::{self, Config};
use putti_archive::content::{self, Anchor};
use putti_archive::page::{self, layout};
use putti_archive::ui::theming::ThemeMode;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn closed_and_open_pages_differ_only_in_nav() {
    let closed = page::render(false, 2025);
    let open = page::render(true, 2025);

    assert!(closed.header.nav.is_none());
    let nav = open.header.nav.as_ref().expect("menu open");
    let labels: Vec<_> = nav.links.iter().map(|link| link.label).collect();
    assert_eq!(labels, ["Photos", "Stories", "Family Tree", "Contact"]);

    assert_eq!(closed.hero, open.hero);
    assert_eq!(closed.gallery, open.gallery);
    assert_eq!(closed.stories, open.stories);
    assert_eq!(closed.family_tree, open.family_tree);
    assert_eq!(closed.contact, open.contact);
    assert_eq!(closed.footer, open.footer);
}

#[test]
fn every_nav_link_targets_a_section_of_the_page() {
    let doc = page::render(true, 2025);
    let anchors = doc.anchors();
    let nav = doc.header.nav.as_ref().expect("menu open");

    for link in &nav.links {
        assert!(anchors.contains(&link.anchor), "{:?}", link.anchor);
    }
}

#[test]
fn section_offsets_increase_down_the_page() {
    let offsets: Vec<f32> = Anchor::ALL
        .iter()
        .map(|anchor| layout::anchor_offset(*anchor))
        .collect();

    assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(offsets.iter().all(|offset| *offset < layout::body_height()));
}

#[test]
fn photo_sources_resolve_under_asset_root() {
    let doc = page::render(false, 2025);
    let root = Path::new("/srv/archive");

    assert_eq!(doc.gallery.photos.len(), 3);
    for photo in &doc.gallery.photos {
        assert_eq!(photo.caption, photo.alt);
        let resolved = content::resolve_asset(root, photo.source);
        assert!(resolved.starts_with(root), "{}", resolved.display());
    }
}

#[test]
fn footer_copyright_carries_render_year() {
    let doc = page::render(false, 1987);
    assert_eq!(doc.footer.copyright, "© 1987 Putti Family. All rights reserved.");
}

#[test]
fn family_tree_section_uses_full_tree() {
    let doc = page::render(false, 2025);
    assert_eq!(doc.family_tree.root.node_count(), 10);
    assert_eq!(doc.family_tree.root.depth(), 4);
}

#[test]
fn config_round_trips_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.theme_mode = ThemeMode::Dark;
    saved.assets.root = Some(PathBuf::from("/srv/archive"));
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, saved);
    assert_eq!(loaded.assets.root_or_default(), PathBuf::from("/srv/archive"));
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "general = [oops")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}
