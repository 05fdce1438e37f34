// SPDX-License-Identifier: MPL-2.0
//! Page renderer producing the displayed document.
//!
//! [`render`] is a pure function of the static content, the navigation
//! state and the copyright year. The returned [`Document`] is an inspectable
//! description of everything on screen; the UI layer only maps it onto Iced
//! widgets. Reading the clock is kept out of `render` in [`current_year`] so
//! that identical inputs always compare equal.

pub mod layout;

use crate::content::{self, Anchor, TreeNode};
use chrono::Datelike;

/// Sticky page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    /// Present only while the menu is open.
    pub nav: Option<NavPanel>,
}

/// Dropdown navigation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPanel {
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub heading: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoCard {
    pub source: &'static str,
    pub caption: &'static str,
    /// Alternative text; the caption doubles as the description.
    pub alt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    pub anchor: Anchor,
    pub heading: &'static str,
    pub photos: Vec<PhotoCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryCard {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryList {
    pub anchor: Anchor,
    pub heading: &'static str,
    pub entries: Vec<StoryCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyTreeSection {
    pub anchor: Anchor,
    pub heading: &'static str,
    pub root: &'static TreeNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSection {
    pub anchor: Anchor,
    pub heading: &'static str,
    pub blurb: &'static str,
    /// Label of the call-to-action button. The button is not wired to anything.
    pub action_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub copyright: String,
}

/// Complete description of the displayed page, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub header: Header,
    pub hero: Hero,
    pub gallery: Gallery,
    pub stories: StoryList,
    pub family_tree: FamilyTreeSection,
    pub contact: ContactSection,
    pub footer: Footer,
}

impl Document {
    /// Anchors of the addressable sections in display order.
    pub fn anchors(&self) -> [Anchor; 4] {
        [
            self.gallery.anchor,
            self.stories.anchor,
            self.family_tree.anchor,
            self.contact.anchor,
        ]
    }

    /// Whether the navigation panel is part of the document.
    pub fn has_nav(&self) -> bool {
        self.header.nav.is_some()
    }
}

/// Builds the document for the given menu state and copyright year.
pub fn render(menu_open: bool, year: i32) -> Document {
    Document {
        header: Header {
            title: content::SITE_TITLE,
            nav: menu_open.then(nav_panel),
        },
        hero: Hero {
            heading: content::HERO_HEADING,
            tagline: content::HERO_TAGLINE,
        },
        gallery: Gallery {
            anchor: Anchor::Photos,
            heading: content::PHOTOS_HEADING,
            photos: content::photos()
                .iter()
                .map(|photo| PhotoCard {
                    source: photo.source,
                    caption: photo.caption,
                    alt: photo.caption,
                })
                .collect(),
        },
        stories: StoryList {
            anchor: Anchor::Stories,
            heading: content::STORIES_HEADING,
            entries: content::stories()
                .iter()
                .map(|story| StoryCard {
                    title: story.title,
                    body: story.content,
                })
                .collect(),
        },
        family_tree: FamilyTreeSection {
            anchor: Anchor::FamilyTree,
            heading: content::FAMILY_TREE_HEADING,
            root: content::family_tree(),
        },
        contact: ContactSection {
            anchor: Anchor::Contact,
            heading: content::CONTACT_HEADING,
            blurb: content::CONTACT_BLURB,
            action_label: content::CONTACT_ACTION,
        },
        footer: Footer {
            copyright: copyright_line(year),
        },
    }
}

fn nav_panel() -> NavPanel {
    NavPanel {
        links: Anchor::ALL
            .iter()
            .map(|&anchor| NavLink {
                label: anchor.label(),
                anchor,
            })
            .collect(),
    }
}

/// Footer copyright text for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", content::COPYRIGHT_HOLDER)
}

/// Calendar year from the local system clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2024;

    #[test]
    fn closed_menu_has_no_nav_panel() {
        let doc = render(false, YEAR);
        assert!(doc.header.nav.is_none());
        assert!(!doc.has_nav());
    }

    #[test]
    fn open_menu_lists_four_links_in_order() {
        let doc = render(true, YEAR);
        let nav = doc.header.nav.expect("nav panel should be present");
        let labels: Vec<_> = nav.links.iter().map(|link| link.label).collect();
        assert_eq!(labels, ["Photos", "Stories", "Family Tree", "Contact"]);
        let anchors: Vec<_> = nav.links.iter().map(|link| link.anchor).collect();
        assert_eq!(anchors, Anchor::ALL);
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render(false, YEAR), render(false, YEAR));
        assert_eq!(render(true, YEAR), render(true, YEAR));
        assert_ne!(render(false, YEAR), render(true, YEAR));
    }

    #[test]
    fn only_the_header_depends_on_menu_state() {
        let closed = render(false, YEAR);
        let open = render(true, YEAR);
        assert_eq!(closed.hero, open.hero);
        assert_eq!(closed.gallery, open.gallery);
        assert_eq!(closed.stories, open.stories);
        assert_eq!(closed.family_tree, open.family_tree);
        assert_eq!(closed.contact, open.contact);
        assert_eq!(closed.footer, open.footer);
    }

    #[test]
    fn gallery_has_literal_captions_in_order() {
        let doc = render(false, YEAR);
        let captions: Vec<_> = doc.gallery.photos.iter().map(|p| p.caption).collect();
        assert_eq!(
            captions,
            [
                "The Putti Family, 1920s",
                "Family Gathering, 1950s",
                "Generations Together",
            ]
        );
        let sources: Vec<_> = doc.gallery.photos.iter().map(|p| p.source).collect();
        assert_eq!(
            sources,
            [
                "/photos/family1.jpg",
                "/photos/family2.jpg",
                "/photos/family3.jpg",
            ]
        );
        assert!(doc.gallery.photos.iter().all(|p| p.alt == p.caption));
    }

    #[test]
    fn stories_pair_titles_with_bodies() {
        let doc = render(false, YEAR);
        let titles: Vec<_> = doc.stories.entries.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            ["Our Origins", "Family Traditions", "Modern Generations"]
        );
        let bodies: Vec<_> = doc.stories.entries.iter().map(|s| s.body).collect();
        assert_eq!(
            bodies,
            [
                "The Putti family traces its roots back to the late 1800s. Originally from Italy, \
the family migrated across Europe before settling in various parts of the world.",
                "Throughout generations, the Putti family has preserved traditions of music, food, \
and storytelling that continue to unite us today.",
                "The younger generations of the family continue to honor their heritage while \
exploring new opportunities around the globe.",
            ]
        );
    }

    #[test]
    fn footer_uses_given_year() {
        let doc = render(false, 1999);
        assert_eq!(doc.footer.copyright, "© 1999 Putti Family. All rights reserved.");
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn sections_carry_anchors_in_page_order() {
        let doc = render(false, YEAR);
        assert_eq!(doc.anchors(), Anchor::ALL);
    }

    #[test]
    fn contact_and_hero_copy() {
        let doc = render(false, YEAR);
        assert_eq!(doc.hero.heading, "Welcome to the Putti Family Archive");
        assert_eq!(doc.contact.action_label, "Send a Message");
        assert!(doc.contact.blurb.starts_with("Do you have family photos"));
    }
}
