// SPDX-License-Identifier: MPL-2.0
//! Static content of the archive page.
//!
//! Photos, stories and the family tree are literal data compiled into the
//! binary. Nothing here is mutated at runtime; every accessor hands out
//! `'static` borrows.

use std::path::{Path, PathBuf};

/// Title shown in the header and the window title bar.
pub const SITE_TITLE: &str = "Putti Family History";

pub const HERO_HEADING: &str = "Welcome to the Putti Family Archive";
pub const HERO_TAGLINE: &str =
    "Preserving our heritage, sharing our stories, and connecting generations.";

pub const PHOTOS_HEADING: &str = "Family Photos";
pub const STORIES_HEADING: &str = "Family Stories";
pub const FAMILY_TREE_HEADING: &str = "Family Tree";
pub const CONTACT_HEADING: &str = "Contact";

pub const CONTACT_BLURB: &str = "Do you have family photos, stories, or documents to share? \
Get in touch with us to help preserve our heritage.";
pub const CONTACT_ACTION: &str = "Send a Message";

/// Owner named in the footer copyright line.
pub const COPYRIGHT_HOLDER: &str = "Putti Family";

/// A gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    /// Site-root image reference, e.g. `/photos/family1.jpg`.
    pub source: &'static str,
    pub caption: &'static str,
}

impl Photo {
    /// Resolves the site-root reference against a local asset directory.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        resolve_asset(root, self.source)
    }
}

/// Maps a site-root reference such as `/photos/a.jpg` to a file under `root`.
pub fn resolve_asset(root: &Path, source: &str) -> PathBuf {
    root.join(source.trim_start_matches('/'))
}

/// A story entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub title: &'static str,
    pub content: &'static str,
}

const PHOTOS: [Photo; 3] = [
    Photo {
        source: "/photos/family1.jpg",
        caption: "The Putti Family, 1920s",
    },
    Photo {
        source: "/photos/family2.jpg",
        caption: "Family Gathering, 1950s",
    },
    Photo {
        source: "/photos/family3.jpg",
        caption: "Generations Together",
    },
];

const STORIES: [Story; 3] = [
    Story {
        title: "Our Origins",
        content: "The Putti family traces its roots back to the late 1800s. Originally from \
Italy, the family migrated across Europe before settling in various parts of the world.",
    },
    Story {
        title: "Family Traditions",
        content: "Throughout generations, the Putti family has preserved traditions of music, \
food, and storytelling that continue to unite us today.",
    },
    Story {
        title: "Modern Generations",
        content: "The younger generations of the family continue to honor their heritage while \
exploring new opportunities around the globe.",
    },
];

/// Gallery photos in display order.
pub fn photos() -> &'static [Photo] {
    &PHOTOS
}

/// Stories in display order.
pub fn stories() -> &'static [Story] {
    &STORIES
}

// =============================================================================
// Anchors
// =============================================================================

/// Addressable sections of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Photos,
    Stories,
    FamilyTree,
    Contact,
}

impl Anchor {
    /// All anchors in page order.
    pub const ALL: [Anchor; 4] = [
        Anchor::Photos,
        Anchor::Stories,
        Anchor::FamilyTree,
        Anchor::Contact,
    ];

    /// Fragment identifier of the section.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Photos => "#photos",
            Anchor::Stories => "#stories",
            Anchor::FamilyTree => "#family-tree",
            Anchor::Contact => "#contact",
        }
    }

    /// Label of the navigation link pointing at the section.
    pub fn label(self) -> &'static str {
        match self {
            Anchor::Photos => "Photos",
            Anchor::Stories => "Stories",
            Anchor::FamilyTree => "Family Tree",
            Anchor::Contact => "Contact",
        }
    }
}

// =============================================================================
// Family Tree
// =============================================================================

/// Generation a tree node belongs to, from the root down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Generation {
    GreatGrandparents,
    Grandparents,
    Parents,
    Children,
}

impl Generation {
    /// Zero-based depth in the tree.
    pub fn depth(self) -> usize {
        self as usize
    }
}

/// A labeled node of the static family tree.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub label: &'static str,
    pub generation: Generation,
    pub children: &'static [TreeNode],
}

impl TreeNode {
    const fn leaf(label: &'static str) -> Self {
        Self {
            label,
            generation: Generation::Children,
            children: &[],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of generations in this subtree, including `self`.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    /// Labels in pre-order.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut out = vec![self.label];
        for child in self.children {
            out.extend(child.labels());
        }
        out
    }
}

static FAMILY_TREE: TreeNode = TreeNode {
    label: "Great Grandparents",
    generation: Generation::GreatGrandparents,
    children: &[
        TreeNode {
            label: "Grandparent A",
            generation: Generation::Grandparents,
            children: &[
                TreeNode {
                    label: "Parent A1",
                    generation: Generation::Parents,
                    children: &[TreeNode::leaf("Child A1a"), TreeNode::leaf("Child A1b")],
                },
                TreeNode {
                    label: "Parent A2",
                    generation: Generation::Parents,
                    children: &[TreeNode::leaf("Child A2a")],
                },
            ],
        },
        TreeNode {
            label: "Grandparent B",
            generation: Generation::Grandparents,
            children: &[TreeNode {
                label: "Parent B1",
                generation: Generation::Parents,
                children: &[TreeNode::leaf("Child B1a")],
            }],
        },
    ],
};

/// Root of the family tree diagram.
pub fn family_tree() -> &'static TreeNode {
    &FAMILY_TREE
}
