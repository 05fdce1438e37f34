// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing step, size and section height used by the archive page.

## Organization

- **Palette**: Base colors, including the family-tree tier colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Section**: Fixed heights of the scrolling page sections

## Examples

```
use putti_archive::ui::design_tokens::{palette, spacing};
use iced::Color;

let card_padding = spacing::MD; // 16px
let accent: Color = palette::BLUE_200;
```

Section heights feed the anchor offsets in `page::layout`; changing one moves
every anchor below it.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);

    // Brand colors (blue scale)
    pub const BLUE_50: Color = Color::from_rgb(0.937, 0.965, 1.0);
    pub const BLUE_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const BLUE_200: Color = Color::from_rgb(0.749, 0.859, 0.996);
    pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const BLUE_700: Color = Color::from_rgb(0.114, 0.306, 0.847);

    // Family tree tiers
    pub const GREEN_200: Color = Color::from_rgb(0.733, 0.969, 0.816);
    pub const YELLOW_200: Color = Color::from_rgb(0.996, 0.941, 0.541);
    pub const PINK_200: Color = Color::from_rgb(0.984, 0.812, 0.910);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;

    /// Height of a gallery photo.
    pub const PHOTO_HEIGHT: f32 = 256.0;

    /// Widest the main column grows before centering.
    pub const CONTENT_MAX_WIDTH: f32 = 1152.0;
    /// Narrower column used for prose sections.
    pub const PROSE_MAX_WIDTH: f32 = 896.0;
    /// Width of the hero tagline block.
    pub const TAGLINE_MAX_WIDTH: f32 = 672.0;
    /// Width of the contact blurb.
    pub const BLURB_MAX_WIDTH: f32 = 576.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes mirroring the page's heading hierarchy.

    /// Hero heading
    pub const DISPLAY: f32 = 36.0;

    /// Section headings (Family Photos, Family Stories, ...)
    pub const TITLE_LG: f32 = 30.0;

    /// Site title in the header
    pub const TITLE_MD: f32 = 24.0;

    /// Story titles
    pub const TITLE_SM: f32 = 20.0;

    /// Tagline, call-to-action label
    pub const BODY_LG: f32 = 18.0;

    /// Standard body text
    pub const BODY: f32 = 16.0;

    /// Photo captions
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADE: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.1);

    pub const NONE: Shadow = Shadow {
        color: SHADE,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 6.0,
    };
}

// ============================================================================
// Section Heights
// ============================================================================

pub mod section {
    //! Fixed heights of the sections inside the scrolling body.

    pub const HERO: f32 = 280.0;
    pub const PHOTOS: f32 = 480.0;
    pub const STORIES: f32 = 620.0;
    pub const FAMILY_TREE: f32 = 460.0;
    pub const CONTACT: f32 = 300.0;
    pub const FOOTER: f32 = 136.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XXXL > spacing::XXL);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Sections must leave room for their vertical padding
    assert!(section::PHOTOS > sizing::PHOTO_HEIGHT + 2.0 * spacing::XXXL);
    assert!(section::HERO > 2.0 * spacing::XXXL);
    assert!(section::FOOTER > spacing::XXXL);
};
