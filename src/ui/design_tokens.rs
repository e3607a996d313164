// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for every screen of the viewer.

## Organization

- **Palette**: base colors (night-sky neutrals, nebula accent, star gold)
- **Opacity**: overlay levels
- **Spacing**: 8px grid
- **Sizing**: cards, tiles, hero image, toasts
- **Typography**: font size scale
- **Border** / **Radius** / **Shadow**

## Examples

```
use apod_explorer::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::SPACE_950
};
let padding = spacing::MD;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Night-sky neutrals (dark → light)
    pub const SPACE_950: Color = Color::from_rgb(0.04, 0.05, 0.09);
    pub const SPACE_900: Color = Color::from_rgb(0.07, 0.08, 0.14);
    pub const SPACE_800: Color = Color::from_rgb(0.11, 0.13, 0.2);
    pub const SPACE_700: Color = Color::from_rgb(0.18, 0.2, 0.29);
    pub const SPACE_400: Color = Color::from_rgb(0.48, 0.51, 0.6);
    pub const SPACE_200: Color = Color::from_rgb(0.82, 0.84, 0.9);
    pub const SPACE_100: Color = Color::from_rgb(0.93, 0.94, 0.97);

    // Nebula accent (violet-blue)
    pub const NEBULA_400: Color = Color::from_rgb(0.55, 0.56, 1.0);
    pub const NEBULA_500: Color = Color::from_rgb(0.42, 0.43, 0.93);
    pub const NEBULA_600: Color = Color::from_rgb(0.33, 0.33, 0.8);

    /// Filled favorite star.
    pub const STAR_GOLD: Color = Color::from_rgb(0.98, 0.78, 0.22);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Toasts and floating panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    pub const INPUT_WIDTH: f32 = 180.0;

    /// Gallery tile (recent / favorites).
    pub const TILE_WIDTH: f32 = 240.0;
    pub const TILE_IMAGE_HEIGHT: f32 = 150.0;

    /// Featured picture on the Today and Pick a Date tabs.
    pub const HERO_IMAGE_HEIGHT: f32 = 420.0;

    /// Readable line length for explanations.
    pub const CONTENT_MAX_WIDTH: f32 = 860.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const SPINNER: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Semantic font sizes:
    //! - Titles: page and card headings
    //! - Body: explanations, labels
    //! - Caption: dates, copyright, badges

    /// Page heading (picture title on the detail view)
    pub const TITLE_LG: f32 = 28.0;

    /// App name in the navbar, card titles on Today
    pub const TITLE_MD: f32 = 20.0;

    /// Gallery tile titles
    pub const TITLE_SM: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::TILE_IMAGE_HEIGHT < sizing::HERO_IMAGE_HEIGHT);
    assert!(sizing::TILE_WIDTH < sizing::CONTENT_MAX_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn neutrals_get_lighter_up_the_scale() {
        assert!(palette::SPACE_950.r < palette::SPACE_800.r);
        assert!(palette::SPACE_400.r < palette::SPACE_100.r);
    }
}
