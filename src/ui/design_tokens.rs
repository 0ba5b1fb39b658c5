// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by the navbar, scan view, about screen and
toasts. Styles in [`crate::ui::styles`] read from here instead of hard-coding
values.

```
use cerebro_scan::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let veil = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::GRAY_900
};
let gap = spacing::MD;
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Severity and confidence-tier accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Veil drawn over the preview while a scan runs.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    /// Cards and toasts.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    // Status and example glyphs
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    pub const PICK_LIST_WIDTH: f32 = 220.0;
    pub const CONTENT_MAX_WIDTH: f32 = 880.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    // Scan view
    pub const DROP_ZONE_HEIGHT: f32 = 220.0;
    pub const PREVIEW_MAX_WIDTH: f32 = 448.0;
    pub const PREVIEW_HEIGHT: f32 = 252.0;
    pub const PREDICTION_BAR_HEIGHT: f32 = 8.0;
    pub const EXAMPLE_TILE_HEIGHT: f32 = 160.0;

    /// Team member initials badge on the about screen.
    pub const AVATAR: f32 = 96.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Screen headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Brand name and stage label.
    pub const TITLE_MD: f32 = 20.0;
    /// Card headers.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Badges and captions under the preview.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders and radii
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Drop zone outline and toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pill shape for badges.
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadows
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

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_MD);
    assert!(sizing::PREVIEW_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::PREVIEW_HEIGHT < sizing::DROP_ZONE_HEIGHT + sizing::EXAMPLE_TILE_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
