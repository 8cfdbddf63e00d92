// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (Tailwind scale)
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use pixel_pickr::ui::design_tokens::{palette, sizing, spacing};

let card_text = palette::GRAY_800;
let swatch = sizing::SWATCH; // 80px
let padding = spacing::LG; // 24px
# let _ = (card_text, swatch, padding);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb8(0x9C, 0xA3, 0xAF);
    pub const GRAY_600: Color = Color::from_rgb8(0x4B, 0x55, 0x63);
    pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const GRAY_800: Color = Color::from_rgb8(0x1F, 0x29, 0x37);
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);

    // Backdrop
    pub const SLATE_600: Color = Color::from_rgb8(0x47, 0x55, 0x69);
    pub const NEUTRAL_900: Color = Color::from_rgb8(0x17, 0x17, 0x17);
    pub const SLATE_950: Color = Color::from_rgb8(0x02, 0x06, 0x17);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb8(0x22, 0xC5, 0x5E);
    pub const WARNING_500: Color = Color::from_rgb8(0xF5, 0x9E, 0x0B);
    pub const ERROR_500: Color = Color::from_rgb8(0xEF, 0x44, 0x44);
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Copy icon.
    pub const ICON: f32 = 20.0;

    /// Color swatch edge.
    pub const SWATCH: f32 = 80.0;

    /// Reserved height above the color line for the confirmation badge.
    pub const BADGE_SLOT: f32 = 28.0;

    // Fixed window size
    pub const WINDOW_WIDTH: f32 = 600.0;
    pub const WINDOW_HEIGHT: f32 = 300.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name
    pub const TITLE: f32 = 24.0;

    /// Detected color line
    pub const BODY: f32 = 16.0;

    /// Badges, warnings
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 6.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 15.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // The card has to fit the swatch, the color line and the badge.
    assert!(sizing::SWATCH + sizing::BADGE_SLOT + 2.0 * spacing::LG < sizing::WINDOW_HEIGHT);
};
