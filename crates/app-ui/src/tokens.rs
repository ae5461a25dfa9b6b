//! Design tokens for Solar Shell
//!
//! This module provides the spacing, border radius, border width, sizing and
//! shadow primitives shared by both themes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// 4px - Extra small
    pub const XS: f32 = 4.0;
    /// 8px - Small
    pub const SM: f32 = 8.0;
    /// 16px - Medium
    pub const MD: f32 = 16.0;
    /// 24px - Large
    pub const LG: f32 = 24.0;
    /// 32px - Extra large
    pub const XL: f32 = 32.0;
    /// 48px - 2x large
    pub const XXL: f32 = 48.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            _ => None,
        }
    }
}

/// Spacing scale carried by a theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    /// Extra small
    pub xs: f32,
    /// Small
    pub sm: f32,
    /// Medium
    pub md: f32,
    /// Large
    pub lg: f32,
    /// Extra large
    pub xl: f32,
    /// 2x large
    pub xxl: f32,
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            xs: spacing::XS,
            sm: spacing::SM,
            md: spacing::MD,
            lg: spacing::LG,
            xl: spacing::XL,
            xxl: spacing::XXL,
        }
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// Small radius (4px)
    pub const SMALL: f32 = 4.0;
    /// Medium radius (8px)
    pub const MEDIUM: f32 = 8.0;
    /// Large radius (16px)
    pub const LARGE: f32 = 16.0;
    /// Pill/round radius (999px)
    pub const ROUND: f32 = 999.0;
}

/// Border radius scale carried by a theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    /// Small
    pub small: f32,
    /// Medium
    pub medium: f32,
    /// Large
    pub large: f32,
    /// Round
    pub round: f32,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            small: radius::SMALL,
            medium: radius::MEDIUM,
            large: radius::LARGE,
            round: radius::ROUND,
        }
    }
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width tokens
pub mod border {
    /// No border (0px)
    pub const NONE: f32 = 0.0;
    /// Thin border (1px)
    pub const THIN: f32 = 1.0;
    /// Thick border (2px), used by buttons for glare readability
    pub const THICK: f32 = 2.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Button sizes
    pub mod button {
        /// Minimum touch target height (56px)
        pub const MIN_HEIGHT: f32 = 56.0;
        /// Label font weight
        pub const LABEL_WEIGHT: u16 = 600;
    }

    /// Input field sizes
    pub mod input {
        /// Input height (52px)
        pub const HEIGHT: f32 = 52.0;
    }

    /// Switch sizes
    pub mod switch {
        /// Track width (52px)
        pub const TRACK_WIDTH: f32 = 52.0;
        /// Track height (32px)
        pub const TRACK_HEIGHT: f32 = 32.0;
    }
}

/// Opacity tokens
pub mod opacity {
    /// Fully opaque
    pub const FULL: f32 = 1.0;
    /// Disabled or busy components
    pub const DISABLED: f32 = 0.6;
    /// Opacity while a touchable is pressed
    pub const PRESSED: f32 = 0.8;
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Drop shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: String,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Blur radius
    pub radius: f32,
    /// Android-style elevation
    pub elevation: f32,
}

impl Shadow {
    /// Create a new black shadow with zero horizontal offset
    pub fn new(offset_y: f32, opacity: f32, radius: f32, elevation: f32) -> Self {
        Self { color: "#000".to_string(), offset_x: 0.0, offset_y, opacity, radius, elevation }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// Low elevation
    pub fn low() -> Shadow {
        Shadow::new(1.0, 0.1, 2.0, 2.0)
    }

    /// Medium elevation
    pub fn medium() -> Shadow {
        Shadow::new(4.0, 0.3, 8.0, 8.0)
    }

    /// High elevation
    pub fn high() -> Shadow {
        Shadow::new(8.0, 0.5, 16.0, 16.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scale() {
        let scale = SpacingScale::default();
        assert_eq!(scale.xs, 4.0);
        assert_eq!(scale.sm, 8.0);
        assert_eq!(scale.md, 16.0);
        assert_eq!(scale.lg, 24.0);
        assert_eq!(scale.xl, 32.0);
        assert_eq!(scale.xxl, 48.0);
    }

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("md"), Some(16.0));
        assert_eq!(spacing::get("xxl"), Some(48.0));
        assert_eq!(spacing::get("huge"), None);
    }

    #[test]
    fn test_radius_scale() {
        let scale = RadiusScale::default();
        assert_eq!(scale.small, 4.0);
        assert_eq!(scale.medium, 8.0);
        assert_eq!(scale.large, 16.0);
        assert_eq!(scale.round, 999.0);
    }

    #[test]
    fn test_shadow_presets_grow() {
        let (low, medium, high) = (shadows::low(), shadows::medium(), shadows::high());
        assert_eq!(low.offset_y, 1.0);
        assert_eq!(medium.opacity, 0.3);
        assert_eq!(high.radius, 16.0);
        assert!(low.elevation < medium.elevation && medium.elevation < high.elevation);
        assert_eq!(high.color, "#000");
    }
}
