//! Design system themes for Solar Shell
//!
//! Two immutable themes exist, dark and light, each bundling a
//! [`ColorPalette`] with the shared spacing, radius and typography scales.
//! The dark palette is the one recommended under direct sunlight.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{dark_theme, light_theme, ThemeMode};
//!
//! let theme = dark_theme();
//! assert!(theme.is_dark());
//! assert_eq!(theme.colors.primary, "#00BCD4");
//! assert_eq!(light_theme().typography.h1.font_weight, 800);
//! assert_eq!("auto".parse::<ThemeMode>().unwrap(), ThemeMode::Auto);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::tokens::{RadiusScale, SpacingScale};
use crate::typography::{font_weight, Typography, TypographyVariant};

// =============================================================================
// Color Types
// =============================================================================

/// A color as a CSS string (e.g., "#FFFFFF" or "rgba(0, 0, 0, 0.8)")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Common Colors
// =============================================================================

/// Colors that do not change with the theme
pub mod common {
    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
    /// Pure black
    pub const BLACK: &str = "#000000";
    /// Fully transparent
    pub const TRANSPARENT: &str = "transparent";

    /// Saturated colors that stay legible under glare
    pub mod high_contrast {
        /// Neon orange
        pub const NEON_ORANGE: &str = "#FF6D00";
        /// Neon green
        pub const NEON_GREEN: &str = "#00E676";
        /// Neon yellow
        pub const NEON_YELLOW: &str = "#FFEA00";
        /// Dark blue
        pub const DARK_BLUE: &str = "#0D47A1";
    }
}

// =============================================================================
// Color Palette
// =============================================================================

/// Semantic colors for one appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Screen background
    pub background: Color,
    /// Raised surfaces (cards, sheets)
    pub surface: Color,
    /// Main brand/action color
    pub primary: Color,
    /// Secondary action color
    pub secondary: Color,
    /// Accent, also used for success
    pub accent: Color,
    /// Destructive actions and errors
    pub danger: Color,
    /// Warnings
    pub warning: Color,
    /// Informational highlights
    pub info: Color,
    /// Main text
    pub text_primary: Color,
    /// De-emphasized text
    pub text_secondary: Color,
    /// Disabled text
    pub text_disabled: Color,
    /// Component borders
    pub border: Color,
    /// Separators
    pub divider: Color,
    /// Modal scrim
    pub overlay: Color,
}

impl ColorPalette {
    /// Look a color up by role name (snake_case or camelCase)
    pub fn get(&self, role: &str) -> Option<&Color> {
        match role {
            "background" => Some(&self.background),
            "surface" => Some(&self.surface),
            "primary" => Some(&self.primary),
            "secondary" => Some(&self.secondary),
            "accent" => Some(&self.accent),
            "danger" => Some(&self.danger),
            "warning" => Some(&self.warning),
            "info" => Some(&self.info),
            "text_primary" | "textPrimary" => Some(&self.text_primary),
            "text_secondary" | "textSecondary" => Some(&self.text_secondary),
            "text_disabled" | "textDisabled" => Some(&self.text_disabled),
            "border" => Some(&self.border),
            "divider" => Some(&self.divider),
            "overlay" => Some(&self.overlay),
            _ => None,
        }
    }
}

/// Palette used by the dark theme
pub fn dark_palette() -> ColorPalette {
    ColorPalette {
        background: "#121212".to_string(),
        surface: "#1E1E1E".to_string(),
        primary: "#00BCD4".to_string(),
        secondary: "#FF9800".to_string(),
        accent: "#4CAF50".to_string(),
        danger: "#F44336".to_string(),
        warning: "#FFC107".to_string(),
        info: "#2196F3".to_string(),
        text_primary: "#FFFFFF".to_string(),
        text_secondary: "#BDBDBD".to_string(),
        text_disabled: "#757575".to_string(),
        border: "#424242".to_string(),
        divider: "#303030".to_string(),
        overlay: "rgba(0, 0, 0, 0.8)".to_string(),
    }
}

/// Palette used by the light theme
pub fn light_palette() -> ColorPalette {
    ColorPalette {
        background: "#F5F5F5".to_string(),
        surface: "#FFFFFF".to_string(),
        primary: "#1E88E5".to_string(),
        secondary: "#E65100".to_string(),
        accent: "#388E3C".to_string(),
        danger: "#D32F2F".to_string(),
        warning: "#F57C00".to_string(),
        info: "#1976D2".to_string(),
        text_primary: "#212121".to_string(),
        text_secondary: "#757575".to_string(),
        text_disabled: "#9E9E9E".to_string(),
        border: "#E0E0E0".to_string(),
        divider: "#EEEEEE".to_string(),
        overlay: "rgba(255, 255, 255, 0.9)".to_string(),
    }
}

/// Role for [`high_contrast_color`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighContrastRole {
    /// Foreground text
    Text,
    /// Screen background
    Background,
    /// Accent highlights
    Accent,
}

/// Highest-contrast color for a role in the given appearance
pub fn high_contrast_color(is_dark: bool, role: HighContrastRole) -> &'static str {
    let theme = if is_dark { dark_theme() } else { light_theme() };
    match role {
        HighContrastRole::Text => &theme.colors.text_primary,
        HighContrastRole::Background => &theme.colors.background,
        HighContrastRole::Accent => &theme.colors.primary,
    }
}

// =============================================================================
// Theme Mode
// =============================================================================

/// User-selected appearance preference
///
/// Deserializes leniently: unknown text becomes [`ThemeMode::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the device color scheme
    #[default]
    Auto,
}

impl ThemeMode {
    /// Parse a mode, treating anything unrecognized as [`ThemeMode::Auto`]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for ThemeMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&raw))
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Auto => write!(f, "auto"),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" | "system" => Ok(ThemeMode::Auto),
            _ => Err(format!("Unknown theme mode: {}", s)),
        }
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Which of the two themes this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Which theme this is
    pub variant: ThemeVariant,
    /// Color palette
    pub colors: ColorPalette,
    /// Spacing scale
    pub spacing: SpacingScale,
    /// Border radius scale
    pub border_radius: RadiusScale,
    /// Text styles
    pub typography: Typography,
}

impl Theme {
    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        self.variant == ThemeVariant::Dark
    }
}

static DARK_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    variant: ThemeVariant::Dark,
    colors: dark_palette(),
    spacing: SpacingScale::default(),
    border_radius: RadiusScale::default(),
    typography: Typography::default(),
});

static LIGHT_THEME: Lazy<Theme> = Lazy::new(|| {
    let dark = dark_theme();
    Theme {
        variant: ThemeVariant::Light,
        colors: light_palette(),
        spacing: dark.spacing,
        border_radius: dark.border_radius,
        // Heavier headings on light backgrounds
        typography: dark
            .typography
            .with_weight(TypographyVariant::H1, font_weight::EXTRA_BOLD)
            .with_weight(TypographyVariant::H2, font_weight::BOLD),
    }
});

/// The dark theme
pub fn dark_theme() -> &'static Theme {
    &DARK_THEME
}

/// The light theme
pub fn light_theme() -> &'static Theme {
    &LIGHT_THEME
}

/// Theme for a variant
pub fn get_theme(variant: ThemeVariant) -> &'static Theme {
    match variant {
        ThemeVariant::Light => light_theme(),
        ThemeVariant::Dark => dark_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#00BCD4"), Some((0, 188, 212)));
        assert_eq!(parse_hex_color("#FFFFFF80"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("FFFFFF"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("rgba(0, 0, 0, 0.8)"), None);
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" auto ".parse::<ThemeMode>().unwrap(), ThemeMode::Auto);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_theme_mode_lossy() {
        assert_eq!(ThemeMode::from_str_lossy("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_str_lossy("sepia"), ThemeMode::Auto);
        assert_eq!(ThemeMode::from_str_lossy(""), ThemeMode::Auto);
    }

    #[test]
    fn test_theme_mode_deserializes_leniently() {
        let parse = |json: &str| serde_json::from_str::<ThemeMode>(json).unwrap();
        assert_eq!(parse("\"light\""), ThemeMode::Light);
        assert_eq!(parse("\"DARK\""), ThemeMode::Dark);
        assert_eq!(parse("\"System\""), ThemeMode::Auto);
        assert_eq!(parse("\"sepia\""), ThemeMode::Auto);
        assert!(serde_json::from_str::<ThemeMode>("42").is_err());
    }

    #[test]
    fn test_theme_mode_display_and_default() {
        assert_eq!(ThemeMode::default(), ThemeMode::Auto);
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(serde_json::to_string(&ThemeMode::Auto).unwrap(), "\"auto\"");
    }

    #[test]
    fn test_dark_theme() {
        let theme = dark_theme();
        assert!(theme.is_dark());
        assert_eq!(theme.colors.background, "#121212");
        assert_eq!(theme.colors.surface, "#1E1E1E");
        assert_eq!(theme.colors.text_primary, "#FFFFFF");
        assert_eq!(theme.colors.overlay, "rgba(0, 0, 0, 0.8)");
        assert_eq!(theme.typography.h1.font_weight, 700);
        assert_eq!(theme.typography.h2.font_weight, 700);
    }

    #[test]
    fn test_light_theme() {
        let theme = light_theme();
        assert!(!theme.is_dark());
        assert_eq!(theme.colors.background, "#F5F5F5");
        assert_eq!(theme.colors.primary, "#1E88E5");
        assert_eq!(theme.colors.text_primary, "#212121");
        assert_eq!(theme.colors.overlay, "rgba(255, 255, 255, 0.9)");
    }

    #[test]
    fn test_light_theme_shares_scales_with_dark() {
        let (dark, light) = (dark_theme(), light_theme());
        assert_eq!(light.spacing, dark.spacing);
        assert_eq!(light.border_radius, dark.border_radius);
        assert_eq!(light.typography.h1.font_weight, 800);
        assert_eq!(light.typography.h1.font_size, dark.typography.h1.font_size);
        assert_eq!(light.typography.h2.font_weight, 700);
        assert_eq!(light.typography.h3, dark.typography.h3);
        assert_eq!(light.typography.body, dark.typography.body);
        assert_eq!(light.typography.caption, dark.typography.caption);
    }

    #[test]
    fn test_themes_are_shared_instances() {
        assert!(std::ptr::eq(dark_theme(), dark_theme()));
        assert!(std::ptr::eq(get_theme(ThemeVariant::Light), light_theme()));
    }

    #[test]
    fn test_palette_hex_colors_parse() {
        for palette in [dark_palette(), light_palette()] {
            for role in [
                "background",
                "surface",
                "primary",
                "secondary",
                "accent",
                "danger",
                "warning",
                "info",
                "textPrimary",
                "text_secondary",
                "textDisabled",
                "border",
                "divider",
            ] {
                let color = palette.get(role).unwrap();
                assert!(parse_hex_color(color).is_some(), "{role} = {color}");
            }
            assert!(palette.get("overlay").unwrap().starts_with("rgba("));
            assert!(palette.get("nope").is_none());
        }
    }

    #[test]
    fn test_high_contrast_color() {
        assert_eq!(high_contrast_color(true, HighContrastRole::Text), "#FFFFFF");
        assert_eq!(high_contrast_color(true, HighContrastRole::Background), "#121212");
        assert_eq!(high_contrast_color(true, HighContrastRole::Accent), "#00BCD4");
        assert_eq!(high_contrast_color(false, HighContrastRole::Text), "#212121");
        assert_eq!(high_contrast_color(false, HighContrastRole::Background), "#F5F5F5");
        assert_eq!(high_contrast_color(false, HighContrastRole::Accent), "#1E88E5");
    }

    #[test]
    fn test_common_colors() {
        assert_eq!(common::WHITE, "#FFFFFF");
        assert_eq!(common::high_contrast::NEON_GREEN, "#00E676");
        assert!(parse_hex_color(common::high_contrast::DARK_BLUE).is_some());
    }
}
