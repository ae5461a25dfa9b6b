//! Typography system for Solar Shell
//!
//! Five named text styles (three headings, body and caption). Sizes are
//! generous for outdoor use; the light theme bumps heading weights.

use serde::{Deserialize, Serialize};

// =============================================================================
// Font Weights
// =============================================================================

/// Font weight scale
pub mod font_weight {
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Semibold (600)
    pub const SEMIBOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
    /// Extra bold (800)
    pub const EXTRA_BOLD: u16 = 800;
}

// =============================================================================
// Typography Style
// =============================================================================

/// A typography style definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 600, 700, 800)
    pub font_weight: u16,
    /// Line height in pixels
    pub line_height: f32,
    /// Letter spacing in pixels (None = font default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16, line_height: f32) -> Self {
        Self { font_size, font_weight, line_height, letter_spacing: None }
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, ls: f32) -> Self {
        self.letter_spacing = Some(ls);
        self
    }

    /// Replace the font weight
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }
}

// =============================================================================
// Typography Variants
// =============================================================================

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypographyVariant {
    /// Screen title
    H1,
    /// Section title
    H2,
    /// Card title and button label size
    H3,
    /// Body copy
    #[default]
    Body,
    /// Small print
    Caption,
}

impl TypographyVariant {
    /// All variants, largest first
    pub const ALL: [TypographyVariant; 5] = [
        TypographyVariant::H1,
        TypographyVariant::H2,
        TypographyVariant::H3,
        TypographyVariant::Body,
        TypographyVariant::Caption,
    ];
}

/// The five text styles carried by a theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Screen title
    pub h1: TextStyle,
    /// Section title
    pub h2: TextStyle,
    /// Card title
    pub h3: TextStyle,
    /// Body copy
    pub body: TextStyle,
    /// Small print
    pub caption: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            h1: TextStyle::new(32.0, font_weight::BOLD, 40.0).with_letter_spacing(0.5),
            h2: TextStyle::new(24.0, font_weight::BOLD, 32.0).with_letter_spacing(0.3),
            h3: TextStyle::new(18.0, font_weight::SEMIBOLD, 24.0),
            body: TextStyle::new(16.0, font_weight::REGULAR, 22.0),
            caption: TextStyle::new(12.0, font_weight::REGULAR, 16.0),
        }
    }
}

impl Typography {
    /// Get a style by variant
    pub fn get(&self, variant: TypographyVariant) -> &TextStyle {
        match variant {
            TypographyVariant::H1 => &self.h1,
            TypographyVariant::H2 => &self.h2,
            TypographyVariant::H3 => &self.h3,
            TypographyVariant::Body => &self.body,
            TypographyVariant::Caption => &self.caption,
        }
    }

    /// Copy with one variant's weight replaced
    pub fn with_weight(mut self, variant: TypographyVariant, weight: u16) -> Self {
        let style = match variant {
            TypographyVariant::H1 => &mut self.h1,
            TypographyVariant::H2 => &mut self.h2,
            TypographyVariant::H3 => &mut self.h3,
            TypographyVariant::Body => &mut self.body,
            TypographyVariant::Caption => &mut self.caption,
        };
        *style = style.with_weight(weight);
        self
    }
}
