//! Themed UI components for Solar Shell
//!
//! Components are plain structs with builder-style props. Each one computes
//! a serializable style description from a [`Theme`] that the host renderer
//! draws; nothing here lays out or paints pixels.
//!
//! # Available Components
//!
//! - [`SolarButton`] - High-contrast button in six variants
//! - [`SolarCard`] - Surface container with elevation presets
//! - [`TextField`] - Labelled text input with inline error
//! - [`ThemeSwitch`] - Dark mode toggle
//! - [`Text`] - Typography-bound label

use crate::theme::{common, Color, Theme};
use crate::tokens::{border, opacity, shadows, sizing, Shadow};
use crate::typography::{TextStyle, TypographyVariant};
use serde::{Deserialize, Serialize};

/// Event handler identifier the host binds to an action
pub type EventHandler = String;

/// Accessibility role announced by screen readers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessibilityRole {
    /// Pressable button
    Button,
    /// Grouped summary content
    Summary,
    /// Editable text
    Text,
    /// On/off switch
    Switch,
    /// Static header
    Header,
}

// =============================================================================
// Text Component
// =============================================================================

/// Static text bound to a typography variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Typography variant
    pub variant: TypographyVariant,
    /// Render in the secondary text color
    #[serde(default)]
    pub secondary: bool,
}

impl Text {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), variant: TypographyVariant::Body, secondary: false }
    }

    /// Set the typography variant
    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Use the secondary text color
    pub fn secondary(mut self) -> Self {
        self.secondary = true;
        self
    }

    /// Resolve font and color against a theme
    pub fn computed_styles(&self, theme: &Theme) -> TextStyles {
        TextStyles {
            font: *theme.typography.get(self.variant),
            color: if self.secondary {
                theme.colors.text_secondary.clone()
            } else {
                theme.colors.text_primary.clone()
            },
        }
    }
}

/// Computed text styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyles {
    /// Font metrics
    pub font: TextStyle,
    /// Text color
    pub color: Color,
}

// =============================================================================
// Button Component
// =============================================================================

/// Button color variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Primary action
    #[default]
    Primary,
    /// Secondary action
    Secondary,
    /// Destructive action
    Danger,
    /// Positive confirmation
    Success,
    /// Needs attention
    Warning,
    /// Transparent with a colored border
    Outline,
}

impl ButtonVariant {
    /// All variants in display order
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Danger,
        ButtonVariant::Success,
        ButtonVariant::Warning,
        ButtonVariant::Outline,
    ];
}

/// Button width behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonWidth {
    /// Size to content
    #[default]
    Auto,
    /// Fill the parent
    Full,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarButton {
    /// Label, also the accessibility label
    pub title: String,
    /// Color variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Whether presses are ignored
    #[serde(default)]
    pub disabled: bool,
    /// Stretch to the parent width
    #[serde(default)]
    pub full_width: bool,
    /// Show a spinner in place of the icon
    #[serde(default)]
    pub loading: bool,
    /// Icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl SolarButton {
    /// Create a primary button
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant: ButtonVariant::default(),
            disabled: false,
            full_width: false,
            loading: false,
            icon: None,
            on_press: None,
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Stretch to the parent width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Set icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Handler to fire for a press, or `None` while disabled
    pub fn press(&self) -> Option<&EventHandler> {
        if self.disabled {
            None
        } else {
            self.on_press.as_ref()
        }
    }

    /// Accessibility label
    pub fn accessibility_label(&self) -> &str {
        &self.title
    }

    /// Get the computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let colors = &theme.colors;
        let background = match self.variant {
            ButtonVariant::Primary => colors.primary.clone(),
            ButtonVariant::Secondary => colors.secondary.clone(),
            ButtonVariant::Danger => colors.danger.clone(),
            ButtonVariant::Success => colors.accent.clone(),
            ButtonVariant::Warning => colors.warning.clone(),
            ButtonVariant::Outline => common::TRANSPARENT.to_string(),
        };

        // Outline buttons tint border and label; everything else uses the
        // main text color for both.
        let foreground = if self.variant == ButtonVariant::Outline {
            colors.primary.clone()
        } else {
            colors.text_primary.clone()
        };

        ButtonStyles {
            background,
            border_color: foreground.clone(),
            text_color: foreground,
            border_width: border::THICK,
            border_radius: theme.border_radius.medium,
            padding_horizontal: theme.spacing.lg,
            padding_vertical: theme.spacing.md,
            min_height: sizing::button::MIN_HEIGHT,
            width: if self.full_width { ButtonWidth::Full } else { ButtonWidth::Auto },
            opacity: if self.disabled || self.loading { opacity::DISABLED } else { opacity::FULL },
            active_opacity: opacity::PRESSED,
            font_size: theme.typography.h3.font_size,
            font_weight: sizing::button::LABEL_WEIGHT,
            icon_gap: if self.icon.is_some() { theme.spacing.sm } else { 0.0 },
            spinner_gap: theme.spacing.sm,
            show_spinner: self.loading,
            show_icon: self.icon.is_some() && !self.loading,
            accessibility_role: AccessibilityRole::Button,
        }
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Background color
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Label and spinner color
    pub text_color: Color,
    /// Border width
    pub border_width: f32,
    /// Border radius
    pub border_radius: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Vertical padding
    pub padding_vertical: f32,
    /// Minimum height
    pub min_height: f32,
    /// Width behaviour
    pub width: ButtonWidth,
    /// Resting opacity
    pub opacity: f32,
    /// Opacity while pressed
    pub active_opacity: f32,
    /// Label font size
    pub font_size: f32,
    /// Label font weight
    pub font_weight: u16,
    /// Space after the icon
    pub icon_gap: f32,
    /// Space after the spinner
    pub spinner_gap: f32,
    /// Whether the loading spinner is visible
    pub show_spinner: bool,
    /// Whether the icon is visible
    pub show_icon: bool,
    /// Accessibility role
    pub accessibility_role: AccessibilityRole,
}

// =============================================================================
// Card Component
// =============================================================================

/// Card shadow depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Elevation {
    /// Subtle
    Low,
    /// Standard
    #[default]
    Medium,
    /// Prominent
    High,
}

impl Elevation {
    /// Shadow preset for this elevation
    pub fn shadow(&self) -> Shadow {
        match self {
            Elevation::Low => shadows::low(),
            Elevation::Medium => shadows::medium(),
            Elevation::High => shadows::high(),
        }
    }
}

/// Card inner padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPadding {
    /// No padding
    None,
    /// Small spacing
    Small,
    /// Medium spacing
    #[default]
    Medium,
    /// Large spacing
    Large,
}

/// Card container properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarCard {
    /// Shadow depth
    #[serde(default)]
    pub elevation: Elevation,
    /// Draw a border
    pub with_border: bool,
    /// Inner padding
    #[serde(default)]
    pub padding: CardPadding,
}

impl Default for SolarCard {
    fn default() -> Self {
        Self { elevation: Elevation::default(), with_border: true, padding: CardPadding::default() }
    }
}

impl SolarCard {
    /// Create a bordered card with medium elevation and padding
    pub fn new() -> Self {
        Self::default()
    }

    /// Set elevation
    pub fn with_elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = elevation;
        self
    }

    /// Toggle the border
    pub fn with_border(mut self, with_border: bool) -> Self {
        self.with_border = with_border;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: CardPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Get the computed styles for this card based on theme
    pub fn computed_styles(&self, theme: &Theme) -> CardStyles {
        let padding = match self.padding {
            CardPadding::None => 0.0,
            CardPadding::Small => theme.spacing.sm,
            CardPadding::Medium => theme.spacing.md,
            CardPadding::Large => theme.spacing.lg,
        };

        CardStyles {
            background: theme.colors.surface.clone(),
            border_radius: theme.border_radius.large,
            padding,
            margin_vertical: theme.spacing.sm,
            border_width: if self.with_border { border::THIN } else { border::NONE },
            border_color: theme.colors.border.clone(),
            shadow: self.elevation.shadow(),
            accessibility_role: AccessibilityRole::Summary,
        }
    }
}

/// Computed card styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStyles {
    /// Background color
    pub background: Color,
    /// Border radius
    pub border_radius: f32,
    /// Inner padding
    pub padding: f32,
    /// Vertical margin
    pub margin_vertical: f32,
    /// Border width
    pub border_width: f32,
    /// Border color
    pub border_color: Color,
    /// Drop shadow
    pub shadow: Shadow,
    /// Accessibility role
    pub accessibility_role: AccessibilityRole,
}

// =============================================================================
// Text Field Component
// =============================================================================

/// Labelled single-line text input
///
/// A `secure` field serializes its value as one bullet per character.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextField {
    /// Field label
    pub label: String,
    /// Current value
    pub value: String,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Hide the entered characters
    #[serde(default)]
    pub secure: bool,
    /// Inline error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether input is blocked
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Serialize)]
struct TextFieldRepr<'a> {
    label: &'a str,
    value: std::borrow::Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<&'a str>,
    secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    disabled: bool,
}

impl Serialize for TextField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        TextFieldRepr {
            label: &self.label,
            value: self.display_value(),
            placeholder: self.placeholder.as_deref(),
            secure: self.secure,
            error: self.error.as_deref(),
            disabled: self.disabled,
        }
        .serialize(serializer)
    }
}

impl TextField {
    /// Value as shown on screen
    pub fn display_value(&self) -> std::borrow::Cow<'_, str> {
        if self.secure {
            "\u{2022}".repeat(self.value.chars().count()).into()
        } else {
            self.value.as_str().into()
        }
    }

    /// Create an empty field
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            placeholder: None,
            secure: false,
            error: None,
            disabled: false,
        }
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mask the input
    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    /// Attach an error message
    pub fn with_error(mut self, error: Option<impl Into<String>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Block input
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Get the computed styles for this field based on theme
    pub fn computed_styles(&self, theme: &Theme) -> TextFieldStyles {
        let colors = &theme.colors;
        TextFieldStyles {
            background: colors.surface.clone(),
            text_color: if self.disabled {
                colors.text_disabled.clone()
            } else {
                colors.text_primary.clone()
            },
            placeholder_color: colors.text_secondary.clone(),
            border_color: if self.error.is_some() {
                colors.danger.clone()
            } else {
                colors.border.clone()
            },
            border_width: if self.error.is_some() { border::THICK } else { border::THIN },
            border_radius: theme.border_radius.medium,
            padding_horizontal: theme.spacing.md,
            height: sizing::input::HEIGHT,
            font: theme.typography.body,
            label_font: theme.typography.caption,
            error_color: colors.danger.clone(),
        }
    }
}

/// Computed text field styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFieldStyles {
    /// Background color
    pub background: Color,
    /// Entered text color
    pub text_color: Color,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Border color (danger while an error is shown)
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Border radius
    pub border_radius: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Field height
    pub height: f32,
    /// Input font
    pub font: TextStyle,
    /// Label font
    pub label_font: TextStyle,
    /// Error message color
    pub error_color: Color,
}

// =============================================================================
// Theme Switch Component
// =============================================================================

/// Dark mode switch bound to the provider's dark flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSwitch {
    /// Label next to the switch
    pub label: String,
    /// Whether the switch is on
    pub value: bool,
    /// Toggle handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_toggle: Option<EventHandler>,
}

impl ThemeSwitch {
    /// Create a switch
    pub fn new(label: impl Into<String>, value: bool) -> Self {
        Self { label: label.into(), value, on_toggle: None }
    }

    /// Set toggle handler
    pub fn on_toggle(mut self, handler: impl Into<String>) -> Self {
        self.on_toggle = Some(handler.into());
        self
    }

    /// Get the computed styles for this switch based on theme
    pub fn computed_styles(&self, theme: &Theme) -> SwitchStyles {
        SwitchStyles {
            track_color: if self.value {
                theme.colors.primary.clone()
            } else {
                theme.colors.border.clone()
            },
            thumb_color: common::WHITE.to_string(),
            track_width: sizing::switch::TRACK_WIDTH,
            track_height: sizing::switch::TRACK_HEIGHT,
            accessibility_role: AccessibilityRole::Switch,
        }
    }
}

/// Computed switch styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStyles {
    /// Track color
    pub track_color: Color,
    /// Thumb color
    pub thumb_color: Color,
    /// Track width
    pub track_width: f32,
    /// Track height
    pub track_height: f32,
    /// Accessibility role
    pub accessibility_role: AccessibilityRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dark_theme, light_theme};

    // ==========================================================================
    // Button Tests
    // ==========================================================================

    #[test]
    fn test_button_backgrounds_per_variant() {
        let theme = dark_theme();
        let bg = |v| SolarButton::new("Go").with_variant(v).computed_styles(theme).background;

        assert_eq!(bg(ButtonVariant::Primary), "#00BCD4");
        assert_eq!(bg(ButtonVariant::Secondary), "#FF9800");
        assert_eq!(bg(ButtonVariant::Danger), "#F44336");
        assert_eq!(bg(ButtonVariant::Success), "#4CAF50");
        assert_eq!(bg(ButtonVariant::Warning), "#FFC107");
        assert_eq!(bg(ButtonVariant::Outline), "transparent");
    }

    #[test]
    fn test_button_foreground() {
        let theme = light_theme();

        let solid = SolarButton::new("Save").computed_styles(theme);
        assert_eq!(solid.text_color, theme.colors.text_primary);
        assert_eq!(solid.border_color, theme.colors.text_primary);

        let outline =
            SolarButton::new("Save").with_variant(ButtonVariant::Outline).computed_styles(theme);
        assert_eq!(outline.text_color, theme.colors.primary);
        assert_eq!(outline.border_color, theme.colors.primary);
    }

    #[test]
    fn test_button_metrics() {
        let theme = dark_theme();
        let styles = SolarButton::new("Save").computed_styles(theme);

        assert_eq!(styles.border_radius, 8.0);
        assert_eq!(styles.padding_horizontal, 24.0);
        assert_eq!(styles.padding_vertical, 16.0);
        assert_eq!(styles.border_width, 2.0);
        assert_eq!(styles.min_height, 56.0);
        assert_eq!(styles.font_size, 18.0);
        assert_eq!(styles.font_weight, 600);
        assert_eq!(styles.width, ButtonWidth::Auto);
        assert_eq!(styles.opacity, 1.0);
        assert_eq!(styles.accessibility_role, AccessibilityRole::Button);
    }

    #[test]
    fn test_button_dimmed_when_disabled_or_loading() {
        let theme = dark_theme();
        assert_eq!(SolarButton::new("a").disabled(true).computed_styles(theme).opacity, 0.6);
        assert_eq!(SolarButton::new("a").loading(true).computed_styles(theme).opacity, 0.6);
        let full = SolarButton::new("a").full_width(true).computed_styles(theme);
        assert_eq!(full.width, ButtonWidth::Full);
    }

    #[test]
    fn test_button_icon_and_spinner() {
        let theme = dark_theme();

        let plain = SolarButton::new("a").computed_styles(theme);
        assert_eq!(plain.icon_gap, 0.0);
        assert!(!plain.show_icon);

        let with_icon = SolarButton::new("a").with_icon("sun").computed_styles(theme);
        assert_eq!(with_icon.icon_gap, 8.0);
        assert!(with_icon.show_icon);
        assert!(!with_icon.show_spinner);

        let busy = SolarButton::new("a").with_icon("sun").loading(true).computed_styles(theme);
        assert!(busy.show_spinner);
        assert!(!busy.show_icon);
    }

    #[test]
    fn test_button_press() {
        let button = SolarButton::new("Go").on_press("go");
        assert_eq!(button.press().map(String::as_str), Some("go"));
        assert_eq!(button.clone().loading(true).press().map(String::as_str), Some("go"));
        assert_eq!(button.disabled(true).press(), None);
        assert_eq!(SolarButton::new("Go").accessibility_label(), "Go");
    }

    // ==========================================================================
    // Card Tests
    // ==========================================================================

    #[test]
    fn test_card_defaults() {
        let theme = dark_theme();
        let styles = SolarCard::new().computed_styles(theme);

        assert_eq!(styles.background, "#1E1E1E");
        assert_eq!(styles.border_radius, 16.0);
        assert_eq!(styles.padding, 16.0);
        assert_eq!(styles.margin_vertical, 8.0);
        assert_eq!(styles.border_width, 1.0);
        assert_eq!(styles.border_color, "#424242");
        assert_eq!(styles.shadow, shadows::medium());
        assert_eq!(styles.accessibility_role, AccessibilityRole::Summary);
    }

    #[test]
    fn test_card_padding_and_border() {
        let theme = light_theme();
        let pad = |p| SolarCard::new().with_padding(p).computed_styles(theme).padding;

        assert_eq!(pad(CardPadding::None), 0.0);
        assert_eq!(pad(CardPadding::Small), 8.0);
        assert_eq!(pad(CardPadding::Medium), 16.0);
        assert_eq!(pad(CardPadding::Large), 24.0);

        let borderless = SolarCard::new().with_border(false).computed_styles(theme);
        assert_eq!(borderless.border_width, 0.0);
    }

    #[test]
    fn test_card_elevation_shadows() {
        let theme = light_theme();
        let shadow = |e| SolarCard::new().with_elevation(e).computed_styles(theme).shadow;

        assert_eq!(shadow(Elevation::Low).elevation, 2.0);
        assert_eq!(shadow(Elevation::Medium).offset_y, 4.0);
        assert_eq!(shadow(Elevation::High).opacity, 0.5);
    }

    // ==========================================================================
    // Field, Switch and Text Tests
    // ==========================================================================

    #[test]
    fn test_text_field_error_styles() {
        let theme = dark_theme();
        let clean = TextField::new("Username").computed_styles(theme);
        assert_eq!(clean.border_color, theme.colors.border);
        assert_eq!(clean.border_width, 1.0);

        let field = TextField::new("Username").with_error(Some("Username is required"));
        assert_eq!(field.error.as_deref(), Some("Username is required"));
        let styles = field.computed_styles(theme);
        assert_eq!(styles.border_color, theme.colors.danger);
        assert_eq!(styles.border_width, 2.0);
    }

    #[test]
    fn test_text_field_builders() {
        let field = TextField::new("Password")
            .with_value("secret")
            .with_placeholder("At least 6 characters")
            .secure()
            .with_error(None::<String>);

        assert!(field.secure);
        assert_eq!(field.value, "secret");
        assert!(field.error.is_none());
        let json = serde_json::to_value(&field).unwrap();
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_secure_field_serializes_masked_value() {
        let field = TextField::new("Password").with_value("sécret").secure();
        assert_eq!(field.display_value(), "\u{2022}".repeat(6));

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["value"], "\u{2022}".repeat(6));
        assert_eq!(json["secure"], true);
        assert!(!json.to_string().contains("sécret"));

        let plain = serde_json::to_value(TextField::new("Username").with_value("alice")).unwrap();
        assert_eq!(plain["value"], "alice");
    }

    #[test]
    fn test_switch_track_color() {
        let theme = dark_theme();
        assert_eq!(ThemeSwitch::new("Dark", true).computed_styles(theme).track_color, "#00BCD4");
        assert_eq!(ThemeSwitch::new("Dark", false).computed_styles(theme).track_color, "#424242");
    }

    #[test]
    fn test_text_styles() {
        let theme = light_theme();
        let title = Text::new("Hi").with_variant(TypographyVariant::H1).computed_styles(theme);
        assert_eq!(title.font.font_weight, 800);
        assert_eq!(title.color, "#212121");

        let note = Text::new("small").secondary().computed_styles(theme);
        assert_eq!(note.color, "#757575");
        assert_eq!(note.font, theme.typography.body);
    }
}
