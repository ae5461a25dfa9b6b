//! User interface for Solar Shell
//!
//! This crate provides the UI layer: design tokens, the two color palettes,
//! the theme provider with its sunlight override, themed components and the
//! login and home screens.
//!
//! # Design System
//!
//! Two palettes are available:
//! - Dark: near-black background (#121212) with cyan (#00BCD4) primary
//! - Light: off-white background (#F5F5F5) with blue (#1E88E5) primary
//!
//! Between 06:00 and 18:00 local time the rendered palette is forced dark,
//! whatever mode the user picked.
//!
//! # Modules
//!
//! - [`theme`] - Color palettes, theme modes and the two static themes
//! - [`provider`] - Theme resolution, the shared provider and its context
//! - [`tokens`] - Design tokens (spacing, radius, sizing, shadows)
//! - [`typography`] - Typography system and text styles
//! - [`components`] - Button, card, text field and switch
//! - [`screens`] - Login and home screens
//!
//! # Example
//!
//! ```rust
//! use app_ui::provider::{resolve_theme, SunlightWindow};
//! use app_ui::theme::ThemeMode;
//! use app_platform::ColorScheme;
//!
//! let window = SunlightWindow::default();
//!
//! // Evening: the user's choice wins
//! let theme = resolve_theme(ThemeMode::Light, ColorScheme::Dark, 20, &window);
//! assert!(!theme.is_dark());
//!
//! // Noon: forced dark
//! let theme = resolve_theme(ThemeMode::Light, ColorScheme::Dark, 12, &window);
//! assert!(theme.is_dark());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod provider;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use components::{
    ButtonVariant, CardPadding, Elevation, SolarButton, SolarCard, Text, TextField, ThemeSwitch,
};
pub use provider::{
    base_theme, resolve_theme, startup_mode, ResolvedThemeState, SunlightWindow, ThemeContext,
    ThemeProvider,
};
pub use screens::{
    HomeAction, HomeOutcome, HomeScreen, HomeView, LoginForm, LoginScreen, LoginView,
    SubmitOutcome,
};
pub use theme::{
    dark_theme, get_theme, light_theme, ColorPalette, Theme, ThemeMode, ThemeVariant,
};
pub use tokens::{RadiusScale, Shadow, SpacingScale};
pub use typography::{TextStyle, Typography, TypographyVariant};
