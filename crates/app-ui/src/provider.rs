//! Theme provider: resolves the active theme and owns the mode state
//!
//! The active theme depends on three inputs:
//!
//! 1. the user's [`ThemeMode`],
//! 2. the device color scheme (consulted only in [`ThemeMode::Auto`]),
//! 3. the local hour of day. Inside the [`SunlightWindow`] the dark theme is
//!    forced regardless of mode, since it reads better under strong light.
//!
//! [`ThemeProvider::is_dark_mode`] reports the mode-derived appearance only
//! (steps 1 and 2). It does not account for the sunlight override, so a
//! toggle bound to it can read "light" while dark colors are on screen. Use
//! [`ThemeContext::is_rendered_dark`] for what is actually displayed.
//!
//! Screens receive a [`ThemeContext`] handle rather than reaching for global
//! state; there is no way to obtain one without a provider.

use app_platform::{Appearance, Clock, ColorScheme, Subscription};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Weak};

use crate::theme::{dark_theme, light_theme, Theme, ThemeMode};

/// Hours during which the dark theme is forced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunlightWindow {
    /// Whether the override applies at all
    pub enabled: bool,
    /// First daytime hour (inclusive)
    pub start_hour: u32,
    /// Last daytime hour (inclusive)
    pub end_hour: u32,
}

impl Default for SunlightWindow {
    fn default() -> Self {
        Self { enabled: true, start_hour: 6, end_hour: 18 }
    }
}

impl SunlightWindow {
    /// A window that never forces the dark theme
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    /// Whether `hour` falls inside the window
    pub fn contains(&self, hour: u32) -> bool {
        self.enabled && (self.start_hour..=self.end_hour).contains(&hour)
    }
}

/// Mode to start in when none is configured: dark during daylight, auto otherwise
pub fn startup_mode(hour: u32, sunlight: &SunlightWindow) -> ThemeMode {
    if sunlight.contains(hour) {
        ThemeMode::Dark
    } else {
        ThemeMode::Auto
    }
}

/// Theme chosen by mode and device scheme alone
pub fn base_theme(mode: ThemeMode, device: ColorScheme) -> &'static Theme {
    match mode {
        ThemeMode::Light => light_theme(),
        ThemeMode::Dark => dark_theme(),
        ThemeMode::Auto => {
            if device.is_dark() {
                dark_theme()
            } else {
                light_theme()
            }
        }
    }
}

/// Theme actually displayed at `hour`
pub fn resolve_theme(
    mode: ThemeMode,
    device: ColorScheme,
    hour: u32,
    sunlight: &SunlightWindow,
) -> &'static Theme {
    if sunlight.contains(hour) {
        dark_theme()
    } else {
        base_theme(mode, device)
    }
}

/// Snapshot of the provider's mutable state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedThemeState {
    /// User-selected mode
    pub mode: ThemeMode,
    /// Whether the mode-derived theme is dark (ignores the sunlight override)
    pub is_dark_mode: bool,
    /// Last device color scheme seen
    pub device_scheme: ColorScheme,
}

struct Inner {
    state: RwLock<ResolvedThemeState>,
    clock: Arc<dyn Clock>,
    sunlight: SunlightWindow,
    _subscription: Subscription,
}

impl Inner {
    fn on_device_scheme_change(&self, scheme: ColorScheme) {
        let mut state = self.state.write();
        state.device_scheme = scheme;
        if state.mode == ThemeMode::Auto {
            state.is_dark_mode = scheme.is_dark();
        }
        tracing::debug!(
            %scheme,
            mode = %state.mode,
            is_dark_mode = state.is_dark_mode,
            "device scheme applied"
        );
    }

    fn theme(&self) -> &'static Theme {
        let state = *self.state.read();
        resolve_theme(state.mode, state.device_scheme, self.clock.current_hour(), &self.sunlight)
    }

    fn is_sunlight_override_active(&self) -> bool {
        self.sunlight.contains(self.clock.current_hour())
    }

    fn toggle_theme(&self) {
        let mut state = self.state.write();
        state.mode = if state.is_dark_mode { ThemeMode::Light } else { ThemeMode::Dark };
        state.is_dark_mode = !state.is_dark_mode;
        tracing::info!(mode = %state.mode, "theme toggled");
    }

    fn set_theme(&self, mode: ThemeMode) {
        let mut state = self.state.write();
        state.mode = mode;
        state.is_dark_mode = base_theme(mode, state.device_scheme).is_dark();
        tracing::info!(%mode, is_dark_mode = state.is_dark_mode, "theme mode set");
    }
}

/// Owner of the live theme state
///
/// Subscribes to device color scheme changes on construction. The
/// subscription is released once the provider and every [`ThemeContext`]
/// handed out by it have been dropped.
pub struct ThemeProvider {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("state", &*self.inner.state.read())
            .field("sunlight", &self.inner.sunlight)
            .finish()
    }
}

impl ThemeProvider {
    /// Create a provider with the default sunlight window
    pub fn new(
        initial_mode: ThemeMode,
        appearance: &Arc<Appearance>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_sunlight(initial_mode, appearance, clock, SunlightWindow::default())
    }

    /// Create a provider with an explicit sunlight window
    pub fn with_sunlight(
        initial_mode: ThemeMode,
        appearance: &Arc<Appearance>,
        clock: Arc<dyn Clock>,
        sunlight: SunlightWindow,
    ) -> Self {
        let inner = Arc::new_cyclic(|weak: &Weak<Inner>| {
            let listener = weak.clone();
            // Registered before sampling the scheme so no change slips between.
            let subscription = appearance.add_change_listener(move |scheme| {
                if let Some(inner) = listener.upgrade() {
                    inner.on_device_scheme_change(scheme);
                }
            });

            let device_scheme = appearance.color_scheme();
            Inner {
                state: RwLock::new(ResolvedThemeState {
                    mode: initial_mode,
                    is_dark_mode: base_theme(initial_mode, device_scheme).is_dark(),
                    device_scheme,
                }),
                clock,
                sunlight,
                _subscription: subscription,
            }
        });

        tracing::debug!(mode = %initial_mode, "theme provider started");
        Self { inner }
    }

    /// Handle for consumers
    pub fn context(&self) -> ThemeContext {
        ThemeContext { inner: Arc::clone(&self.inner) }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ResolvedThemeState {
        *self.inner.state.read()
    }

    /// Sunlight window in effect
    pub fn sunlight(&self) -> SunlightWindow {
        self.inner.sunlight
    }

    /// Currently active theme
    pub fn theme(&self) -> &'static Theme {
        self.inner.theme()
    }

    /// Mode-derived dark flag (ignores the sunlight override)
    pub fn is_dark_mode(&self) -> bool {
        self.inner.state.read().is_dark_mode
    }

    /// User-selected mode
    pub fn mode(&self) -> ThemeMode {
        self.inner.state.read().mode
    }

    /// Whether the sunlight window is forcing the dark theme right now
    pub fn is_sunlight_override_active(&self) -> bool {
        self.inner.is_sunlight_override_active()
    }

    /// Whether the active theme is dark
    pub fn is_rendered_dark(&self) -> bool {
        self.inner.theme().is_dark()
    }

    /// Flip between light and dark mode
    pub fn toggle_theme(&self) {
        self.inner.toggle_theme();
    }

    /// Select a mode
    pub fn set_theme(&self, mode: ThemeMode) {
        self.inner.set_theme(mode);
    }
}

/// Read access to the active theme plus the two mode mutators
#[derive(Clone)]
pub struct ThemeContext {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext").field("state", &*self.inner.state.read()).finish()
    }
}

impl ThemeContext {
    /// Currently active theme, resolved at call time
    pub fn theme(&self) -> &'static Theme {
        self.inner.theme()
    }

    /// Mode-derived dark flag (ignores the sunlight override)
    pub fn is_dark_mode(&self) -> bool {
        self.inner.state.read().is_dark_mode
    }

    /// User-selected mode
    pub fn mode(&self) -> ThemeMode {
        self.inner.state.read().mode
    }

    /// Whether the sunlight window is forcing the dark theme right now
    pub fn is_sunlight_override_active(&self) -> bool {
        self.inner.is_sunlight_override_active()
    }

    /// Whether the theme on screen is dark
    pub fn is_rendered_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Flip between light and dark mode
    pub fn toggle_theme(&self) {
        self.inner.toggle_theme();
    }

    /// Select a mode
    pub fn set_theme(&self, mode: ThemeMode) {
        self.inner.set_theme(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::FixedClock;

    const NIGHT: u32 = 22;
    const NOON: u32 = 12;

    fn provider_at(
        hour: u32,
        mode: ThemeMode,
        scheme: ColorScheme,
    ) -> (ThemeProvider, Arc<Appearance>, Arc<FixedClock>) {
        let appearance = Appearance::new(scheme);
        let clock = Arc::new(FixedClock::new(hour));
        let provider = ThemeProvider::new(mode, &appearance, clock.clone());
        (provider, appearance, clock)
    }

    #[test]
    fn test_daytime_always_dark() {
        for hour in 6..=18 {
            for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto] {
                for scheme in [ColorScheme::Light, ColorScheme::Dark, ColorScheme::Unspecified] {
                    let theme = resolve_theme(mode, scheme, hour, &SunlightWindow::default());
                    assert!(theme.is_dark(), "hour {hour} mode {mode} scheme {scheme}");
                }
            }
        }
    }

    #[test]
    fn test_night_follows_mode() {
        let window = SunlightWindow::default();
        for hour in (0..6).chain(19..24) {
            assert!(!resolve_theme(ThemeMode::Light, ColorScheme::Dark, hour, &window).is_dark());
            assert!(resolve_theme(ThemeMode::Dark, ColorScheme::Light, hour, &window).is_dark());
            assert!(!resolve_theme(ThemeMode::Auto, ColorScheme::Light, hour, &window).is_dark());
            assert!(resolve_theme(ThemeMode::Auto, ColorScheme::Dark, hour, &window).is_dark());
            assert!(
                !resolve_theme(ThemeMode::Auto, ColorScheme::Unspecified, hour, &window).is_dark()
            );
        }
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let window = SunlightWindow::default();
        assert!(!window.contains(5));
        assert!(window.contains(6));
        assert!(window.contains(18));
        assert!(!window.contains(19));
        assert!(!SunlightWindow::disabled().contains(12));
    }

    #[test]
    fn test_disabled_window_never_overrides() {
        let appearance = Appearance::new(ColorScheme::Light);
        let provider = ThemeProvider::with_sunlight(
            ThemeMode::Light,
            &appearance,
            Arc::new(FixedClock::new(NOON)),
            SunlightWindow::disabled(),
        );
        assert!(!provider.theme().is_dark());
        assert!(!provider.context().is_sunlight_override_active());
    }

    #[test]
    fn test_initial_dark_flag_follows_mode() {
        let (provider, _, _) = provider_at(NIGHT, ThemeMode::Light, ColorScheme::Dark);
        assert!(!provider.is_dark_mode());

        let (provider, _, _) = provider_at(NIGHT, ThemeMode::Dark, ColorScheme::Light);
        assert!(provider.is_dark_mode());

        let (provider, _, _) = provider_at(NIGHT, ThemeMode::Auto, ColorScheme::Dark);
        assert!(provider.is_dark_mode());
        assert!(provider.theme().is_dark());
    }

    #[test]
    fn test_dark_flag_ignores_sunlight_override() {
        let (provider, _, _) = provider_at(NOON, ThemeMode::Light, ColorScheme::Light);
        let ctx = provider.context();

        assert!(!ctx.is_dark_mode());
        assert!(ctx.is_rendered_dark());
        assert!(ctx.is_sunlight_override_active());
    }

    #[test]
    fn test_startup_mode() {
        let window = SunlightWindow::default();
        assert_eq!(startup_mode(NOON, &window), ThemeMode::Dark);
        assert_eq!(startup_mode(6, &window), ThemeMode::Dark);
        assert_eq!(startup_mode(18, &window), ThemeMode::Dark);
        assert_eq!(startup_mode(NIGHT, &window), ThemeMode::Auto);
        assert_eq!(startup_mode(NOON, &SunlightWindow::disabled()), ThemeMode::Auto);
    }

    #[test]
    fn test_resolution_samples_clock_each_time() {
        let (provider, _, clock) = provider_at(NOON, ThemeMode::Light, ColorScheme::Light);
        assert!(provider.theme().is_dark());

        clock.set_hour(NIGHT);
        assert!(!provider.theme().is_dark());
        assert!(!provider.is_sunlight_override_active());
        assert!(!provider.is_rendered_dark());
        assert_eq!(provider.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_theme() {
        let (provider, _, _) = provider_at(NIGHT, ThemeMode::Light, ColorScheme::Light);
        let ctx = provider.context();

        ctx.toggle_theme();
        assert_eq!(ctx.mode(), ThemeMode::Dark);
        assert!(ctx.is_dark_mode());
        assert!(ctx.theme().is_dark());

        ctx.toggle_theme();
        assert_eq!(ctx.mode(), ThemeMode::Light);
        assert!(!ctx.is_dark_mode());
        assert!(!ctx.theme().is_dark());
    }

    #[test]
    fn test_toggle_from_auto_leaves_auto() {
        let (provider, _, _) = provider_at(NIGHT, ThemeMode::Auto, ColorScheme::Dark);

        provider.toggle_theme();

        assert_eq!(provider.state().mode, ThemeMode::Light);
        assert!(!provider.is_dark_mode());
    }

    #[test]
    fn test_set_theme() {
        let (provider, _, _) = provider_at(NIGHT, ThemeMode::Light, ColorScheme::Dark);
        let ctx = provider.context();

        ctx.set_theme(ThemeMode::Dark);
        assert!(ctx.is_dark_mode());

        ctx.set_theme(ThemeMode::Light);
        assert!(!ctx.is_dark_mode());

        ctx.set_theme(ThemeMode::Auto);
        assert!(ctx.is_dark_mode());
        assert!(ctx.theme().is_dark());
    }

    #[test]
    fn test_device_change_in_auto_updates_flag() {
        let (provider, appearance, _) = provider_at(NIGHT, ThemeMode::Auto, ColorScheme::Light);
        assert!(!provider.is_dark_mode());

        appearance.set_color_scheme(ColorScheme::Dark);

        assert!(provider.is_dark_mode());
        assert!(provider.theme().is_dark());
    }

    #[test]
    fn test_device_change_outside_auto_is_remembered() {
        let (provider, appearance, _) = provider_at(NIGHT, ThemeMode::Light, ColorScheme::Light);

        appearance.set_color_scheme(ColorScheme::Dark);
        assert!(!provider.is_dark_mode());
        assert!(!provider.theme().is_dark());
        assert_eq!(provider.state().device_scheme, ColorScheme::Dark);

        provider.set_theme(ThemeMode::Auto);
        assert!(provider.is_dark_mode());
        assert!(provider.theme().is_dark());
    }

    #[test]
    fn test_subscription_released_on_teardown() {
        let (provider, appearance, _) = provider_at(NIGHT, ThemeMode::Auto, ColorScheme::Light);
        let ctx = provider.context();
        assert_eq!(appearance.listener_count(), 1);

        drop(provider);
        assert_eq!(appearance.listener_count(), 1);

        drop(ctx);
        assert_eq!(appearance.listener_count(), 0);
    }
}
