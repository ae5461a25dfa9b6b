//! Device appearance signal
//!
//! The host environment reports a system-wide color scheme preference and
//! may change it at any time. [`Appearance`] holds the latest reported value
//! and fans change notifications out to registered listeners.
//!
//! Listeners are registered with [`Appearance::add_change_listener`], which
//! returns a [`Subscription`]. Dropping the subscription unregisters the
//! listener.
//!
//! ```rust
//! use app_platform::appearance::{Appearance, ColorScheme};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let appearance = Appearance::new(ColorScheme::Light);
//! let seen = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&seen);
//! let subscription = appearance.add_change_listener(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! appearance.set_color_scheme(ColorScheme::Dark);
//! drop(subscription);
//! appearance.set_color_scheme(ColorScheme::Light);
//!
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// System color scheme reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark appearance
    Dark,
    /// Light appearance
    Light,
    /// The device did not report a preference
    #[default]
    Unspecified,
}

impl ColorScheme {
    /// Whether the device asked for a dark appearance
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Dark => write!(f, "dark"),
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Unspecified => write!(f, "unspecified"),
        }
    }
}

impl From<dark_light::Mode> for ColorScheme {
    fn from(mode: dark_light::Mode) -> Self {
        match mode {
            dark_light::Mode::Dark => ColorScheme::Dark,
            dark_light::Mode::Light => ColorScheme::Light,
            dark_light::Mode::Default => ColorScheme::Unspecified,
        }
    }
}

type Listener = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// Live device color scheme with change notifications
pub struct Appearance {
    current: RwLock<ColorScheme>,
    listeners: Mutex<BTreeMap<u64, Listener>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Appearance")
            .field("current", &*self.current.read())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

impl Appearance {
    /// Create an appearance source with an explicit initial scheme
    pub fn new(initial: ColorScheme) -> Arc<Self> {
        Arc::new(Self {
            current: RwLock::new(initial),
            listeners: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(0),
        })
    }

    /// Create an appearance source seeded from the operating system setting
    pub fn detect() -> Arc<Self> {
        let scheme = ColorScheme::from(dark_light::detect());
        tracing::debug!(%scheme, "detected system color scheme");
        Self::new(scheme)
    }

    /// The most recently reported color scheme
    pub fn color_scheme(&self) -> ColorScheme {
        *self.current.read()
    }

    /// Record a new color scheme reported by the host.
    ///
    /// Listeners are notified only when the value actually changes.
    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        {
            let mut current = self.current.write();
            if *current == scheme {
                return;
            }
            *current = scheme;
        }

        tracing::debug!(%scheme, "device color scheme changed");

        // Snapshot so listeners can subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self.listeners.lock().values().cloned().collect();
        for listener in listeners {
            listener(scheme);
        }
    }

    /// Register a change listener, kept alive for as long as the returned
    /// [`Subscription`] is held
    pub fn add_change_listener<F>(self: &Arc<Self>, listener: F) -> Subscription
    where
        F: Fn(ColorScheme) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().insert(id, Arc::new(listener));

        Subscription { id, source: Arc::downgrade(self) }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn remove_listener(&self, id: u64) {
        self.listeners.lock().remove(&id);
    }
}

/// Registration handle for an appearance listener
///
/// The listener is removed when this value is dropped.
#[must_use = "dropping a Subscription immediately unregisters the listener"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    source: Weak<Appearance>,
}

impl Subscription {
    /// Explicitly unregister the listener
    pub fn remove(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(source) = self.source.upgrade() {
            source.remove_listener(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(appearance: &Arc<Appearance>) -> (Arc<Mutex<Vec<ColorScheme>>>, Subscription) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = appearance.add_change_listener(move |scheme| sink.lock().push(scheme));
        (seen, subscription)
    }

    #[test]
    fn test_initial_scheme() {
        let appearance = Appearance::new(ColorScheme::Dark);
        assert_eq!(appearance.color_scheme(), ColorScheme::Dark);
        assert!(appearance.color_scheme().is_dark());
    }

    #[test]
    fn test_listener_receives_changes() {
        let appearance = Appearance::new(ColorScheme::Light);
        let (seen, _subscription) = recorder(&appearance);

        appearance.set_color_scheme(ColorScheme::Dark);
        appearance.set_color_scheme(ColorScheme::Unspecified);

        assert_eq!(*seen.lock(), vec![ColorScheme::Dark, ColorScheme::Unspecified]);
        assert_eq!(appearance.color_scheme(), ColorScheme::Unspecified);
    }

    #[test]
    fn test_unchanged_scheme_does_not_notify() {
        let appearance = Appearance::new(ColorScheme::Light);
        let (seen, _subscription) = recorder(&appearance);

        appearance.set_color_scheme(ColorScheme::Light);

        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let appearance = Appearance::new(ColorScheme::Light);
        let (seen, subscription) = recorder(&appearance);
        assert_eq!(appearance.listener_count(), 1);

        subscription.remove();
        assert_eq!(appearance.listener_count(), 0);

        appearance.set_color_scheme(ColorScheme::Dark);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_subscription_outliving_source() {
        let appearance = Appearance::new(ColorScheme::Light);
        let (_seen, subscription) = recorder(&appearance);

        drop(appearance);
        drop(subscription);
    }

    #[test]
    fn test_from_os_mode() {
        assert_eq!(ColorScheme::from(dark_light::Mode::Dark), ColorScheme::Dark);
        assert_eq!(ColorScheme::from(dark_light::Mode::Light), ColorScheme::Light);
        assert_eq!(ColorScheme::from(dark_light::Mode::Default), ColorScheme::Unspecified);
    }

    #[test]
    fn test_scheme_serde() {
        assert_eq!(serde_json::to_string(&ColorScheme::Dark).unwrap(), "\"dark\"");
        let parsed: ColorScheme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ColorScheme::Light);
    }
}
