//! Solar Shell
//!
//! Application shell wiring the theme provider, the authentication gate and
//! the two screens together. A persisted session token skips the login
//! screen on startup.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;

use std::sync::Arc;

use app_core::{AuthService, Authenticator, KvTokenStore, MockAuthenticator, TokenStore};
use app_platform::{Appearance, Clock};
use app_ui::{
    HomeAction, HomeOutcome, HomeScreen, HomeView, LoginScreen, LoginView, SubmitOutcome,
    ThemeContext, ThemeProvider,
};
use serde::Serialize;
use storage::{KvConfig, KvStore};
use thiserror::Error;

pub use config::{AppConfig, ConfigError};

/// Shell error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The key-value store could not be opened
    #[error("Storage error: {0}")]
    Storage(#[from] storage::KvError),

    /// Session could not be cleared
    #[error("Auth error: {0}")]
    Auth(#[from] app_core::AuthError),
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, AppError>;

/// The screen currently shown
#[derive(Debug)]
pub enum Screen {
    /// Logged out
    Login(LoginScreen),
    /// Logged in
    Home(HomeScreen),
}

/// Serializable view of the current screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    /// Login screen view
    Login(LoginView),
    /// Home screen view
    Home(HomeView),
}

/// Running application
#[derive(Debug)]
pub struct App {
    provider: ThemeProvider,
    auth: AuthService,
    screen: Screen,
}

impl App {
    /// Open storage and build the shell from configuration
    pub fn start(
        config: &AppConfig,
        appearance: Arc<Appearance>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let kv = KvStore::new(KvConfig::new(config.storage_path.clone()))?;
        tracing::info!(path = %config.storage_path, "opened store");

        let mode = config.startup_mode(clock.current_hour());
        let provider = ThemeProvider::with_sunlight(mode, &appearance, clock, config.sunlight);
        let authenticator = Arc::new(MockAuthenticator::new(config.login_latency()));
        let tokens = Arc::new(KvTokenStore::new(Arc::new(kv)));

        Ok(Self::with_services(provider, authenticator, tokens))
    }

    /// Build the shell from explicit parts
    pub fn with_services(
        provider: ThemeProvider,
        authenticator: Arc<dyn Authenticator>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let auth = AuthService::new(authenticator, tokens);
        let screen = match auth.restore_session() {
            Some(_) => Screen::Home(HomeScreen::new(provider.context(), None)),
            None => Screen::Login(LoginScreen::new(provider.context(), auth.clone())),
        };
        Self { provider, auth, screen }
    }

    /// Whether the home screen is showing
    pub fn is_logged_in(&self) -> bool {
        matches!(self.screen, Screen::Home(_))
    }

    /// Theme handle
    pub fn theme(&self) -> ThemeContext {
        self.provider.context()
    }

    /// Current screen
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The login screen, if showing
    pub fn login_screen_mut(&mut self) -> Option<&mut LoginScreen> {
        match &mut self.screen {
            Screen::Login(screen) => Some(screen),
            Screen::Home(_) => None,
        }
    }

    /// Submit the login form; moves to the home screen on success.
    ///
    /// Returns `None` when the login screen is not showing.
    pub async fn submit_login(&mut self) -> Option<SubmitOutcome> {
        let screen = self.login_screen_mut()?;
        let outcome = screen.submit().await;

        if matches!(outcome, SubmitOutcome::LoggedIn(_)) {
            let username = screen.form().username.clone();
            self.screen = Screen::Home(HomeScreen::new(self.provider.context(), Some(username)));
        }
        Some(outcome)
    }

    /// Forward an action to the home screen
    pub fn handle_home(&mut self, action: HomeAction) -> Result<()> {
        let Screen::Home(home) = &mut self.screen else {
            tracing::debug!(?action, "home action ignored while logged out");
            return Ok(());
        };

        match home.handle(action) {
            HomeOutcome::Handled => Ok(()),
            HomeOutcome::LogoutRequested => self.logout(),
        }
    }

    /// Clear the session and return to the login screen
    pub fn logout(&mut self) -> Result<()> {
        self.auth.logout()?;
        self.screen = Screen::Login(LoginScreen::new(self.provider.context(), self.auth.clone()));
        Ok(())
    }

    /// View of the current screen
    pub fn view(&self) -> ScreenView {
        match &self.screen {
            Screen::Login(screen) => ScreenView::Login(screen.view()),
            Screen::Home(screen) => ScreenView::Home(screen.view()),
        }
    }
}
