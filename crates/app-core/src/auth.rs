//! Authentication service for Solar Shell
//!
//! This module provides the login, session restore and logout flows. The
//! actual credential check sits behind the [`Authenticator`] capability so a
//! real backend can replace [`MockAuthenticator`] without touching the UI.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::credentials::{validate_credentials, CredentialErrors, Credentials};
use crate::session::{AuthToken, TokenStore, TokenStoreError};

/// Default simulated network latency of [`MockAuthenticator`]
pub const DEFAULT_MOCK_LATENCY: Duration = Duration::from_millis(1500);

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials were rejected by the authenticator
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token could not be persisted
    #[error("Token storage error: {0}")]
    Storage(#[from] TokenStoreError),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors from [`AuthService::login`]
#[derive(Debug, Error)]
pub enum LoginError {
    /// Input failed local validation; nothing was sent or stored
    #[error(transparent)]
    Validation(#[from] CredentialErrors),

    /// Validation passed but authentication failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Capability that exchanges credentials for a token
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Authenticate and return a fresh token
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken>;
}

/// Offline authenticator that accepts any validated credentials
///
/// After a simulated network delay it issues `token_<username>_<unix ms>`.
/// A rejecting instance fails every attempt instead, which exercises the
/// failure path of the login screen.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    latency: Duration,
    reject: bool,
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self { latency: DEFAULT_MOCK_LATENCY, reject: false }
    }
}

impl MockAuthenticator {
    /// Create an accepting authenticator with the given latency
    pub fn new(latency: Duration) -> Self {
        Self { latency, reject: false }
    }

    /// Create an authenticator that rejects every attempt after the delay
    pub fn rejecting(latency: Duration) -> Self {
        Self { latency, reject: true }
    }

    /// Simulated latency
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken> {
        tokio::time::sleep(self.latency).await;

        if self.reject {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthToken::new(format!(
            "token_{}_{}",
            credentials.username,
            Utc::now().timestamp_millis()
        )))
    }
}

/// Authentication service
///
/// Ties credential validation, the [`Authenticator`] and the [`TokenStore`]
/// together.
///
/// # Example
///
/// ```rust
/// use app_core::auth::{AuthService, MockAuthenticator};
/// use app_core::session::KvTokenStore;
/// use std::sync::Arc;
/// use std::time::Duration;
/// use storage::KvStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let kv = Arc::new(KvStore::in_memory()?);
/// let auth = AuthService::new(
///     Arc::new(MockAuthenticator::new(Duration::ZERO)),
///     Arc::new(KvTokenStore::new(kv)),
/// );
///
/// let token = auth.login("alice", "123456").await?;
/// assert!(token.as_str().starts_with("token_alice_"));
/// assert_eq!(auth.restore_session(), Some(token));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AuthService {
    authenticator: Arc<dyn Authenticator>,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(authenticator: Arc<dyn Authenticator>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { authenticator, tokens }
    }

    /// Login with credentials
    ///
    /// # Errors
    ///
    /// - `LoginError::Validation` - a field failed validation; the
    ///   authenticator was not called and no token was written
    /// - `LoginError::Auth` - the authenticator rejected the attempt or the
    ///   token could not be stored
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> std::result::Result<AuthToken, LoginError> {
        let credentials = validate_credentials(username, password)?;

        let token = match self.authenticator.authenticate(&credentials).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(username = %credentials.username, error = %e, "login rejected");
                return Err(e.into());
            }
        };

        self.tokens.save(&token).map_err(AuthError::from)?;
        tracing::info!(username = %credentials.username, "logged in");

        Ok(token)
    }

    /// Check for a previously persisted session.
    ///
    /// Read failures and empty tokens both count as logged out.
    pub fn restore_session(&self) -> Option<AuthToken> {
        match self.tokens.load() {
            Ok(Some(token)) if !token.is_empty() => {
                tracing::info!("restored persisted session");
                Some(token)
            }
            Ok(Some(_)) => {
                tracing::warn!("ignoring empty persisted token");
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted token");
                None
            }
        }
    }

    /// Forget the persisted session
    pub fn logout(&self) -> Result<()> {
        let removed = self.tokens.clear()?;
        tracing::info!(had_session = removed, "logged out");
        Ok(())
    }
}
