//! Persisted authentication token
//!
//! A logged-in session is nothing more than an opaque token stored in a
//! single key-value slot. Its presence at startup means "logged in"; there
//! is no expiry or server-side verification.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::{KvError, KvStore};
use thiserror::Error;

/// Key under which the token is persisted
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Opaque authentication token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token store error types
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Underlying key-value store failed
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Store is unavailable (e.g. not yet initialized)
    #[error("Token store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for token store operations
pub type Result<T> = std::result::Result<T, TokenStoreError>;

/// Persistence for the single authentication token slot
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    fn load(&self) -> Result<Option<AuthToken>>;

    /// Replace the stored token
    fn save(&self, token: &AuthToken) -> Result<()>;

    /// Remove the stored token; returns whether one was present
    fn clear(&self) -> Result<bool>;
}

/// [`TokenStore`] backed by the shell's key-value store
#[derive(Debug, Clone)]
pub struct KvTokenStore {
    kv: Arc<KvStore>,
}

impl KvTokenStore {
    /// Create a token store over a shared key-value store
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }
}

impl TokenStore for KvTokenStore {
    fn load(&self) -> Result<Option<AuthToken>> {
        Ok(self.kv.get::<AuthToken>(AUTH_TOKEN_KEY)?)
    }

    fn save(&self, token: &AuthToken) -> Result<()> {
        self.kv.set(AUTH_TOKEN_KEY, token)?;
        self.kv.flush()?;
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        let removed = self.kv.remove(AUTH_TOKEN_KEY)?;
        self.kv.flush()?;
        Ok(removed)
    }
}
