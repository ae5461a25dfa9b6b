//! Core application logic for Solar Shell
//!
//! This crate contains the authentication gate: credential validation, the
//! swappable [`auth::Authenticator`] capability and the persisted session
//! token.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod credentials;
pub mod session;

pub use auth::{AuthError, AuthService, Authenticator, LoginError, MockAuthenticator};
pub use credentials::{
    validate_credentials, CredentialErrors, Credentials, PasswordError, UsernameError,
};
pub use session::{AuthToken, KvTokenStore, TokenStore, TokenStoreError, AUTH_TOKEN_KEY};
