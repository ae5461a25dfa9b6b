//! Login credential validation
//!
//! Validation runs before any authenticator is contacted. Both fields are
//! checked on every submit so the login form can show all problems at once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Username and password that passed validation
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account username (non-empty, no whitespace)
    pub username: String,
    /// Account password (at least [`MIN_PASSWORD_LEN`] characters)
    pub password: String,
}

// Keep passwords out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Reasons a username is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum UsernameError {
    /// Username was empty
    #[error("Username is required")]
    Empty,
    /// Username contained spaces or other whitespace
    #[error("Username must not contain spaces")]
    ContainsWhitespace,
}

/// Reasons a password is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PasswordError {
    /// Password shorter than [`MIN_PASSWORD_LEN`]
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    TooShort,
}

/// Per-field validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("invalid credentials (username: {username:?}, password: {password:?})")]
pub struct CredentialErrors {
    /// Username problem, if any
    pub username: Option<UsernameError>,
    /// Password problem, if any
    pub password: Option<PasswordError>,
}

impl CredentialErrors {
    /// Whether no field failed
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Check a username on its own
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    if username.is_empty() {
        return Err(UsernameError::Empty);
    }
    if username.chars().any(char::is_whitespace) {
        return Err(UsernameError::ContainsWhitespace);
    }
    Ok(())
}

/// Check a password on its own
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

/// Validate both fields, collecting every failure
pub fn validate_credentials(
    username: &str,
    password: &str,
) -> Result<Credentials, CredentialErrors> {
    let errors = CredentialErrors {
        username: validate_username(username).err(),
        password: validate_password(password).err(),
    };

    if errors.is_empty() {
        Ok(Credentials { username: username.to_string(), password: password.to_string() })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username() {
        let errors = validate_credentials("", "anything").unwrap_err();
        assert_eq!(errors.username, Some(UsernameError::Empty));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn test_username_with_space() {
        let errors = validate_credentials("ab cd", "123456").unwrap_err();
        assert_eq!(errors.username, Some(UsernameError::ContainsWhitespace));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn test_username_with_tab() {
        assert_eq!(validate_username("ab\tcd"), Err(UsernameError::ContainsWhitespace));
    }

    #[test]
    fn test_short_password() {
        let errors = validate_credentials("alice", "12345").unwrap_err();
        assert_eq!(errors.username, None);
        assert_eq!(errors.password, Some(PasswordError::TooShort));
    }

    #[test]
    fn test_both_fields_reported() {
        let errors = validate_credentials("", "").unwrap_err();
        assert_eq!(errors.username, Some(UsernameError::Empty));
        assert_eq!(errors.password, Some(PasswordError::TooShort));
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert!(validate_password("ñññññ").is_err());
        assert!(validate_password("ññññññ").is_ok());
    }

    #[test]
    fn test_valid_credentials() {
        let creds = validate_credentials("alice", "123456").unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "123456");
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = validate_credentials("alice", "hunter22").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter22"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(UsernameError::Empty.to_string(), "Username is required");
        assert_eq!(
            PasswordError::TooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }
}
