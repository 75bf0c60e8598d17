//! Stored portal account credentials.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// UNES portal account used for automatic login.
///
/// The password is wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Account {
    #[zeroize(skip)]
    username: String,
    password: String,
}

impl Account {
    /// Creates an account, rejecting empty usernames or passwords.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Option<Self> {
        let username = username.into().trim().to_string();
        let password = password.into();

        if username.is_empty() || password.is_empty() {
            return None;
        }

        Some(Self { username, password })
    }

    /// Returns the portal username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the portal password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_account_creation() {
        let account = Account::new("student123", "hunter2");
        assert!(account.is_some());

        let account = account.unwrap();
        assert_eq!(account.username(), "student123");
        assert_eq!(account.password(), "hunter2");
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert!(Account::new("", "hunter2").is_none());
        assert!(Account::new("student123", "").is_none());
        assert!(Account::new("   ", "hunter2").is_none());
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let account = Account::new("student123", "hunter2").unwrap();
        let debug_output = format!("{account:?}");

        assert!(!debug_output.contains("hunter2"));
    }
}
