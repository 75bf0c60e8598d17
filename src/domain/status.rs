//! Login status events produced during an automatic login attempt.

use crate::domain::entities::AccessToken;
use crate::domain::errors::AuthError;

/// A single status update emitted by an authentication provider.
///
/// An attempt emits zero or more `Loading` events followed by exactly one
/// terminal event (`Error` or `Success`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStatus {
    /// Attempt is underway, no outcome yet.
    Loading,
    /// Attempt failed.
    Error {
        /// Human-readable failure description.
        message: String,
        /// Whether retrying the attempt could succeed.
        recoverable: bool,
    },
    /// Attempt succeeded with a fresh access token.
    Success(AccessToken),
}

impl LoginStatus {
    /// Creates an error status from a domain error.
    #[must_use]
    pub fn failed(error: &AuthError) -> Self {
        Self::Error {
            message: error.to_string(),
            recoverable: error.is_recoverable(),
        }
    }

    /// Returns whether this event ends the attempt.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Error { .. } | Self::Success(_))
    }

    /// Returns whether the attempt is still underway.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the obtained token, if this is a success event.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        match self {
            Self::Success(token) => Some(token),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_classification() {
        assert!(!LoginStatus::Loading.is_terminal());
        assert!(
            LoginStatus::Error {
                message: "boom".to_string(),
                recoverable: true,
            }
            .is_terminal()
        );
        assert!(LoginStatus::Success(AccessToken::new_unchecked("tok")).is_terminal());
    }

    #[test]
    fn test_failed_carries_recoverability() {
        let status = LoginStatus::failed(&AuthError::network("connection refused"));
        assert!(matches!(
            status,
            LoginStatus::Error {
                recoverable: true,
                ..
            }
        ));
    }

    #[test]
    fn test_token_accessor() {
        let token = AccessToken::new_unchecked("tok");
        let status = LoginStatus::Success(token.clone());

        assert_eq!(status.token(), Some(&token));
        assert_eq!(LoginStatus::Loading.token(), None);
    }
}
