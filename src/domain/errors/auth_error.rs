//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("credentials rejected by the portal: {message}")]
    InvalidCredentials { message: String },

    #[error("no portal account is stored for automatic login")]
    NoAccount,

    #[error("failed to retrieve stored account: {message}")]
    AccountRetrievalFailed { message: String },

    #[error("failed to store account: {message}")]
    AccountStorageFailed { message: String },

    #[error("network error during authentication: {message}")]
    NetworkError { message: String },

    #[error("rate limited by the portal, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("unexpected authentication error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates invalid credentials error.
    #[must_use]
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates retrieval failed error.
    #[must_use]
    pub fn retrieval_failed(message: impl Into<String>) -> Self {
        Self::AccountRetrievalFailed {
            message: message.into(),
        }
    }

    /// Creates storage failed error.
    #[must_use]
    pub fn storage_failed(message: impl Into<String>) -> Self {
        Self::AccountStorageFailed {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether retrying the attempt as-is could succeed.
    ///
    /// `NoAccount` is not recoverable: a retry fails identically until
    /// the user stores credentials.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::RateLimited { .. })
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::RateLimited { .. })
    }
}
