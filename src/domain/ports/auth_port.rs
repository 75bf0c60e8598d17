//! Authentication port definition.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::errors::AuthError;
use crate::domain::status::LoginStatus;

/// Port for UNESverse authentication operations.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Starts an automatic login attempt using stored credentials.
    ///
    /// Registers the attempt and returns immediately with a
    /// single-subscriber stream of status updates. The stream emits zero
    /// or more `Loading` events followed by exactly one terminal event;
    /// provider failures are delivered through the stream as
    /// [`LoginStatus::Error`], never raised to the caller. Dropping the
    /// receiver cancels interest in the attempt.
    fn auto_login(&self) -> mpsc::UnboundedReceiver<LoginStatus>;

    /// Checks portal API availability.
    async fn health_check(&self) -> Result<(), AuthError>;
}
