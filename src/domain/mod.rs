//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// One-shot notification events.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Login status definitions.
pub mod status;

pub use entities::{AccessToken, Account};
pub use errors::AuthError;
pub use notification::{LoginMessage, NotificationEvent};
pub use ports::{AccountStoragePort, AuthPort};
pub use status::LoginStatus;
