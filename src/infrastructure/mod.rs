//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Account storage adapters.
pub mod storage;
/// UNESverse portal API client.
pub mod unes;

pub use config::{AppConfig, LogLevel};
pub use storage::KeyringAccountStorage;
pub use unes::UnesAuthClient;
