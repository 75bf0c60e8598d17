//! Application layer with services orchestrating the domain.

/// Service implementations.
pub mod services;

pub use services::{LoginAttempt, LoginCoordinator};
