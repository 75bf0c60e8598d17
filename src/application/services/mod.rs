//! Service implementations.

mod login_coordinator;

pub use login_coordinator::{LoginAttempt, LoginCoordinator};
