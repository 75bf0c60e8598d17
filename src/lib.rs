//! Unesverse - A client for the UNES university portal companion service.
//!
//! This crate provides the login coordination core of a UNES portal client
//! with clean architecture, implementing automatic login, credential
//! storage, and observable login state for a consuming UI layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services that orchestrate the domain.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "unesverse";
