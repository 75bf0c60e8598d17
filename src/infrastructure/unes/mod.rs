//! UNESverse portal API client.

mod client;
mod dto;

pub use client::UnesAuthClient;
