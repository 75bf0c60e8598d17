//! Entity definitions.

mod access_token;
mod account;

pub use access_token::AccessToken;
pub use account::Account;
