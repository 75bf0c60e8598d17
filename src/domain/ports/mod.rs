mod account_storage_port;
mod auth_port;

pub use account_storage_port::AccountStoragePort;
pub use auth_port::AuthPort;

#[cfg(test)]
pub mod mocks {
    pub use super::account_storage_port::mock::MockAccountStorage;
    pub use super::auth_port::mock::MockAuthProvider;
}
