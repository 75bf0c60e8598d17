//! Account storage port definition.

use async_trait::async_trait;

use crate::domain::entities::Account;
use crate::domain::errors::AuthError;

/// Port for persisting the portal account used by automatic login.
#[async_trait]
pub trait AccountStoragePort: Send + Sync {
    /// Retrieves the stored account, if any.
    async fn get_account(&self) -> Result<Option<Account>, AuthError>;

    /// Stores the account, replacing any previous one.
    async fn store_account(&self, account: &Account) -> Result<(), AuthError>;

    /// Deletes the stored account.
    async fn delete_account(&self) -> Result<(), AuthError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;

    /// In-memory account storage for testing.
    pub struct MockAccountStorage {
        account: Mutex<Option<Account>>,
    }

    impl MockAccountStorage {
        /// Creates empty storage.
        pub fn new() -> Self {
            Self {
                account: Mutex::new(None),
            }
        }

        /// Creates storage seeded with an account.
        pub fn with_account(account: Account) -> Self {
            Self {
                account: Mutex::new(Some(account)),
            }
        }

        /// Returns whether an account is stored.
        pub fn has_account(&self) -> bool {
            self.account.lock().is_some()
        }
    }

    #[async_trait]
    impl AccountStoragePort for MockAccountStorage {
        async fn get_account(&self) -> Result<Option<Account>, AuthError> {
            Ok(self.account.lock().clone())
        }

        async fn store_account(&self, account: &Account) -> Result<(), AuthError> {
            *self.account.lock() = Some(account.clone());
            Ok(())
        }

        async fn delete_account(&self) -> Result<(), AuthError> {
            *self.account.lock() = None;
            Ok(())
        }
    }
}
