//! Keyring-based account storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::Account;
use crate::domain::errors::AuthError;
use crate::domain::ports::AccountStoragePort;

const KEYRING_SERVICE: &str = "unesverse";
const KEYRING_USER: &str = "account";

/// System keyring account storage adapter.
///
/// The account is serialized to JSON and stored as a single secret.
pub struct KeyringAccountStorage {
    service: String,
    user: String,
}

impl KeyringAccountStorage {
    /// Creates new storage with default names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
            user: KEYRING_USER.to_string(),
        }
    }

    /// Creates storage with custom names.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, AuthError> {
        Entry::new(&self.service, &self.user)
            .map_err(|e| AuthError::retrieval_failed(format!("failed to access keyring: {e}")))
    }
}

impl Default for KeyringAccountStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStoragePort for KeyringAccountStorage {
    async fn get_account(&self) -> Result<Option<Account>, AuthError> {
        debug!(service = %self.service, "Retrieving account from keyring");

        let entry = self.entry()?;

        match entry.get_password() {
            Ok(secret) => {
                debug!("Account found in keyring");
                serde_json::from_str(&secret)
                    .map(Some)
                    .map_err(|e| AuthError::retrieval_failed(format!("corrupt account record: {e}")))
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No account stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve account from keyring");
                Err(AuthError::retrieval_failed(e.to_string()))
            }
        }
    }

    async fn store_account(&self, account: &Account) -> Result<(), AuthError> {
        debug!(service = %self.service, "Storing account in keyring");

        let entry = self.entry()?;

        let secret = serde_json::to_string(account)
            .map_err(|e| AuthError::storage_failed(e.to_string()))?;

        entry.set_password(&secret).map_err(|e| {
            warn!(error = %e, "Failed to store account in keyring");
            AuthError::storage_failed(e.to_string())
        })?;

        debug!("Account stored successfully");
        Ok(())
    }

    async fn delete_account(&self) -> Result<(), AuthError> {
        debug!(service = %self.service, "Deleting account from keyring");

        let entry = self.entry()?;

        match entry.delete_credential() {
            Ok(()) => {
                debug!("Account deleted from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No account to delete");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete account from keyring");
                Err(AuthError::storage_failed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires system keyring"]
    async fn test_store_and_retrieve_account() {
        let storage = KeyringAccountStorage::with_names("unesverse-test", "test-account");
        let account = Account::new("student123", "hunter2").unwrap();

        storage.store_account(&account).await.unwrap();

        let retrieved = storage.get_account().await.unwrap();
        assert_eq!(retrieved, Some(account));

        storage.delete_account().await.unwrap();
        assert_eq!(storage.get_account().await.unwrap(), None);
    }
}
