//! Portal API HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::{Client, StatusCode};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::dto::{ErrorResponse, LoginRequestBody, TokenResponse};
use crate::domain::entities::{AccessToken, Account};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AccountStoragePort, AuthPort};
use crate::domain::status::LoginStatus;

const UNES_API_BASE: &str = "https://unesverse.forcetower.dev/api";
const USER_AGENT: &str = concat!("unesverse/", env!("CARGO_PKG_VERSION"));
const DEFAULT_RETRY_AFTER_MS: u64 = 5000;

/// UNESverse portal authentication client.
///
/// Implements [`AuthPort`] over the portal HTTP API, exchanging the
/// stored account for a fresh access token.
pub struct UnesAuthClient {
    client: Client,
    base_url: String,
    storage: Arc<dyn AccountStoragePort>,
}

impl UnesAuthClient {
    /// Creates new client with the default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(storage: Arc<dyn AccountStoragePort>) -> Result<Self, AuthError> {
        Self::with_base_url(UNES_API_BASE, storage)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        storage: Arc<dyn AccountStoragePort>,
    ) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            storage,
        })
    }

    async fn perform_auto_login(
        client: &Client,
        base_url: &str,
        storage: &dyn AccountStoragePort,
    ) -> Result<AccessToken, AuthError> {
        debug!("loading stored account for automatic login");

        let account = storage.get_account().await?.ok_or(AuthError::NoAccount)?;

        Self::exchange_credentials(client, base_url, &account).await
    }

    async fn exchange_credentials(
        client: &Client,
        base_url: &str,
        account: &Account,
    ) -> Result<AccessToken, AuthError> {
        let url = format!("{base_url}/oauth/token");

        debug!(username = account.username(), "Exchanging credentials for access token");

        let body = LoginRequestBody {
            username: account.username(),
            password: account.password(),
        };

        let response = client.post(&url).json(&body).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach the portal API");
            if e.is_timeout() {
                AuthError::network("request timed out")
            } else if e.is_connect() {
                AuthError::network("failed to connect to the portal")
            } else {
                AuthError::network(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse token response");
            AuthError::unexpected(format!("failed to parse response: {e}"))
        })?;

        let token = AccessToken::new(token_response.access_token, token_response.token_type)
            .ok_or_else(|| AuthError::unexpected("portal returned an empty access token"))?;

        debug!(token = %token, "Access token obtained");

        Ok(match token_response.expires_in {
            Some(seconds) => token.with_expiry(Utc::now() + Duration::seconds(seconds)),
            None => token,
        })
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> AuthError {
        let retry_after_ms = Self::retry_after_ms(response.headers());

        let error_message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        Self::map_error_status(status, &error_message, retry_after_ms)
    }

    /// Reads the `Retry-After` header (delay in seconds).
    fn retry_after_ms(headers: &reqwest::header::HeaderMap) -> Option<u64> {
        headers
            .get(reqwest::header::RETRY_AFTER)?
            .to_str()
            .ok()?
            .parse::<u64>()
            .ok()
            .map(|seconds| seconds * 1000)
    }

    fn map_error_status(
        status: StatusCode,
        error_message: &str,
        retry_after_ms: Option<u64>,
    ) -> AuthError {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AuthError::invalid_credentials(error_message)
            }
            StatusCode::TOO_MANY_REQUESTS => AuthError::RateLimited {
                retry_after_ms: retry_after_ms.unwrap_or(DEFAULT_RETRY_AFTER_MS),
            },
            status if status.is_server_error() => {
                AuthError::network("the portal API is temporarily unavailable")
            }
            _ => AuthError::unexpected(format!("unexpected response: {status} - {error_message}")),
        }
    }
}

#[async_trait]
impl AuthPort for UnesAuthClient {
    fn auto_login(&self) -> mpsc::UnboundedReceiver<LoginStatus> {
        let (tx, rx) = mpsc::unbounded_channel();

        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let storage = Arc::clone(&self.storage);

        tokio::spawn(async move {
            let _ = tx.send(LoginStatus::Loading);

            let status = match Self::perform_auto_login(&client, &base_url, storage.as_ref()).await
            {
                Ok(token) => LoginStatus::Success(token),
                Err(e) => {
                    warn!(error = %e, "Automatic login failed");
                    LoginStatus::failed(&e)
                }
            };

            // Send failures mean the subscriber lost interest; nothing to do.
            let _ = tx.send(status);
        });

        rx
    }

    async fn health_check(&self) -> Result<(), AuthError> {
        let url = format!("{}/health", self.base_url);

        debug!("Performing portal API health check");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                AuthError::network("request timed out")
            } else if e.is_connect() {
                AuthError::network("failed to connect to the portal")
            } else {
                AuthError::network(e.to_string())
            }
        })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::network(format!(
                "portal API returned {}",
                response.status()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockAccountStorage;
    use test_case::test_case;

    #[test_case(StatusCode::BAD_REQUEST)]
    #[test_case(StatusCode::UNAUTHORIZED)]
    #[test_case(StatusCode::FORBIDDEN)]
    fn test_credential_statuses_map_to_invalid_credentials(status: StatusCode) {
        let error = UnesAuthClient::map_error_status(status, "wrong password", None);
        assert!(matches!(error, AuthError::InvalidCredentials { .. }));
        assert!(!error.is_recoverable());
    }

    #[test_case(StatusCode::INTERNAL_SERVER_ERROR)]
    #[test_case(StatusCode::BAD_GATEWAY)]
    #[test_case(StatusCode::SERVICE_UNAVAILABLE)]
    #[test_case(StatusCode::GATEWAY_TIMEOUT)]
    fn test_server_errors_map_to_recoverable_network_errors(status: StatusCode) {
        let error = UnesAuthClient::map_error_status(status, "boom", None);
        assert!(matches!(error, AuthError::NetworkError { .. }));
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_rate_limit_uses_retry_after_header() {
        let error =
            UnesAuthClient::map_error_status(StatusCode::TOO_MANY_REQUESTS, "slow down", Some(2000));
        assert!(matches!(error, AuthError::RateLimited { retry_after_ms: 2000 }));

        let error = UnesAuthClient::map_error_status(StatusCode::TOO_MANY_REQUESTS, "slow down", None);
        assert!(matches!(
            error,
            AuthError::RateLimited {
                retry_after_ms: DEFAULT_RETRY_AFTER_MS,
            }
        ));
    }

    #[test]
    fn test_unhandled_status_maps_to_unexpected() {
        let error = UnesAuthClient::map_error_status(StatusCode::IM_A_TEAPOT, "teapot", None);
        assert!(matches!(error, AuthError::Unexpected { .. }));
    }

    #[test]
    fn test_retry_after_header_parsing() {
        let mut headers = reqwest::header::HeaderMap::new();
        assert_eq!(UnesAuthClient::retry_after_ms(&headers), None);

        headers.insert(reqwest::header::RETRY_AFTER, "2".parse().unwrap());
        assert_eq!(UnesAuthClient::retry_after_ms(&headers), Some(2000));

        // HTTP-date form of the header is not worth a clock comparison here.
        headers.insert(
            reqwest::header::RETRY_AFTER,
            "Wed, 21 Oct 2026 07:28:00 GMT".parse().unwrap(),
        );
        assert_eq!(UnesAuthClient::retry_after_ms(&headers), None);
    }

    #[tokio::test]
    async fn test_auto_login_without_account_emits_loading_then_error() {
        let storage = Arc::new(MockAccountStorage::new());
        let client = UnesAuthClient::new(storage).unwrap();

        let mut stream = client.auto_login();

        assert_eq!(stream.recv().await, Some(LoginStatus::Loading));

        let terminal = stream.recv().await.unwrap();
        assert!(matches!(terminal, LoginStatus::Error { .. }));

        // Stream terminates after the terminal event.
        assert_eq!(stream.recv().await, None);
    }

    #[tokio::test]
    async fn test_unreachable_portal_surfaces_network_error() {
        let account = Account::new("student123", "hunter2").unwrap();
        let storage = Arc::new(MockAccountStorage::with_account(account));
        let client = UnesAuthClient::with_base_url("http://127.0.0.1:1", storage).unwrap();

        let mut stream = client.auto_login();

        assert_eq!(stream.recv().await, Some(LoginStatus::Loading));

        let terminal = stream.recv().await.unwrap();
        assert!(matches!(
            terminal,
            LoginStatus::Error {
                recoverable: true,
                ..
            }
        ));
    }
}
