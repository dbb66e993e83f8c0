//! User fetcher with permissive and validating contracts.

use crate::fetcher::config::{FetchMode, FetcherConfig};
use crate::fetcher::error::FetchError;
use crate::fetcher::record::UserRecord;
use crate::http::{FetchRequest, FetchResponse, StatusCode};
use crate::transport::{HyperTransport, Transport};
use tracing::{debug, warn};

/// Fields a record must carry to pass validation.
pub const REQUIRED_FIELDS: &[&str] = &["id", "name"];

/// Fetches user records from `GET {base_url}{users_path}/{id}`.
///
/// Every call is independent: one request, one response, and the response
/// body is dropped before the call returns. A single fetcher can be shared
/// between tasks.
#[derive(Debug, Clone)]
pub struct UserFetcher<T = HyperTransport> {
    transport: T,
    config: FetcherConfig,
}

impl<T: Transport> UserFetcher<T> {
    /// Create a new fetcher.
    pub fn new(transport: T, config: FetcherConfig) -> Self {
        Self { transport, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch a user using the configured [`FetchMode`].
    pub async fn fetch(&self, user_id: &str) -> Result<UserRecord, FetchError> {
        match self.config.mode {
            FetchMode::Permissive => self.fetch_permissive(user_id).await,
            FetchMode::Validating => self.fetch_validated(user_id).await,
        }
    }

    /// Fetch a user without checking the ID, the status code or the record.
    ///
    /// Any body that decodes to a JSON object is returned, whatever the
    /// status. Only transport, read and decode failures are reported.
    pub async fn fetch_permissive(&self, user_id: &str) -> Result<UserRecord, FetchError> {
        let response = self.send(user_id).await?;
        self.decode(response).await
    }

    /// Fetch a user, rejecting empty IDs, non-200 responses and records
    /// without `id` and `name`.
    ///
    /// The ID is placed in the path verbatim, so reserved characters are
    /// not escaped: `"1?admin=true"` requests `/api/users/1?admin=true`.
    /// Callers that take IDs from untrusted input must check them first.
    pub async fn fetch_validated(&self, user_id: &str) -> Result<UserRecord, FetchError> {
        if user_id.is_empty() {
            return Err(FetchError::MissingInput);
        }

        let response = self.send(user_id).await?;

        if response.status != StatusCode::OK {
            warn!("Unexpected status {} for user '{}'", response.status, user_id);
            return Err(FetchError::UnexpectedStatus(response.status));
        }

        let record = self.decode(response).await?;

        let missing = record.missing_fields(REQUIRED_FIELDS);
        if !missing.is_empty() {
            warn!(
                "User '{}' is missing required fields: {}",
                user_id,
                missing.join(", ")
            );
            return Err(FetchError::InvalidShape(record));
        }

        Ok(record)
    }

    async fn send(&self, user_id: &str) -> Result<FetchResponse, FetchError> {
        let url = self.config.user_url(user_id);
        let request = FetchRequest::get(&url).header("Accept", "application/json");

        let response = self.transport.send(request).await?;
        debug!("GET {} -> {}", url, response.status);
        Ok(response)
    }

    async fn decode(&self, response: FetchResponse) -> Result<UserRecord, FetchError> {
        let body = response.bytes(self.config.max_body_size).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
