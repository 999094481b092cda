//! Fetch client
//!
//! One logical GET against a fixed origin: URL building, bounded retry of
//! transport failures and typed JSON decoding.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::{
    error::FetchError,
    ports::HttpTransport,
    retry::{RetryPolicy, with_retry},
};

/// HTTP client for one API origin
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    retry: RetryPolicy,
}

impl fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            retry,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Base URL + path + query parameters sorted by name and form-encoded
    pub fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, FetchError> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url =
            Url::parse(&joined).map_err(|e| FetchError::InvalidUrl(format!("{joined}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        if !query.is_empty() {
            let mut sorted: Vec<&(&str, String)> = query.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            url.query_pairs_mut()
                .extend_pairs(sorted.into_iter().map(|(name, value)| (*name, value.as_str())));
        }

        Ok(url)
    }

    /// GET `path` and decode the body as `T`
    ///
    /// Transport failures are retried within the policy's budget. Non-2xx
    /// statuses and undecodable bodies are returned immediately.
    #[instrument(skip(self, query), fields(base = %self.base_url))]
    pub async fn fetch<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, query)?;
        debug!(url = %url, "Fetching");

        let outcome = with_retry(&self.retry, || self.transport.get(&url)).await;
        let attempts = outcome.attempts;
        let elapsed_ms = u64::try_from(outcome.total_duration.as_millis()).unwrap_or(u64::MAX);
        let response = outcome.into_result()?;

        if !response.is_success() {
            warn!(url = %url, status = response.status, attempts, elapsed_ms, "Request returned error status");
            return Err(FetchError::ServerError(response.status));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            error!(url = %url, error = %e, "Response does not match the expected schema");
            FetchError::Decoding(e.to_string())
        })
    }
}
