//! `HttpTransport` implementation over `reqwest::Client`

use std::time::Duration;

use application::{
    error::FetchError,
    ports::{HttpResponse, HttpTransport},
};
use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, instrument, warn};
use url::Url;
use uuid::Uuid;

/// Header name for request correlation ID
pub const X_REQUEST_ID: &str = "x-request-id";

/// Client settings for one upstream
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout, body included
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            user_agent: format!("SwissInfo/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Performs single GET round trips; never retries
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client cannot be built.
    pub fn new(config: &HttpClientConfig) -> Result<Self, reqwest::Error> {
        let inner = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { inner })
    }
}

/// Map a reqwest failure onto the fetch error taxonomy
fn classify(error: &reqwest::Error) -> FetchError {
    if error.is_builder() {
        FetchError::InvalidUrl(error.to_string())
    } else if error.is_decode() {
        FetchError::InvalidResponse(error.to_string())
    } else {
        // connect, timeout, request and body errors
        FetchError::TransientTransport(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self), fields(url = %url, request_id = tracing::field::Empty))]
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let request_id = Uuid::new_v4();
        tracing::Span::current().record("request_id", tracing::field::display(request_id));

        let response = self
            .inner
            .get(url.clone())
            .header(X_REQUEST_ID, request_id.to_string())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Request failed before a response arrived");
                classify(&e)
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            warn!(status, error = %e, "Response body interrupted");
            classify(&e)
        })?;

        debug!(status, bytes = body.len(), "Received response");
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_crate_version_in_user_agent() {
        let config = HttpClientConfig::default();
        assert!(config.user_agent.starts_with("SwissInfo/"));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = HttpClientConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(2))
            .with_user_agent("test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn transport_builds_from_config() {
        assert!(ReqwestTransport::new(&HttpClientConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn refused_connection_is_transient() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new(
            &HttpClientConfig::default().with_connect_timeout(Duration::from_secs(1)),
        )
        .unwrap();
        let url = Url::parse(&format!("http://{addr}/news")).unwrap();

        let err = transport.get(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::TransientTransport(_)));
        assert!(err.is_retryable());
    }
}
