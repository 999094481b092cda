//! HTTP transport port
//!
//! A single GET round trip. Retry, status handling and decoding live in the
//! fetch client so they can be exercised with scripted transports.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use url::Url;

use crate::error::FetchError;

/// Raw HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Port for performing one HTTP GET
///
/// Implementations map connection failures, timeouts and interrupted bodies
/// to [`FetchError::TransientTransport`] and return any received status as
/// an `Ok` response.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}
