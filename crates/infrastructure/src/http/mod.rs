//! HTTP transport backed by `reqwest`
//!
//! Every outgoing request carries a fresh `X-Request-Id` so upstream logs can
//! be correlated with ours.

mod reqwest_transport;

pub use reqwest_transport::{HttpClientConfig, ReqwestTransport, X_REQUEST_ID};
