//! Application layer - Use cases and orchestration
//!
//! Contains the fetch-and-cache use cases, the retry policy and the port
//! definitions implemented by the infrastructure layer.

pub mod error;
pub mod ports;
pub mod retry;
pub mod services;

pub use error::{CacheError, FetchError, GatewayError};
pub use ports::*;
pub use retry::{RetryPolicy, RetryResult, Retryable, with_retry};
pub use services::*;
