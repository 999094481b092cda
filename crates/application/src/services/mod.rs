//! Application services - Use case implementations

mod fallback_policy;
mod fetch_client;
mod resource_gateway;

pub use fallback_policy::FallbackPolicy;
pub use fetch_client::FetchClient;
pub use resource_gateway::{ResourceGateway, primary_query};
