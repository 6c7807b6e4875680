//! HTTP Handlers
//!
//! Route handlers for the REST API.

pub mod shoppers;

/// Liveness probe for deploy tooling and load balancers
pub async fn health() -> &'static str {
    "ok"
}
