//! Axum-based HTTP server for img-alt-api.
//!
//! This module sets up the router on `/` (URL lookups via GET, uploads via
//! POST), the JSON not-found fallback, CORS, request tracing, request IDs and
//! the optional Prometheus endpoint.
//!
//! # Components
//!
//! - `handlers`: Implementation of the endpoints.
//! - `middleware`: CORS, request ID and metrics layers.
//! - `routes`: The router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{DescribeQuery, DescriptionResponse, IdentityResponse};
pub use routes::{create_router, AppState};
