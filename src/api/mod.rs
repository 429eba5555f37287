//! API Module
//!
//! HTTP handlers and routing for the search cache service.
//!
//! # Endpoints
//! - `PUT /cache`, `DELETE /cache` - Store a value, clear the cache
//! - `GET /cache/:key`, `GET /cache/:key/exists` - Read or probe a key
//! - `GET /search?q=`, `PUT /search` - Query-keyed result memoization
//! - `GET /stats` - Cache statistics
//! - `GET /metrics`, `DELETE /metrics` - Handler timings
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
