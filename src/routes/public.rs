use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any client
/// (anonymous or logged-in). The show listing is deliberately open: reading the
/// catalogue requires no principal, while everything id-addressed or mutating
/// lives behind the authenticated router.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load balancer checks.
        // Returns "ok" immediately to verify the service is running and responsive.
        .route("/health", get(|| async { "ok" }))
        // GET /shows
        // Lists every show. No auth, no filtering; responds { "shows": [...] }.
        .route("/shows", get(handlers::list_shows))
}
