use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Authenticated Router Module
///
/// Defines the routes available only to requests carrying a valid bearer
/// credential. Every handler here relies on the `AuthUser` extractor
/// middleware being present on the router layer above this module, which
/// guarantees a resolved principal before any handler body runs.
///
/// The principal is then used for ownership: `create_show` assigns it as the
/// new show's owner, and `update_show`/`delete_show` enforce the owner-only
/// check (after the not-found classification, so 404 and 403 stay distinct).
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // POST /shows
        // Submits a new show. The authenticated principal becomes its immutable owner.
        .route("/shows", post(handlers::create_show))
        // GET/PATCH/DELETE /shows/{id}
        // Detail view (show + reviews) for any authenticated principal;
        // partial update and delete restricted to the owner.
        .route(
            "/shows/{id}",
            get(handlers::get_show)
                .patch(handlers::update_show)
                .delete(handlers::delete_show),
        )
}
