use crate::{auth::AuthUser, error::ApiError, models::Show};

/// require_ownership
///
/// The ownership guard: a pure, synchronous predicate comparing the stored
/// owner against the authenticated principal. Returns `Forbidden` on any
/// mismatch and lets the caller decide control flow.
///
/// Callers must invoke this strictly after the not-found classification
/// (`require_found`) and strictly before any mutating repository call, so an
/// unauthorized mutation attempt never reaches the store. If this returns
/// `Ok(())`, the principal *is* the resource's owner, not merely
/// authenticated.
pub fn require_ownership(principal: &AuthUser, show: &Show) -> Result<(), ApiError> {
    if show.owner == principal.id {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}
