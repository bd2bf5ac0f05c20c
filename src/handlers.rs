use crate::{
    AppState,
    auth::AuthUser,
    error::{ApiError, require_found},
    models::{
        CreateShowBody, ShowDetailResponse, ShowEnvelope, ShowListResponse, UpdateShowBody,
    },
    ownership::require_ownership,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

// Each handler is one pass through the request pipeline:
// authenticate (extractor) -> fetch -> classify absence -> authorize -> mutate/read -> respond.
// Failure at any stage short-circuits via `?` straight to the ApiError terminal.

/// list_shows
///
/// [Public Route] Lists every show, no authentication required.
#[utoipa::path(
    get,
    path = "/shows",
    responses((status = 200, description = "All shows", body = ShowListResponse))
)]
pub async fn list_shows(State(state): State<AppState>) -> Result<Json<ShowListResponse>, ApiError> {
    let shows = state.repo.list_shows().await?;
    Ok(Json(ShowListResponse { shows }))
}

/// get_show
///
/// [Authenticated Route] Retrieves a single show joined with its reviews.
///
/// The reviews are fetched first, then the show lookup is classified: an
/// unknown id yields 404 even if stray reviews reference it.
#[utoipa::path(
    get,
    path = "/shows/{id}",
    params(("id" = Uuid, Path, description = "Show ID")),
    responses(
        (status = 200, description = "Show with its reviews", body = ShowDetailResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_show(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShowDetailResponse>, ApiError> {
    let reviews = state.repo.reviews_for_show(id).await?;
    let show = require_found(state.repo.find_show(id).await?)?;
    Ok(Json(ShowDetailResponse { show, reviews }))
}

/// create_show
///
/// [Authenticated Route] Handles the submission of a new show.
///
/// *Ownership assignment*: the owner is taken from the authenticated
/// principal, never from the payload — `NewShowFields` has no owner member, so
/// an attacker-supplied owner key is dropped before this handler runs.
#[utoipa::path(
    post,
    path = "/shows",
    request_body = CreateShowBody,
    responses(
        (status = 201, description = "Created", body = ShowEnvelope),
        (status = 422, description = "Validation failure")
    )
)]
pub async fn create_show(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<CreateShowBody>,
) -> Result<(StatusCode, Json<ShowEnvelope>), ApiError> {
    let show = state.repo.create_show(body.show, auth.id).await?;
    Ok((StatusCode::CREATED, Json(ShowEnvelope { show })))
}

/// update_show
///
/// [Authenticated Route] Applies a partial update to a show the principal owns.
///
/// *Pipeline order matters here*: absence is classified before ownership so a
/// probing non-owner sees 404 rather than learning via 403 that the resource
/// exists, and the ownership guard runs before the store write so an
/// unauthorized mutation never reaches the store. Blank fields are stripped
/// first and cannot clear required columns.
#[utoipa::path(
    patch,
    path = "/shows/{id}",
    params(("id" = Uuid, Path, description = "Show ID")),
    request_body = UpdateShowBody,
    responses(
        (status = 204, description = "Updated"),
        (status = 403, description = "Not Owner"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation failure")
    )
)]
pub async fn update_show(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateShowBody>,
) -> Result<StatusCode, ApiError> {
    let fields = body.show.without_blanks();

    let show = require_found(state.repo.find_show(id).await?)?;
    require_ownership(&auth, &show)?;

    state.repo.update_show(id, fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// delete_show
///
/// [Authenticated Route] Deletes a show the principal owns.
///
/// Deletion is unconditional once ownership is confirmed; associated reviews
/// are left in place.
#[utoipa::path(
    delete,
    path = "/shows/{id}",
    params(("id" = Uuid, Path, description = "Show ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Not Owner"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_show(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let show = require_found(state.repo.find_show(id).await?)?;
    require_ownership(&auth, &show)?;

    state.repo.delete_show(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
