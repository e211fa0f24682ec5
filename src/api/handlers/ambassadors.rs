//! Ambassador handlers, also mounted under `/leaders`.
//!
//! The product renamed ambassadors to leaders without migrating data, so
//! both prefixes serve the same collection with identical bodies.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::{Ambassador, AmbassadorsEnvelope};
use crate::error::{ApiError, ErrorResponse};

async fn envelope(state: &AppState) -> Result<Json<AmbassadorsEnvelope>, ApiError> {
    let ambassadors = state.content.ambassadors().await;
    if ambassadors.is_empty() {
        return Err(ApiError::NotFound("Ambassadors not found".to_string()));
    }
    Ok(Json(AmbassadorsEnvelope { ambassadors }))
}

async fn by_slug(state: &AppState, slug: &str) -> Result<Json<Ambassador>, ApiError> {
    state
        .content
        .ambassador(slug)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Ambassador not found".to_string()))
}

/// `GET /ambassadors` — All ambassador profiles.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no profiles are available.
#[utoipa::path(
    get,
    path = "/api/ambassadors",
    tag = "Ambassadors",
    summary = "List ambassadors",
    responses(
        (status = 200, description = "Ambassador list", body = AmbassadorsEnvelope),
        (status = 404, description = "No ambassadors available", body = ErrorResponse),
    )
)]
pub async fn list_ambassadors(
    State(state): State<AppState>,
) -> Result<Json<AmbassadorsEnvelope>, ApiError> {
    envelope(&state).await
}

/// `GET /ambassadors/{slug}` — One ambassador profile.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no profile has this slug.
#[utoipa::path(
    get,
    path = "/api/ambassadors/{slug}",
    tag = "Ambassadors",
    summary = "Get ambassador",
    params(
        ("slug" = String, Path, description = "Ambassador slug"),
    ),
    responses(
        (status = 200, description = "Ambassador profile", body = Ambassador),
        (status = 404, description = "Ambassador not found", body = ErrorResponse),
    )
)]
pub async fn get_ambassador(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Ambassador>, ApiError> {
    by_slug(&state, &slug).await
}

/// `GET /leaders` — Alias of `GET /ambassadors`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no profiles are available.
#[utoipa::path(
    get,
    path = "/api/leaders",
    tag = "Ambassadors",
    summary = "List leaders",
    description = "Alias of `/api/ambassadors`; the body keeps the `ambassadors` key.",
    responses(
        (status = 200, description = "Leader list", body = AmbassadorsEnvelope),
        (status = 404, description = "No leaders available", body = ErrorResponse),
    )
)]
pub async fn list_leaders(
    State(state): State<AppState>,
) -> Result<Json<AmbassadorsEnvelope>, ApiError> {
    envelope(&state).await
}

/// `GET /leaders/{slug}` — Alias of `GET /ambassadors/{slug}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no profile has this slug.
#[utoipa::path(
    get,
    path = "/api/leaders/{slug}",
    tag = "Ambassadors",
    summary = "Get leader",
    params(
        ("slug" = String, Path, description = "Leader slug"),
    ),
    responses(
        (status = 200, description = "Leader profile", body = Ambassador),
        (status = 404, description = "Leader not found", body = ErrorResponse),
    )
)]
pub async fn get_leader(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Ambassador>, ApiError> {
    by_slug(&state, &slug).await
}

/// Ambassador and leader routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ambassadors", get(list_ambassadors))
        .route("/ambassadors/{slug}", get(get_ambassador))
        .route("/leaders", get(list_leaders))
        .route("/leaders/{slug}", get(get_leader))
}
