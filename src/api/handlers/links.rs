//! Handlers for the link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, DeleteLinkResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code::is_valid_code;
use crate::utils::target_url::validate_target_url;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links` with body `{ "target_url": "...", "code": "..."? }`
///
/// # Responses
///
/// - `201 Created` with the new record
/// - `400 Bad Request` for an invalid URL or code format
/// - `409 Conflict` when the code (explicit or, after all retries,
///   generated) already exists
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    validate_target_url(&payload.target_url).map_err(|e| {
        AppError::bad_request(
            "Invalid target_url, use an absolute http(s) URL",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let link = state
        .registry
        .create(&payload.target_url, payload.code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.registry.list().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns the stats record for one short code.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Responses
///
/// - `200 OK` with the record
/// - `400 Bad Request` for a malformed code
/// - `404 Not Found` for an unknown code
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::bad_request(
            "Invalid code format",
            json!({ "code": code }),
        ));
    }

    let link = state.registry.get(&code).await?;

    Ok(Json(link.into()))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Responses
///
/// - `200 OK` with `{ "ok": true }`
/// - `400 Bad Request` for a malformed code
/// - `404 Not Found` for an unknown code
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::bad_request(
            "Invalid code format",
            json!({ "code": code }),
        ));
    }

    state.registry.delete(&code).await?;

    Ok(Json(DeleteLinkResponse { ok: true }))
}
