//! Handler for the short URL redirect hot path.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code::is_valid_code;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution is a single storage round trip that atomically increments
/// `total_clicks` and stamps `last_clicked` as a side effect. On success the
/// response is `302 Found` with the target in `Location`.
///
/// A code that doesn't match the short code pattern is answered with 404
/// rather than 400: from the outside it's simply an address that doesn't
/// exist.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    let target_url = state.resolver.resolve(&code).await?;

    debug!("Redirecting {code} -> {target_url}");

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]))
}
