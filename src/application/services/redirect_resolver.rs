//! Redirect resolution: the hot path behind `GET /{code}`.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Resolves a short code to its target URL while recording the visit.
pub struct RedirectResolver {
    repository: Arc<dyn LinkRepository>,
}

impl RedirectResolver {
    /// Creates a new resolver over a storage backend.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Looks up a code and atomically records the visit.
    ///
    /// Exactly one storage round trip: the backend increments `total_clicks`,
    /// stamps `last_clicked`, and hands back the target URL in one atomic
    /// operation. No further validation happens here; the code pattern was
    /// already checked upstream.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code, in which case no
    /// counter changes anywhere.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }
}
