//! Link registry: create, list, get and delete operations.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code::generate_code;
use serde_json::json;

/// Length of generated codes on the normal path.
const GENERATED_CODE_LENGTH: usize = 6;

/// How many 6-character candidates are tried before widening.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Length of the single fallback candidate after the attempts run out.
const FALLBACK_CODE_LENGTH: usize = 7;

/// Owns code allocation and uniqueness enforcement for short links.
///
/// The registry holds no cached state; every operation goes straight to the
/// storage backend, which is the single source of truth.
pub struct LinkRegistry {
    repository: Arc<dyn LinkRepository>,
}

impl LinkRegistry {
    /// Creates a new registry over a storage backend.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a link, either under an explicit code or a generated one.
    ///
    /// # Code allocation
    ///
    /// - With `explicit_code`, a collision is a definitive conflict: the
    ///   caller chose the code, so [`AppError::Conflict`] propagates verbatim
    ///   with no retry.
    /// - Without one, up to 5 random 6-character candidates are inserted,
    ///   retrying only on conflict. If all 5 collide, one final 7-character
    ///   candidate widens the search space instead of retrying indefinitely;
    ///   a conflict on that last attempt surfaces to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] as described above and
    /// [`AppError::Internal`] on storage errors (never retried).
    pub async fn create(
        &self,
        target_url: &str,
        explicit_code: Option<String>,
    ) -> Result<Link, AppError> {
        if let Some(code) = explicit_code {
            return self.repository.insert(&code, target_url).await;
        }

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(GENERATED_CODE_LENGTH);

            match self.repository.insert(&code, target_url).await {
                Err(AppError::Conflict { .. }) => continue,
                result => return result,
            }
        }

        tracing::warn!(
            "{MAX_GENERATION_ATTEMPTS} generated codes collided, widening to {FALLBACK_CODE_LENGTH} characters"
        );
        let code = generate_code(FALLBACK_CODE_LENGTH);
        self.repository.insert(&code, target_url).await
    }

    /// Returns all links, newest first.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Permanently deletes a link, freeing its code for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        }
    }
}
