//! Repository trait for short link storage.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for link records.
///
/// Each primitive is atomic with respect to the entire record set: `insert`
/// never interleaves with another `insert` such that a uniqueness check is
/// lost, and `increment_clicks` never loses an update under concurrency.
/// The backend is the single source of truth; callers hold no cached state
/// across calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - relational
///   store, atomicity via the engine's constraint and single-statement updates
/// - [`crate::infrastructure::persistence::JsonFileRepository`] - JSON snapshot
///   file, every operation a single critical section
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a record for `code` pointing at `target_url`.
    ///
    /// The new record starts with `total_clicks = 0`, `created_at = now`,
    /// and no `last_clicked`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, code: &str, target_url: &str) -> Result<Link, AppError>;

    /// Returns all live records ordered by `created_at` descending.
    ///
    /// Timestamp ties are broken by insertion order, newest first, so the
    /// ordering is deterministic even at sub-second collision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically adds one click and stamps `last_clicked = now`.
    ///
    /// Returns the (unchanged) target URL for redirect use, or `None` when
    /// the code is absent, in which case no counter changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_clicks(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Permanently removes a record, freeing its code for reuse.
    ///
    /// Returns `true` if the record existed, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
