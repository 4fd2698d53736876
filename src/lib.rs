//! # TinyLink
//!
//! A small URL shortener service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Link`] entity and
//!   the [`domain::repositories::LinkRepository`] storage contract
//! - **Application Layer** ([`application`]) - The link registry (code
//!   allocation, uniqueness, bounded collision retry) and the redirect
//!   resolver (one atomic lookup-and-count round trip)
//! - **Infrastructure Layer** ([`infrastructure`]) - Two interchangeable
//!   backends: SQLite via sqlx, or a JSON snapshot file
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and the redirect route
//!
//! ## Quick Start
//!
//! ```bash
//! # With a database
//! export DATABASE_URL="sqlite:data/links.db"
//! cargo run
//!
//! # Or with no setup at all: falls back to a JSON file store
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; see [`config`]
//! for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkRegistry, RedirectResolver};
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
