//! DTO for the health check endpoint.

use serde::Serialize;

/// Health check body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
}
