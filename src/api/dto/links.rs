//! DTOs for the link management endpoints.

use crate::domain::entities::Link;
use crate::utils::code::CODE_REGEX;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to redirect to (must be an absolute HTTP/HTTPS URL).
    ///
    /// Checked in the handler with [`crate::utils::target_url`] rather than
    /// a derive rule, so the scheme whitelist stays in one place.
    pub target_url: String,

    /// Optional explicit short code. When absent, one is generated.
    #[validate(regex(
        path = "*CODE_REGEX",
        message = "code must match ^[A-Za-z0-9]{6,8}$"
    ))]
    pub code: Option<String>,
}

/// One link record as exposed by the API.
///
/// Matches the original wire shape; the file store's internal `id` is
/// never exposed.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            total_clicks: link.total_clicks,
            created_at: link.created_at,
            last_clicked: link.last_clicked,
        }
    }
}

/// Acknowledgement body for deletions.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_without_code() {
        let request = CreateLinkRequest {
            target_url: "https://example.com".to_string(),
            code: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_valid_request_with_code() {
        let request = CreateLinkRequest {
            target_url: "https://example.com".to_string(),
            code: Some("abc123".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_code_too_short_fails_validation() {
        let request = CreateLinkRequest {
            target_url: "https://example.com".to_string(),
            code: Some("abc12".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_code_with_symbols_fails_validation() {
        let request = CreateLinkRequest {
            target_url: "https://example.com".to_string(),
            code: Some("abc-123".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_hides_nothing_from_the_entity() {
        let link = Link::created_now("abc123".to_string(), "https://example.com".to_string());
        let response = LinkResponse::from(link.clone());

        assert_eq!(response.code, link.code);
        assert_eq!(response.target_url, link.target_url);
        assert_eq!(response.total_clicks, 0);
        assert!(response.last_clicked.is_none());
    }
}
