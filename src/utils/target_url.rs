//! Target URL checks applied at the HTTP boundary.
//!
//! The registry assumes its inputs were already validated, so every create
//! request goes through this check first.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates that `input` is an absolute http/https URL with a host.
///
/// Rejects dangerous schemes like `javascript:`, `data:` and `file:`, and
/// relative references. The URL is stored exactly as provided; no
/// normalization is applied.
pub fn validate_target_url(input: &str) -> Result<(), TargetUrlError> {
    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedScheme),
    }

    if url.host_str().is_none() {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(())
}
