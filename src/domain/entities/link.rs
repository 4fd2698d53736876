//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short code mapped to a target URL, with click accounting.
///
/// The `code` is the primary key and is immutable once created, as is
/// `target_url`. Only `total_clicks` and `last_clicked` change after
/// creation, and only through a successful redirect resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a fresh record for a just-inserted code.
    ///
    /// Counters and `last_clicked` start at their initial values.
    pub fn created_now(code: String, target_url: String) -> Self {
        Self {
            code,
            target_url,
            total_clicks: 0,
            created_at: Utc::now(),
            last_clicked: None,
        }
    }

    /// Returns true if the link has been visited at least once.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_now_starts_unclicked() {
        let link = Link::created_now("abc123".to_string(), "https://example.com".to_string());

        assert_eq!(link.code, "abc123");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.total_clicks, 0);
        assert!(link.last_clicked.is_none());
        assert!(!link.was_clicked());
    }

    #[test]
    fn test_was_clicked() {
        let mut link = Link::created_now("abc123".to_string(), "https://example.com".to_string());
        link.total_clicks = 1;
        link.last_clicked = Some(Utc::now());
        assert!(link.was_clicked());
    }
}
