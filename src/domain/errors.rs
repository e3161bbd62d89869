//! Domain errors for the message search service.

use thiserror::Error;

/// Domain-level errors that can occur while serving a search.
///
/// Variants carry owned strings rather than source errors so a single
/// failed upstream load can be handed to every request waiting on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Upstream unreachable, timed out, or answered non-2xx
    #[error("Failed to fetch data from external API: {0}")]
    Upstream(String),

    /// Upstream body is not a valid message envelope
    #[error("Malformed upstream payload: {0}")]
    Parse(String),

    /// Requested page lies past the last page
    #[error("Page {page} does not exist. Total pages: {total_pages}")]
    PageNotFound {
        /// Requested page
        page: usize,
        /// Pages available for the query
        total_pages: usize,
    },

    /// `page` or `page_size` out of range
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    /// Unexpected failure while serving the request
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Parse(err.to_string())
    }
}

impl DomainError {
    /// Stable machine-readable code for API error bodies.
    pub const fn code(&self) -> &'static str {
        match self {
            DomainError::Upstream(_) => "UPSTREAM_UNAVAILABLE",
            DomainError::PageNotFound { .. } => "PAGE_NOT_FOUND",
            DomainError::InvalidPagination(_) => "INVALID_QUERY",
            DomainError::Parse(_) | DomainError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_not_found_message() {
        let err = DomainError::PageNotFound {
            page: 2,
            total_pages: 1,
        };
        assert_eq!(err.to_string(), "Page 2 does not exist. Total pages: 1");
        assert_eq!(err.code(), "PAGE_NOT_FOUND");
    }

    #[test]
    fn test_serde_error_becomes_parse() {
        let err: DomainError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
