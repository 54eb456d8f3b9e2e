use thiserror::Error;

/// Everything that can go wrong talking to the search API.
///
/// Each variant renders as the message shown to the user; nothing here
/// escalates past the fetch orchestrator, which folds failures into the
/// displayed result state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// HTTP 403. Unauthenticated searches get 10 requests a minute.
    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    /// HTTP 422, usually a filter combination GitHub refuses to parse.
    #[error("Invalid search query. Please check your filters.")]
    InvalidQuery,

    /// Any other non-success status.
    #[error("GitHub API error: HTTP {0}")]
    Http(u16),

    /// Connection, TLS, or body-decode failure.
    #[error("Network error: {0}")]
    Transport(String),
}

impl FetchError {
    /// Maps a non-success HTTP status to its error variant.
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => FetchError::RateLimited,
            422 => FetchError::InvalidQuery,
            code => FetchError::Http(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(FetchError::from_status(403), FetchError::RateLimited);
        assert_eq!(FetchError::from_status(422), FetchError::InvalidQuery);
        assert_eq!(FetchError::from_status(500), FetchError::Http(500));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            FetchError::RateLimited.to_string(),
            "API rate limit exceeded. Please try again later."
        );
        assert_eq!(
            FetchError::InvalidQuery.to_string(),
            "Invalid search query. Please check your filters."
        );
        assert!(FetchError::Http(500).to_string().contains("500"));
        assert_eq!(
            FetchError::Transport("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
