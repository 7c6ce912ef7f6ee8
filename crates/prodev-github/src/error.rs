//! GitHub client error types.

/// Errors produced by the GitHub client.
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    /// Transport-level HTTP failure or JSON decode failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// A required field was absent from an API payload.
    #[error("missing field {field:?} in {context} payload")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
        /// Which payload was being read.
        context: &'static str,
    },
}

/// Convenience alias for GitHub client results.
pub type Result<T> = std::result::Result<T, GithubError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = GithubError::Status {
            status: 404,
            url: "https://api.github.com/orgs/nope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 404 from https://api.github.com/orgs/nope"
        );
    }

    #[test]
    fn missing_field_display() {
        let err = GithubError::MissingField {
            field: "repos_url",
            context: "org",
        };
        assert!(err.to_string().contains("repos_url"));
        assert!(err.to_string().contains("org"));
    }
}
