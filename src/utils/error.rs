use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between a button press and a rendered answer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered, but not with a success status. The body is not read.
    #[error("backend returned HTTP {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),

    /// HTTP 200 whose JSON body carries `error` instead of a result.
    #[error("{0}")]
    Backend(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid client configuration: {0}")]
    Client(String),
}

impl ClientError {
    /// True when the server answered with a non-success status code.
    pub fn is_http_failure(&self) -> bool {
        matches!(self, ClientError::Status(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_failure_split() {
        assert!(ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR).is_http_failure());
        assert!(!ClientError::Decode("eof".to_string()).is_http_failure());
        assert!(!ClientError::Backend("boom".to_string()).is_http_failure());
    }

    #[test]
    fn test_display() {
        let err = ClientError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "backend returned HTTP 404 Not Found");

        let err = ClientError::Backend("Supabase credentials not configured".to_string());
        assert_eq!(err.to_string(), "Supabase credentials not configured");
    }
}
