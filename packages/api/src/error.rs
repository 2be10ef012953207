//! Error type shared by every [`crate::RemoteClient`] implementation.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, or a body that did not decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx response.
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("card `{0}` not found")]
    CardNotFound(String),
    #[error("not allowed: {0}")]
    Forbidden(String),
}

/// Error body the service sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Build a status error, preferring the server's `message` field.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| body.trim().to_string());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::CardNotFound(_) => Some(404),
            ApiError::Forbidden(_) => Some(403),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_json_message() {
        let err = ApiError::from_status(403, r#"{"message":"Cannot delete another user's card"}"#);
        assert_eq!(err.status(), Some(403));
        assert_eq!(
            err.to_string(),
            "server responded 403: Cannot delete another user's card"
        );

        let err = ApiError::from_status(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "server responded 502: Bad Gateway");
    }
}
