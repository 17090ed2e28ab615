use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to the scheduling service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// An authorized call was attempted without a stored token.
    #[error("user not authorized")]
    NotAuthenticated,

    /// The service answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an error from a non-success response body.
    ///
    /// The message is taken from the body's `message` field, then from a string
    /// `detail` field, then `fallback`. A body that is not JSON at all yields
    /// `"Error {code}: {reason}"`.
    pub fn from_status(status: StatusCode, body: &str, fallback: &str) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            message: extract_message(status, body, fallback),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a missing token and for 401/403 answers.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            ApiError::NotAuthenticated => true,
            ApiError::Status { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

fn extract_message(status: StatusCode, body: &str, fallback: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return format!(
            "Error {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        );
    };

    let text_field = |name: &str| {
        value
            .get(name)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    text_field("message")
        .or_else(|| text_field("detail"))
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let err = ApiError::from_status(
            StatusCode::CONFLICT,
            r#"{"message": "Hall is busy", "detail": "ignored"}"#,
            "Could not create training",
        );
        assert_eq!(err.to_string(), "Hall is busy");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_detail_string_used_when_no_message() {
        let err = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "Invalid credentials"}"#,
            "Sign-in failed",
        );
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_structured_detail_falls_back() {
        // Validation errors carry a list in `detail`
        let err = ApiError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#,
            "Sign-up failed",
        );
        assert_eq!(err.to_string(), "Sign-up failed");
    }

    #[test]
    fn test_non_json_body_uses_status_line() {
        let err = ApiError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>oops</html>",
            "Request failed",
        );
        assert_eq!(err.to_string(), "Error 500: Internal Server Error");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_empty_body_uses_status_line() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "", "Trainer not found");
        assert_eq!(err.to_string(), "Error 404: Not Found");
    }

    #[test]
    fn test_not_authenticated_message() {
        assert_eq!(ApiError::NotAuthenticated.to_string(), "user not authorized");
        assert!(ApiError::NotAuthenticated.is_unauthorized());
    }
}
