//! Errors reported by the quote API client

use thiserror::Error;

/// Shown when the service could not be reached or answered with something unreadable
pub const NETWORK_FAILURE_MESSAGE: &str = "网络连接失败，请检查网络后重试";

/// Shown when the service reports a failure without saying why
pub const DEFAULT_FAILURE_MESSAGE: &str = "获取语录失败";

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures of a quote API call
///
/// The `Display` output is user-facing: transport and decoding problems all
/// collapse into the same generic message, the details only go to the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{}", NETWORK_FAILURE_MESSAGE)]
    Network { details: String },

    #[error("{}", NETWORK_FAILURE_MESSAGE)]
    Timeout { timeout: std::time::Duration },

    #[error("{}", NETWORK_FAILURE_MESSAGE)]
    InvalidResponse { details: String },

    #[error("{0}")]
    Application(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a network error
    pub fn network(details: impl Into<String>) -> Self {
        ApiError::Network {
            details: details.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(details: impl Into<String>) -> Self {
        ApiError::InvalidResponse {
            details: details.into(),
        }
    }

    /// Create an application error, falling back to the default message
    pub fn application(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.is_empty() => ApiError::Application(message),
            _ => ApiError::Application(DEFAULT_FAILURE_MESSAGE.to_string()),
        }
    }

    /// Whether the failure happened below the envelope (transport, timeout, body)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Network { .. } | ApiError::Timeout { .. } | ApiError::InvalidResponse { .. }
        )
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_transport_errors_share_generic_message() {
        assert_eq!(ApiError::network("connection refused").to_string(), NETWORK_FAILURE_MESSAGE);
        assert_eq!(
            ApiError::Timeout { timeout: Duration::from_secs(10) }.to_string(),
            NETWORK_FAILURE_MESSAGE
        );
        assert_eq!(ApiError::invalid_response("expected value").to_string(), NETWORK_FAILURE_MESSAGE);
    }

    #[test]
    fn test_application_message() {
        assert_eq!(ApiError::application(Some("X".to_string())).to_string(), "X");
        assert_eq!(ApiError::application(None).to_string(), DEFAULT_FAILURE_MESSAGE);
        assert_eq!(ApiError::application(Some(String::new())).to_string(), DEFAULT_FAILURE_MESSAGE);
        assert!(!ApiError::application(None).is_transport());
    }
}
