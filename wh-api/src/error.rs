/// Error types for the WeatherHub gateway
use thiserror::Error;

/// Failure of a single gateway request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// A 2xx body that could not be decoded into the expected type
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// HTTP status of the failed response, `None` for network failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            GatewayError::Transport(_) | GatewayError::Decode(_) => None,
        }
    }

    /// Response body, or the failure message when there was no response.
    pub fn body(&self) -> &str {
        match self {
            GatewayError::Status { body, .. } => body,
            GatewayError::Transport(message) | GatewayError::Decode(message) => message,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

/// Type alias for Results using GatewayError
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::GatewayError;

    #[test]
    fn test_status_error_display() {
        let err = GatewayError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.body(), "boom");
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = GatewayError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), "connection refused");
    }
}
