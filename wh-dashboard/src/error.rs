/// Error types for dashboard actions
use thiserror::Error;
use wh_api::error::GatewayError;

pub const ENTER_A_CITY: &str = "Enter a city";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// A gateway request failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Trim the city input; an empty result is a validation error.
pub fn validate_city(input: &str) -> Result<String> {
    let city = input.trim();
    if city.is_empty() {
        Err(DashboardError::Validation(ENTER_A_CITY.to_string()))
    } else {
        Ok(city.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_city_trims() {
        assert_eq!(validate_city("  Paris \n").unwrap(), "Paris");
    }

    #[test]
    fn test_validate_city_rejects_blank() {
        let err = validate_city("   ").unwrap_err();
        assert_eq!(err.to_string(), "Enter a city");
        assert!(matches!(validate_city(""), Err(DashboardError::Validation(_))));
    }

    #[test]
    fn test_gateway_error_message_passes_through() {
        let err = DashboardError::from(GatewayError::Status {
            status: 503,
            body: "down".into(),
        });
        assert_eq!(err.to_string(), "HTTP 503: down");
    }
}
