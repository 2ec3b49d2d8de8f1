use thiserror::Error;

/// Error types raised at the forecasting service boundary.
///
/// Every variant is caught by the dashboard orchestrator and degraded to
/// "no data available"; none of them is ever shown as a blocking error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// The request never completed (connection refused, DNS, timeout, ...)
    #[error("Request to {endpoint} failed: {reason}")]
    Network { endpoint: String, reason: String },

    /// The service answered with a non-2xx status
    #[error("HTTP error {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The body was valid JSON but did not carry the expected keys
    #[error("Unexpected response shape from {endpoint}: {reason}")]
    ShapeMismatch { endpoint: String, reason: String },

    /// The body could not be decoded at all
    #[error("Failed to parse response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl RepositoryError {
    pub fn network(endpoint: &str, reason: impl ToString) -> Self {
        Self::Network {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn status(endpoint: &str, status: u16) -> Self {
        Self::Status {
            endpoint: endpoint.to_string(),
            status,
        }
    }

    pub fn shape_mismatch(endpoint: &str, reason: impl ToString) -> Self {
        Self::ShapeMismatch {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(endpoint: &str, reason: impl ToString) -> Self {
        Self::Decode {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Endpoint path the failing request was sent to.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Network { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::ShapeMismatch { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Type alias for Result with RepositoryError
pub type Result<T> = std::result::Result<T, RepositoryError>;
