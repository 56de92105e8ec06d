use std::panic::Location;

use error_location::ErrorLocation;
use rx_core::FieldErrors;
use thiserror::Error;

pub(crate) const UNAUTHORIZED_MESSAGE: &str = "Your session has expired. Please log in again.";
pub(crate) const FORBIDDEN_MESSAGE: &str = "You do not have permission to perform this action.";
pub(crate) const NOT_FOUND_MESSAGE: &str = "The requested resource was not found.";
pub(crate) const SERVER_MESSAGE: &str = "The server encountered an error. Please try again later.";
pub(crate) const REJECTED_MESSAGE: &str = "The request could not be processed.";

/// Classified outcome of a failed backend call.
///
/// Produced once at the HTTP boundary so callers never inspect raw responses.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request timed out after {timeout_secs}s {location}")]
    Timeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Request rejected ({status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        field_errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("Server error ({status}): {message} {location}")]
    Server {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP client setup failed: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl GatewayError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network { .. } => "NETWORK_ERROR",
            Self::Timeout { .. } => "TIMEOUT",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Rejected { .. } => "REJECTED",
            Self::Server { .. } => "SERVER_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Build { .. } => "CLIENT_SETUP_ERROR",
        }
    }

    /// HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Rejected { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for a banner, without location details
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            Self::Timeout { .. } => {
                "The server took too long to respond. Please try again.".to_string()
            }
            Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::Rejected { message, .. }
            | Self::Server { message, .. } => message.clone(),
            Self::Decode { .. } => "The server sent an unexpected response.".to_string(),
            Self::Build { .. } => "The application could not start its HTTP client.".to_string(),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Rejected { field_errors, .. } if !field_errors.is_empty() => Some(field_errors),
            _ => None,
        }
    }

    /// Whether the message came from the backend rather than a local default
    pub(crate) fn has_backend_message(&self) -> bool {
        match self {
            Self::Unauthorized { message, .. } => message != UNAUTHORIZED_MESSAGE,
            Self::Forbidden { message, .. } => message != FORBIDDEN_MESSAGE,
            Self::NotFound { message, .. } => message != NOT_FOUND_MESSAGE,
            Self::Rejected { message, .. } => message != REJECTED_MESSAGE,
            Self::Server { message, .. } => message != SERVER_MESSAGE,
            _ => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    #[track_caller]
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout {
            timeout_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn build(source: reqwest::Error) -> Self {
        Self::Build {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Classify a non-success HTTP status and its parsed error payload
    #[track_caller]
    pub(crate) fn from_status(
        status: u16,
        message: Option<String>,
        field_errors: FieldErrors,
    ) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match status {
            401 => Self::Unauthorized {
                message: message.unwrap_or_else(|| UNAUTHORIZED_MESSAGE.to_string()),
                location,
            },
            403 => Self::Forbidden {
                message: message.unwrap_or_else(|| FORBIDDEN_MESSAGE.to_string()),
                location,
            },
            404 => Self::NotFound {
                message: message.unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()),
                location,
            },
            400..=499 => Self::Rejected {
                status,
                message: message.unwrap_or_else(|| REJECTED_MESSAGE.to_string()),
                field_errors,
                location,
            },
            _ => Self::Server {
                status,
                message: message.unwrap_or_else(|| SERVER_MESSAGE.to_string()),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
