use crate::gateway::GatewayError;
use crate::store::StoreError;

use log::warn;
use rx_core::FieldErrors;
use thiserror::Error;

pub(crate) const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub(crate) const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub(crate) const VALIDATION_FAILED_MESSAGE: &str = "Please correct the highlighted fields.";
pub(crate) const STORAGE_FAILED_MESSAGE: &str = "Unable to save your session on this device.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Client-side field validation failed, nothing was sent
    Validation,
    /// Bad credentials or an expired/invalid token
    InvalidCredentials,
    Network,
    Timeout,
    Server,
    Forbidden,
    NotFound,
    /// Other 4xx, usually with field errors
    Rejected,
    Storage,
    Decode,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::Server => "server",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Rejected => "rejected",
            Self::Storage => "storage",
            Self::Decode => "decode",
        }
    }
}

/// Result of a failed login, registration or profile refresh.
///
/// Always carries a message fit for a banner; `field_errors` is filled for
/// client-side validation and for backend rejections that name fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthFailure {
    pub kind: FailureKind,
    pub message: String,
    pub field_errors: FieldErrors,
}

impl AuthFailure {
    pub fn validation(field_errors: FieldErrors) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            field_errors,
        }
    }

    pub fn storage(err: &StoreError) -> Self {
        warn!("Session could not be persisted: {err}");
        Self {
            kind: FailureKind::Storage,
            message: STORAGE_FAILED_MESSAGE.to_string(),
            field_errors: FieldErrors::new(),
        }
    }

    /// Translate a gateway error, using `fallback` when the backend gave no message.
    pub fn from_gateway(err: &GatewayError, fallback: &str) -> Self {
        let kind = match err {
            GatewayError::Network { .. } | GatewayError::Build { .. } => FailureKind::Network,
            GatewayError::Timeout { .. } => FailureKind::Timeout,
            GatewayError::Unauthorized { .. } => FailureKind::InvalidCredentials,
            GatewayError::Forbidden { .. } => FailureKind::Forbidden,
            GatewayError::NotFound { .. } => FailureKind::NotFound,
            GatewayError::Rejected { .. } => FailureKind::Rejected,
            GatewayError::Server { .. } => FailureKind::Server,
            GatewayError::Decode { .. } => FailureKind::Decode,
        };

        let message = match kind {
            FailureKind::Network | FailureKind::Timeout => err.user_message(),
            _ if err.has_backend_message() => err.user_message(),
            _ => fallback.to_string(),
        };

        Self {
            kind,
            message,
            field_errors: err.field_errors().cloned().unwrap_or_default(),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self.kind {
            FailureKind::Validation | FailureKind::Rejected => {
                "Correct the highlighted fields and submit again."
            }
            FailureKind::InvalidCredentials => "Check your email and password and try again.",
            FailureKind::Network => "Check your internet connection and try again.",
            FailureKind::Timeout => "The server is slow to respond. Try again in a moment.",
            FailureKind::Server | FailureKind::Decode => {
                "The server could not complete the request. Try again later."
            }
            FailureKind::Forbidden => {
                "Your account is not allowed to do this. Contact support if this is unexpected."
            }
            FailureKind::NotFound => "The service endpoint was not found. Check the API base URL.",
            FailureKind::Storage => {
                "Unable to write session data. Check disk space and file permissions."
            }
        }
    }
}
