use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use rx_config::ConfigError;
use rx_session::{AuthFailure, GatewayError, StoreError};
use thiserror::Error;

/// Errors that end an `rx` invocation
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Backend client error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("{0}")]
    Auth(#[from] AuthFailure),

    #[error("Failed to read form {path}: {source} {location}")]
    FormRead {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid form {path}: {source} {location}")]
    FormParse {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to write output: {source} {location}")]
    Output {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn form_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FormRead {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn form_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::FormParse {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn output(source: serde_json::Error) -> Self {
        Self::Output {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// 1 for a failed operation, 2 for a problem with the invocation or setup
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Auth(_) | Self::Gateway(_) => 1,
            _ => 2,
        }
    }

    /// One line for the user, without source locations
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(failure) => {
                format!("{} {}", failure.message, failure.recovery_hint())
            }
            Self::Gateway(e) => e.user_message(),
            Self::Store(e) => e.recovery_hint().to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
