use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid surface: {value} (expected 'admin' or 'customer') {location}")]
    InvalidSurface {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid account status: {value} {location}")]
    InvalidAccountStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_surface(value: impl Into<String>) -> Self {
        Self::InvalidSurface {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_account_status(value: impl Into<String>) -> Self {
        Self::InvalidAccountStatus {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
