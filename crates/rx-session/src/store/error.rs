use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by persisted key-value storage.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create storage directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read stored entry at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write stored entry at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to remove stored entry at {path}: {source} {location}")]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid storage key '{key}' {location}")]
    InvalidKey { key: String, location: ErrorLocation },

    #[error("Failed to serialize stored entry: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::DirCreation { .. } | Self::FileWrite { .. } | Self::AtomicRename { .. } => {
                "Unable to save your session. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } => {
                "Unable to read your saved session. \
                   The file may be locked by another process."
            }
            Self::FileRemove { .. } => {
                "Unable to remove your saved session. \
                   Check file permissions in the session directory."
            }
            Self::InvalidKey { .. } | Self::Serialization { .. } => {
                "Internal error preparing session data. \
                   Please report this issue."
            }
        }
    }

    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_remove(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRemove {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
