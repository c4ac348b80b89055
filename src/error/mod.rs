//! Error types for listing a directory into a JSON file

use std::path::{Path, PathBuf};

/// Main error type for listing operations
///
/// A missing source directory is not an error; it is reported through
/// [`crate::listing::ListingOutcome::DirectoryNotFound`].
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Directory scan failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Entry name is not valid UTF-8: {}", .path.display())]
    InvalidName { path: PathBuf },
}

impl ListingError {
    pub fn io(error: std::io::Error, path: &Path) -> Self {
        Self::Io {
            message: error.to_string(),
            path: Some(path.to_path_buf()),
            source: Some(error),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn invalid_name(path: &Path) -> Self {
        Self::InvalidName {
            path: path.to_path_buf(),
        }
    }

    /// Path the failing operation was working on, if known
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => path.as_deref(),
            Self::Walk(err) => err.path(),
            Self::InvalidName { path } => Some(path.as_path()),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                message,
                path: Some(path),
                ..
            } => format!("{}: {}", path.display(), message),
            Self::Io { message, .. } => format!("IO error: {}", message),
            Self::Serialization(err) => format!("Could not serialize file list: {}", err),
            Self::Configuration { message } => format!("Invalid configuration: {}", message),
            Self::Walk(err) => match err.path() {
                Some(path) => format!("Could not read {}: {}", path.display(), err),
                None => format!("Could not read directory: {}", err),
            },
            Self::InvalidName { path } => format!(
                "{} matches but its name is not valid UTF-8 and cannot be listed",
                path.display()
            ),
        }
    }
}

impl From<std::io::Error> for ListingError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            path: None,
            source: Some(error),
        }
    }
}

/// Result type for listing operations
pub type ListingResult<T> = Result<T, ListingError>;
