use crate::backend::BackendError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the three conversion stages a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// JPEG to lossless intermediate at the original size
    Reformat,
    /// Lossless intermediate to resized intermediate
    Resize,
    /// Resized intermediate back to JPEG in the output directory
    ReformatBack,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Reformat => "same-size reformat",
            Stage::Resize => "resize",
            Stage::ReformatBack => "reformat back to jpg",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("Invalid dimension: {0:?}. Must be an integer between {min} and {max}", min = crate::constants::MIN_DIMENSION, max = crate::constants::MAX_DIMENSION)]
    InvalidDimension(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Directory unavailable: {path:?}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unexpected file name: {0:?}")]
    InvalidFileName(String),

    #[error("{stage} failed for {file}: {source}")]
    Conversion {
        stage: Stage,
        file: String,
        source: BackendError,
    },

    #[error("Failed to remove temporary directory {path:?}: {source}")]
    Cleanup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, ResizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_names_file_and_stage() {
        let err = ResizeError::Conversion {
            stage: Stage::Reformat,
            file: "b.jpg".to_string(),
            source: BackendError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "corrupt",
            )),
        };
        let msg = err.to_string();
        assert!(msg.contains("b.jpg"));
        assert!(msg.contains("same-size reformat"));
        assert!(msg.contains("corrupt"));
    }

    #[test]
    fn test_invalid_dimension_message_shows_range() {
        let msg = ResizeError::InvalidDimension("abc".to_string()).to_string();
        assert!(msg.contains("\"abc\""));
        assert!(msg.contains("1"));
        assert!(msg.contains("10000"));
    }
}
