use crate::constants::{MAX_DIMENSION, MAX_QUALITY, MIN_DIMENSION, MIN_QUALITY};
use crate::error::{ResizeError, Result};
use std::fs;
use std::path::PathBuf;

/// Parse a width or height argument.
///
/// Only plain unsigned decimal integers in `MIN_DIMENSION..=MAX_DIMENSION`
/// are accepted.
pub fn parse_dimension(value: &str) -> Result<u32> {
    let dimension = value
        .parse::<u32>()
        .map_err(|_| ResizeError::InvalidDimension(value.to_string()))?;

    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
        return Err(ResizeError::InvalidDimension(value.to_string()));
    }

    Ok(dimension)
}

pub fn parse_quality(value: &str) -> Result<u8> {
    let quality = value
        .parse::<u8>()
        .map_err(|_| ResizeError::InvalidQuality(0))?;

    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(ResizeError::InvalidQuality(quality));
    }

    Ok(quality)
}

/// Resolve a directory argument to an absolute path, creating it if missing.
///
/// Relative paths are joined onto the current working directory. The
/// directory (and any missing ancestors) exists on disk once this returns.
pub fn resolve_directory(value: &str) -> Result<PathBuf> {
    let path = PathBuf::from(value);
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map_err(|source| ResizeError::DirectoryUnavailable {
                path: path.clone(),
                source,
            })?
            .join(path)
            .components()
            .collect()
    };

    if !absolute.exists() {
        fs::create_dir_all(&absolute).map_err(|source| ResizeError::DirectoryUnavailable {
            path: absolute.clone(),
            source,
        })?;
    }

    if !absolute.is_dir() {
        return Err(ResizeError::DirectoryUnavailable {
            path: absolute,
            source: std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        });
    }

    Ok(absolute)
}
