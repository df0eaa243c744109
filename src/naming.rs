//! File names for every artifact a source image passes through.
//!
//! Each source file moves through three names, all derived from the original
//! by swapping the trailing suffix:
//! - `photo.jpg` → `photo-samesize.png` (lossless copy, temp dir)
//! - `photo-samesize.png` → `photo-newsize.png` (resized copy, temp dir)
//! - `photo-newsize.png` → `photo-converted.jpg` (final file, output dir)
//!
//! These functions work on plain names only. Joining them onto the input,
//! temp, or output directory is the caller's job.

use crate::constants::{
    CONVERTED_FILE_SUFFIX, ORIGINAL_FILE_EXTENSION, TEMP_FILE_EXTENSION, TEMP_FIRST_FILE_SUFFIX,
    TEMP_SECOND_FILE_SUFFIX,
};
use crate::error::{ResizeError, Result};

fn swap_suffix(name: &str, from: &str, to: &str) -> Result<String> {
    match name.strip_suffix(from) {
        Some(stem) if !stem.is_empty() => Ok(format!("{}{}", stem, to)),
        _ => Err(ResizeError::InvalidFileName(name.to_string())),
    }
}

/// `photo.jpg` → `photo-samesize.png`
pub fn stage1_name(original: &str) -> Result<String> {
    swap_suffix(
        original,
        ORIGINAL_FILE_EXTENSION,
        &format!("{}{}", TEMP_FIRST_FILE_SUFFIX, TEMP_FILE_EXTENSION),
    )
}

/// `photo-samesize.png` → `photo-newsize.png`
pub fn stage2_name(stage1: &str) -> Result<String> {
    swap_suffix(
        stage1,
        &format!("{}{}", TEMP_FIRST_FILE_SUFFIX, TEMP_FILE_EXTENSION),
        &format!("{}{}", TEMP_SECOND_FILE_SUFFIX, TEMP_FILE_EXTENSION),
    )
}

/// `photo-newsize.png` → `photo-converted.jpg`
pub fn output_name(stage2: &str) -> Result<String> {
    swap_suffix(
        stage2,
        &format!("{}{}", TEMP_SECOND_FILE_SUFFIX, TEMP_FILE_EXTENSION),
        &format!("{}{}", CONVERTED_FILE_SUFFIX, ORIGINAL_FILE_EXTENSION),
    )
}

/// Runs all three transforms, giving the name the final file will have.
pub fn final_name(original: &str) -> Result<String> {
    output_name(&stage2_name(&stage1_name(original)?)?)
}
