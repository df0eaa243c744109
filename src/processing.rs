use crate::backend::{BackendError, ImageBackend, ResizeMode};
use crate::error::{ResizeError, Result, Stage};
use crate::naming::{output_name, stage1_name, stage2_name};
use crate::verbose;
use std::path::Path;

/// Per-run settings shared by every file's stages.
#[derive(Debug, Clone, Copy)]
pub struct StageOptions<'a> {
    pub input_dir: &'a Path,
    pub temp_dir: &'a Path,
    pub output_dir: &'a Path,
    pub mode: ResizeMode,
    pub quality: u8,
}

fn conversion_error(stage: Stage, original: &str) -> impl FnOnce(BackendError) -> ResizeError + '_ {
    move |source| ResizeError::Conversion {
        stage,
        file: original.to_string(),
        source,
    }
}

/// Stage 1: `<input_dir>/name.jpg` → `<temp_dir>/name-samesize.png`.
///
/// Returns the name of the file written.
pub fn convert_to_lossless(
    backend: &dyn ImageBackend,
    original: &str,
    options: &StageOptions<'_>,
) -> Result<String> {
    let first = stage1_name(original)?;
    verbose!("{}: {} -> {}", Stage::Reformat, original, first);

    backend
        .reformat_same_size(
            &options.input_dir.join(original),
            &options.temp_dir.join(&first),
        )
        .map_err(conversion_error(Stage::Reformat, original))?;

    Ok(first)
}

/// Stage 2: `<temp_dir>/name-samesize.png` → `<temp_dir>/name-newsize.png`.
pub fn resize_lossless(
    backend: &dyn ImageBackend,
    original: &str,
    first: &str,
    options: &StageOptions<'_>,
) -> Result<String> {
    let second = stage2_name(first)?;
    verbose!("{} ({:?}): {} -> {}", Stage::Resize, options.mode, first, second);

    backend
        .resize(
            &options.temp_dir.join(first),
            &options.temp_dir.join(&second),
            options.mode,
        )
        .map_err(conversion_error(Stage::Resize, original))?;

    Ok(second)
}

/// Stage 3: `<temp_dir>/name-newsize.png` → `<output_dir>/name-converted.jpg`.
pub fn convert_back(
    backend: &dyn ImageBackend,
    original: &str,
    second: &str,
    options: &StageOptions<'_>,
) -> Result<String> {
    let converted = output_name(second)?;
    verbose!("{}: {} -> {}", Stage::ReformatBack, second, converted);

    backend
        .reformat_and_strip(
            &options.temp_dir.join(second),
            &options.output_dir.join(&converted),
            options.quality,
        )
        .map_err(conversion_error(Stage::ReformatBack, original))?;

    Ok(converted)
}

/// Run one source file through all three stages in order.
///
/// Returns the name of the file written to the output directory.
pub fn process_single_image(
    backend: &dyn ImageBackend,
    original: &str,
    options: &StageOptions<'_>,
) -> Result<String> {
    let first = convert_to_lossless(backend, original, options)?;
    let second = resize_lossless(backend, original, &first, options)?;
    convert_back(backend, original, &second, options)
}
