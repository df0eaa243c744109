//! Image library seam for the three conversion stages.
//!
//! [`ImageBackend`] is everything the pipeline needs from an image library:
//! reformat at the same size, resize, and reformat back while dropping
//! metadata. Each call reads one file and writes another.
//!
//! [`ImageCrateBackend`] is the production implementation, built on the
//! `image` crate.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// How the resize stage computes the target size.
///
/// Picked once per run from the requested width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// Fit inside `width`x`height`, keeping aspect ratio.
    Fit { width: u32, height: u32 },
    /// Set width, derive height from aspect ratio.
    Width(u32),
    /// Set height, derive width from aspect ratio.
    Height(u32),
}

impl ResizeMode {
    /// `None` when neither dimension was requested.
    pub fn from_dimensions(width: Option<u32>, height: Option<u32>) -> Option<Self> {
        match (width, height) {
            (Some(width), Some(height)) => Some(ResizeMode::Fit { width, height }),
            (None, Some(height)) => Some(ResizeMode::Height(height)),
            (Some(width), None) => Some(ResizeMode::Width(width)),
            (None, None) => None,
        }
    }

    /// Target size for an image of `width`x`height`.
    ///
    /// Single-dimension modes round the derived side and never go below 1.
    /// `Fit` scales by the tighter of the two ratios, so the result fits the box.
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        match *self {
            ResizeMode::Width(w) => (w, scale_side(height, w, width)),
            ResizeMode::Height(h) => (scale_side(width, h, height), h),
            ResizeMode::Fit {
                width: max_w,
                height: max_h,
            } => {
                let wratio = max_w as f64 / width as f64;
                let hratio = max_h as f64 / height as f64;
                if wratio < hratio {
                    (max_w, scale_side(height, max_w, width))
                } else {
                    (scale_side(width, max_h, height), max_h)
                }
            }
        }
    }
}

fn scale_side(side: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = (side as f64 * numerator as f64 / denominator as f64).round();
    (scaled as u32).max(1)
}

/// The three operations the pipeline delegates to an image library.
pub trait ImageBackend: Sync {
    /// Re-encode `src` losslessly to `dst` at the same dimensions.
    fn reformat_same_size(&self, src: &Path, dst: &Path) -> Result<(), BackendError>;

    /// Resize the lossless `src` into `dst`.
    fn resize(&self, src: &Path, dst: &Path, mode: ResizeMode) -> Result<(), BackendError>;

    /// Encode `src` back to JPEG at `dst` without carrying metadata over.
    fn reformat_and_strip(&self, src: &Path, dst: &Path, quality: u8)
        -> Result<(), BackendError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateBackend;

impl ImageCrateBackend {
    fn open(path: &Path) -> Result<DynamicImage, BackendError> {
        Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
    }
}

impl ImageBackend for ImageCrateBackend {
    fn reformat_same_size(&self, src: &Path, dst: &Path) -> Result<(), BackendError> {
        let img = Self::open(src)?;
        img.save_with_format(dst, ImageFormat::Png)?;
        Ok(())
    }

    fn resize(&self, src: &Path, dst: &Path, mode: ResizeMode) -> Result<(), BackendError> {
        let img = Self::open(src)?;
        let (width, height) = mode.target_dimensions(img.width(), img.height());
        let resized = img.resize_exact(width, height, FilterType::Lanczos3);
        resized.save_with_format(dst, ImageFormat::Png)?;
        Ok(())
    }

    fn reformat_and_strip(
        &self,
        src: &Path,
        dst: &Path,
        quality: u8,
    ) -> Result<(), BackendError> {
        let img = Self::open(src)?;
        // JPEG has no alpha channel; flatten to RGB8 so every input encodes.
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        let writer = BufWriter::new(File::create(dst)?);
        let encoder = JpegEncoder::new_with_quality(writer, quality);
        rgb.write_with_encoder(encoder)?;
        Ok(())
    }
}
