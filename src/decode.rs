//! Loading screenshots from disk.
//!
//! Decoding is delegated to the `image` crate. Any alpha channel is dropped
//! and 8-bit channels are normalized to `[0, 1]`.
//!
//! # Example
//!
//! ```ignore
//! use screenshot_eval::{analyze, decode::load_screenshot};
//!
//! let pixels = load_screenshot("Screenshots/frame_0042.png")?;
//! let report = analyze(&pixels);
//! ```

use std::path::Path;

use crate::error::{Error, Result};
use crate::pixels::PixelBuffer;

/// Decode an image file into a [`PixelBuffer`].
///
/// Decode failures are reported as [`Error::ImageLoad`].
pub fn load_screenshot(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| Error::ImageLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let rgb = img.to_rgb8();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    tracing::debug!(path = %path.display(), width, height, "decoded screenshot");

    PixelBuffer::from_rgb8(rgb.as_raw(), width, height).map_err(|e| Error::ImageLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Decode an in-memory encoded image (PNG or JPEG).
pub fn decode_screenshot(data: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(data).map_err(|e| Error::ImageLoad {
        path: "<memory>".into(),
        reason: e.to_string(),
    })?;
    let rgb = img.to_rgb8();
    PixelBuffer::from_rgb8(rgb.as_raw(), rgb.width() as usize, rgb.height() as usize)
}
