//! Normalized pixel buffers handed to the analysis core.
//!
//! A [`PixelBuffer`] is an RGB image with `f32` channels in `[0, 1]`, row-major.
//! It is validated once on construction and immutable afterwards, so every
//! analyzer can borrow it without further checks.

use imgref::{ImgRef, ImgVec};
use rgb::{RGB, RGB8};

use crate::error::{Error, Result};

/// Validated RGB screenshot with channels normalized to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    img: ImgVec<RGB<f32>>,
}

impl PixelBuffer {
    /// Wrap an existing image, validating dimensions and channel range.
    pub fn new(img: ImgVec<RGB<f32>>) -> Result<Self> {
        if img.width() == 0 || img.height() == 0 {
            return Err(Error::invalid(format!(
                "buffer has no pixels ({}x{})",
                img.width(),
                img.height()
            )));
        }
        if let Some(p) = img
            .pixels()
            .find(|p| [p.r, p.g, p.b].iter().any(|c| !(0.0..=1.0).contains(c)))
        {
            return Err(Error::invalid(format!(
                "channel value out of [0, 1]: ({}, {}, {})",
                p.r, p.g, p.b
            )));
        }
        Ok(Self { img })
    }

    /// Build from interleaved `R, G, B` samples in row-major order.
    pub fn from_interleaved(data: Vec<f32>, width: usize, height: usize) -> Result<Self> {
        let expected = pixel_count(width, height)?
            .checked_mul(3)
            .ok_or_else(|| Error::invalid("dimensions overflow"))?;
        if data.len() != expected {
            return Err(Error::invalid(format!(
                "expected {expected} samples for {width}x{height}x3, got {} \
                 (buffer must have exactly three channels)",
                data.len()
            )));
        }
        let pixels = data
            .chunks_exact(3)
            .map(|c| RGB::new(c[0], c[1], c[2]))
            .collect();
        Self::new(ImgVec::new(pixels, width, height))
    }

    /// Build from 8-bit RGB samples, normalizing each channel by 1/255.
    pub fn from_rgb8(data: &[u8], width: usize, height: usize) -> Result<Self> {
        let expected = pixel_count(width, height)?
            .checked_mul(3)
            .ok_or_else(|| Error::invalid("dimensions overflow"))?;
        if data.len() != expected {
            return Err(Error::invalid(format!(
                "expected {expected} bytes for {width}x{height} RGB8, got {}",
                data.len()
            )));
        }
        let pixels = data
            .chunks_exact(3)
            .map(|c| RGB8::new(c[0], c[1], c[2]))
            .map(normalize_rgb8)
            .collect();
        Self::new(ImgVec::new(pixels, width, height))
    }

    /// Uniform buffer where every pixel has the same color.
    pub fn filled(width: usize, height: usize, color: RGB<f32>) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Self::new(ImgVec::new(vec![color; count], width, height))
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.img.width()
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.img.height()
    }

    /// Total number of pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }

    /// Always false for a constructed buffer; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the underlying image.
    #[must_use]
    pub fn as_img(&self) -> ImgRef<'_, RGB<f32>> {
        self.img.as_ref()
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = RGB<f32>> + '_ {
        self.img.pixels()
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid(format!(
            "buffer has no pixels ({width}x{height})"
        )));
    }
    width
        .checked_mul(height)
        .ok_or_else(|| Error::invalid("dimensions overflow"))
}

fn normalize_rgb8(p: RGB8) -> RGB<f32> {
    RGB::new(
        f32::from(p.r) / 255.0,
        f32::from(p.g) / 255.0,
        f32::from(p.b) / 255.0,
    )
}
