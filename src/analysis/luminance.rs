//! Perceptual luminance (ITU BT.709 weights).

use imgref::{ImgRef, ImgVec};

use crate::pixels::PixelBuffer;

/// Single-channel brightness map with values in `[0, 1]`.
pub type LuminanceMap = ImgVec<f32>;

/// Borrowed view of a [`LuminanceMap`] or a sub-region of one.
pub type LuminanceRef<'a> = ImgRef<'a, f32>;

const WEIGHT_R: f32 = 0.2126;
const WEIGHT_G: f32 = 0.7152;
const WEIGHT_B: f32 = 0.0722;

/// Luminance of a single normalized RGB sample.
#[inline]
#[must_use]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    WEIGHT_R * r + WEIGHT_G * g + WEIGHT_B * b
}

/// Derive the luminance map of a screenshot. Same dimensions as the input.
#[must_use]
pub fn luminance_map(pixels: &PixelBuffer) -> LuminanceMap {
    let buf = pixels.pixels().map(|p| luminance(p.r, p.g, p.b)).collect();
    ImgVec::new(buf, pixels.width(), pixels.height())
}

/// Collect the samples of a (possibly strided) luminance view.
pub(crate) fn collect_samples(view: LuminanceRef<'_>) -> Vec<f32> {
    view.rows().flat_map(|row| row.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((luminance(1.0, 1.0, 1.0) - 1.0).abs() < 1e-6);
        assert_eq!(luminance(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_green_dominates() {
        assert!(luminance(0.0, 1.0, 0.0) > luminance(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_map_dimensions() {
        let buf = PixelBuffer::filled(7, 3, RGB::new(0.5, 0.5, 0.5)).unwrap();
        let map = luminance_map(&buf);
        assert_eq!(map.width(), 7);
        assert_eq!(map.height(), 3);
        assert!(map.pixels().all(|v| (v - 0.5).abs() < 1e-6));
    }
}
