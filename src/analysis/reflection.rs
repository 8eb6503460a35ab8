//! Screen-space reflection activity, estimated from floor brightness variance.
//!
//! A working SSR pass makes the floor brighter near emissive geometry and
//! darker elsewhere, so a flat floor region suggests reflections are off.

use serde::{Deserialize, Serialize};

use crate::analysis::luminance::{LuminanceRef, collect_samples};
use crate::analysis::regions::FractionalRect;
use crate::stats;

/// Floor region sampled for reflections.
pub const FLOOR_REGION: FractionalRect = FractionalRect::new((0.6, 0.8), (0.2, 0.8));

/// How much the floor brightness varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FloorVariation {
    /// Standard deviation above 3%.
    Yes,
    /// Standard deviation above 1%.
    Weak,
    No,
}

impl FloorVariation {
    /// Classify a floor standard deviation given on the 0-100 scale.
    #[must_use]
    pub fn from_std(std: f64) -> Self {
        if std > 3.0 {
            Self::Yes
        } else if std > 1.0 {
            Self::Weak
        } else {
            Self::No
        }
    }
}

impl std::fmt::Display for FloorVariation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::Weak => write!(f, "WEAK"),
            Self::No => write!(f, "NO"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReflectionReport {
    /// Population standard deviation of floor luminance, 0-100.
    pub floor_brightness_std: f64,
    pub floor_max_brightness: f64,
    pub floor_has_variation: FloorVariation,
}

#[must_use]
pub fn estimate_reflection(luma: LuminanceRef<'_>) -> ReflectionReport {
    let samples = FLOOR_REGION.crop(luma).map(collect_samples).unwrap_or_default();
    let floor_brightness_std = stats::population_std_dev(&samples) * 100.0;
    let report = ReflectionReport {
        floor_brightness_std,
        floor_max_brightness: stats::max(&samples) * 100.0,
        floor_has_variation: FloorVariation::from_std(floor_brightness_std),
    };
    tracing::debug!(
        std = report.floor_brightness_std,
        variation = %report.floor_has_variation,
        "floor reflection"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgref::ImgVec;

    #[test]
    fn test_uniform_floor_has_no_variation() {
        let img = ImgVec::new(vec![0.4f32; 50 * 50], 50, 50);
        let report = estimate_reflection(img.as_ref());
        assert!(report.floor_brightness_std.abs() < 1e-9);
        assert_eq!(report.floor_has_variation, FloorVariation::No);
        assert!((report.floor_max_brightness - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(FloorVariation::from_std(3.5), FloorVariation::Yes);
        assert_eq!(FloorVariation::from_std(3.0), FloorVariation::Weak);
        assert_eq!(FloorVariation::from_std(2.0), FloorVariation::Weak);
        assert_eq!(FloorVariation::from_std(1.0), FloorVariation::No);
        assert_eq!(FloorVariation::from_std(0.0), FloorVariation::No);
    }

    #[test]
    fn test_checkerboard_floor_varies() {
        let (w, h) = (40, 40);
        let buf: Vec<f32> = (0..w * h)
            .map(|i| if (i % w + i / w) % 2 == 0 { 0.0 } else { 0.2 })
            .collect();
        let img = ImgVec::new(buf, w, h);
        let report = estimate_reflection(img.as_ref());
        // Half 0.0, half 0.2: population std is exactly 0.1.
        assert!((report.floor_brightness_std - 10.0).abs() < 1e-3);
        assert_eq!(report.floor_has_variation, FloorVariation::Yes);
    }

    #[test]
    fn test_region_ignores_rest_of_frame() {
        let (w, h) = (10, 10);
        // Bright top half only; floor rows 6..8 stay dark.
        let buf: Vec<f32> = (0..w * h).map(|i| if i / w < 5 { 1.0 } else { 0.0 }).collect();
        let img = ImgVec::new(buf, w, h);
        let report = estimate_reflection(img.as_ref());
        assert_eq!(report.floor_max_brightness, 0.0);
        assert_eq!(report.floor_has_variation, FloorVariation::No);
    }
}
