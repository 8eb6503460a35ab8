//! Brightness distribution: fixed luminance bands plus summary statistics.
//!
//! | Band      | Luminance      | Typical content          |
//! |-----------|----------------|--------------------------|
//! | black     | `[0.00, 0.02)` | true black background    |
//! | very dark | `[0.02, 0.06)` | unlit floor              |
//! | dark      | `[0.06, 0.15)` | grid lines               |
//! | mid       | `[0.15, 0.40)` | bright grid, trails      |
//! | bright    | `[0.40, 0.70)` | emissives                |
//! | hot       | `[0.70, 1.00]` | bloom cores              |

use serde::{Deserialize, Serialize};

use crate::analysis::luminance::{LuminanceRef, collect_samples};
use crate::stats;

/// Named luminance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessBand {
    Black,
    VeryDark,
    Dark,
    Mid,
    Bright,
    Hot,
}

/// Band table in report order: `(band, lower bound inclusive, upper bound exclusive)`.
///
/// The last band is closed at the top so the six bands partition `[0, 1]`.
pub const BRIGHTNESS_BANDS: [(BrightnessBand, f32, f32); 6] = [
    (BrightnessBand::Black, 0.0, 0.02),
    (BrightnessBand::VeryDark, 0.02, 0.06),
    (BrightnessBand::Dark, 0.06, 0.15),
    (BrightnessBand::Mid, 0.15, 0.40),
    (BrightnessBand::Bright, 0.40, 0.70),
    (BrightnessBand::Hot, 0.70, 1.0),
];

impl BrightnessBand {
    /// Band containing a luminance value.
    #[must_use]
    pub fn of(value: f32) -> Self {
        BRIGHTNESS_BANDS
            .iter()
            .find(|&&(_, _, upper)| value < upper)
            .map_or(Self::Hot, |&(band, _, _)| band)
    }

    /// Report label including the band's range.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Black => "black (<2%)",
            Self::VeryDark => "very_dark (2-6%)",
            Self::Dark => "dark (6-15%)",
            Self::Mid => "mid (15-40%)",
            Self::Bright => "bright (40-70%)",
            Self::Hot => "hot (>70%)",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for BrightnessBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Share of pixels falling in one band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandShare {
    pub band: BrightnessBand,
    /// Percentage of all pixels, 0-100.
    pub percent: f64,
}

/// Band percentages and luminance statistics, all on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    /// One entry per band, in [`BRIGHTNESS_BANDS`] order.
    pub bands: Vec<BandShare>,
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub p99: f64,
    pub max: f64,
}

impl DistributionReport {
    /// Percentage of pixels in `band`.
    #[must_use]
    pub fn percent(&self, band: BrightnessBand) -> f64 {
        self.bands
            .iter()
            .find(|share| share.band == band)
            .map_or(0.0, |share| share.percent)
    }
}

/// Bucket every luminance sample and compute summary statistics.
#[must_use]
pub fn analyze_distribution(luma: LuminanceRef<'_>) -> DistributionReport {
    let samples = collect_samples(luma);
    let total = samples.len().max(1) as f64;

    let mut counts = [0usize; BRIGHTNESS_BANDS.len()];
    for &v in &samples {
        counts[BrightnessBand::of(v).index()] += 1;
    }

    let bands = BRIGHTNESS_BANDS
        .iter()
        .map(|&(band, _, _)| BandShare {
            band,
            percent: counts[band.index()] as f64 / total * 100.0,
        })
        .collect();

    let sorted = stats::sorted_copy(&samples);
    let report = DistributionReport {
        bands,
        mean: stats::mean(&samples) * 100.0,
        median: stats::percentile_sorted(&sorted, 0.5) * 100.0,
        p95: stats::percentile_sorted(&sorted, 0.95) * 100.0,
        p99: stats::percentile_sorted(&sorted, 0.99) * 100.0,
        max: sorted.last().map_or(0.0, |&v| f64::from(v)) * 100.0,
    };

    tracing::debug!(
        black = report.percent(BrightnessBand::Black),
        hot = report.percent(BrightnessBand::Hot),
        mean = report.mean,
        "brightness distribution"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgref::ImgVec;

    fn dist(values: Vec<f32>, width: usize) -> DistributionReport {
        let height = values.len() / width;
        let img = ImgVec::new(values, width, height);
        analyze_distribution(img.as_ref())
    }

    #[test]
    fn test_band_of_boundaries() {
        assert_eq!(BrightnessBand::of(0.0), BrightnessBand::Black);
        assert_eq!(BrightnessBand::of(0.019), BrightnessBand::Black);
        assert_eq!(BrightnessBand::of(0.02), BrightnessBand::VeryDark);
        assert_eq!(BrightnessBand::of(0.06), BrightnessBand::Dark);
        assert_eq!(BrightnessBand::of(0.15), BrightnessBand::Mid);
        assert_eq!(BrightnessBand::of(0.40), BrightnessBand::Bright);
        assert_eq!(BrightnessBand::of(0.70), BrightnessBand::Hot);
        assert_eq!(BrightnessBand::of(1.0), BrightnessBand::Hot);
    }

    #[test]
    fn test_bands_sum_to_100() {
        let values: Vec<f32> = (0..1000).map(|i| i as f32 / 999.0).collect();
        let report = dist(values, 100);
        let sum: f64 = report.bands.iter().map(|b| b.percent).sum();
        assert!((sum - 100.0).abs() < 0.01);
        assert_eq!(report.bands.len(), 6);
    }

    #[test]
    fn test_band_order() {
        let report = dist(vec![0.5; 4], 2);
        let order: Vec<_> = report.bands.iter().map(|b| b.band).collect();
        let expected: Vec<_> = BRIGHTNESS_BANDS.iter().map(|b| b.0).collect();
        assert_eq!(order, expected);
        assert_eq!(report.percent(BrightnessBand::Bright), 100.0);
    }

    #[test]
    fn test_statistics_ordering() {
        let values: Vec<f32> = (0..400).map(|i| ((i * 37) % 101) as f32 / 100.0).collect();
        let report = dist(values, 20);
        assert!(report.median <= report.p95);
        assert!(report.p95 <= report.p99);
        assert!(report.p99 <= report.max);
        assert!(report.max <= 100.0);
    }

    #[test]
    fn test_constant_map_statistics_equal() {
        let report = dist(vec![0.3; 25], 5);
        for v in [report.mean, report.median, report.p95, report.p99, report.max] {
            assert!((v - 30.0).abs() < 1e-4);
        }
        assert_eq!(report.percent(BrightnessBand::Mid), 100.0);
    }
}
