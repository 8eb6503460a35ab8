//! Brightness of fixed sub-regions of the frame.

use serde::{Deserialize, Serialize};

use crate::analysis::luminance::{LuminanceRef, collect_samples};
use crate::stats;

/// Named rectangular sampling region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Main arena floor.
    Center,
    /// Floor close to the camera.
    Bottom,
    /// Far wall / sky.
    Top,
    LeftEdge,
    RightEdge,
}

/// Fractional rectangle, half-open on the high end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalRect {
    pub rows: (f64, f64),
    pub cols: (f64, f64),
}

impl FractionalRect {
    #[must_use]
    pub const fn new(rows: (f64, f64), cols: (f64, f64)) -> Self {
        Self { rows, cols }
    }

    /// Crop a view to this rectangle. Bounds are truncated to pixel indices.
    ///
    /// Returns `None` when the rectangle covers no pixels.
    #[must_use]
    pub fn crop<'a>(&self, luma: LuminanceRef<'a>) -> Option<LuminanceRef<'a>> {
        let (width, height) = (luma.width(), luma.height());
        let top = fraction_bound(self.rows.0, height);
        let bottom = fraction_bound(self.rows.1, height);
        let left = fraction_bound(self.cols.0, width);
        let right = fraction_bound(self.cols.1, width);
        if bottom <= top || right <= left {
            return None;
        }
        Some(luma.sub_image(left, top, right - left, bottom - top))
    }
}

/// Truncated pixel index of a fractional bound.
fn fraction_bound(fraction: f64, len: usize) -> usize {
    ((fraction * len as f64) as usize).min(len)
}

/// Region table in report order: `(region, bounds, reports p95)`.
pub const REGIONS: [(Region, FractionalRect, bool); 5] = [
    (Region::Center, FractionalRect::new((0.3, 0.7), (0.3, 0.7)), true),
    (Region::Bottom, FractionalRect::new((0.6, 0.9), (0.2, 0.8)), true),
    (Region::Top, FractionalRect::new((0.1, 0.3), (0.2, 0.8)), true),
    (Region::LeftEdge, FractionalRect::new((0.3, 0.7), (0.0, 0.15)), false),
    (Region::RightEdge, FractionalRect::new((0.3, 0.7), (0.85, 1.0)), false),
];

impl Region {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::LeftEdge => "left",
            Self::RightEdge => "right",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Brightness statistics of one region, 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub region: Region,
    pub mean: f64,
    /// Only reported for center, bottom and top.
    pub p95: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionReport {
    /// One entry per region, in [`REGIONS`] order.
    pub regions: Vec<RegionStats>,
}

impl RegionReport {
    #[must_use]
    pub fn get(&self, region: Region) -> Option<&RegionStats> {
        self.regions.iter().find(|r| r.region == region)
    }
}

/// Sample all fixed regions of a luminance map.
///
/// A region that truncates to zero pixels (tiny frames) reports `0.0`.
#[must_use]
pub fn sample_regions(luma: LuminanceRef<'_>) -> RegionReport {
    let regions = REGIONS
        .iter()
        .map(|&(region, rect, with_p95)| {
            let samples = match rect.crop(luma) {
                Some(view) => collect_samples(view),
                None => {
                    tracing::warn!(%region, "region covers no pixels");
                    Vec::new()
                }
            };
            RegionStats {
                region,
                mean: stats::mean(&samples) * 100.0,
                p95: with_p95.then(|| stats::percentile(&samples, 0.95) * 100.0),
            }
        })
        .collect();
    RegionReport { regions }
}
