//! Grid line detection along fixed scan lines through the floor.
//!
//! Each scan line is a single row or column of the luminance map. The 20th
//! percentile of the line stands in for the floor, the 90th percentile for the
//! grid lines. A rising edge through a threshold 30% of the way from floor to
//! line level counts as one visible grid line.
//!
//! ## Verdict
//!
//! Averaged over all eight scan lines, first match wins:
//!
//! | Verdict   | Average contrast | Average peaks |
//! |-----------|------------------|---------------|
//! | Excellent | > 5.0            | > 3           |
//! | Good      | > 3.0            | > 2           |
//! | Weak      | > 1.5            | any           |
//! | Invisible | otherwise        |               |

use serde::{Deserialize, Serialize};

use crate::analysis::luminance::LuminanceRef;
use crate::stats;

/// Lowest floor level used as a contrast divisor.
pub const MIN_FLOOR_LEVEL: f64 = 0.001;

const FLOOR_PERCENTILE: f64 = 0.20;
const LINE_PERCENTILE: f64 = 0.90;
const PEAK_THRESHOLD_FRACTION: f64 = 0.3;

/// Direction of a scan line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanAxis {
    /// A row at a fraction of the image height.
    Horizontal,
    /// A column at a fraction of the image width.
    Vertical,
}

/// Fixed scan positions in report order: `(name, axis, fraction)`.
pub const SCAN_LINES: [(&str, ScanAxis, f64); 8] = [
    ("h_40%", ScanAxis::Horizontal, 0.40),
    ("h_45%", ScanAxis::Horizontal, 0.45),
    ("h_50%", ScanAxis::Horizontal, 0.50),
    ("h_55%", ScanAxis::Horizontal, 0.55),
    ("h_60%", ScanAxis::Horizontal, 0.60),
    ("v_40%", ScanAxis::Vertical, 0.40),
    ("v_50%", ScanAxis::Vertical, 0.50),
    ("v_60%", ScanAxis::Vertical, 0.60),
];

/// Measurements for one scan line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanLineResult {
    pub name: String,
    pub axis: ScanAxis,
    /// Floor level (20th percentile), 0-100.
    pub floor_brightness: f64,
    /// Line level (90th percentile), 0-100.
    pub line_brightness: f64,
    /// Line level over (clamped) floor level.
    pub contrast_ratio: f64,
    /// Rising edges through the peak threshold.
    pub peak_count: usize,
}

/// Overall grid visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GridVerdict {
    Excellent,
    Good,
    Weak,
    Invisible,
}

impl GridVerdict {
    /// Classify averaged scan line measurements.
    #[must_use]
    pub fn from_averages(avg_contrast: f64, avg_peaks: f64) -> Self {
        if avg_contrast > 5.0 && avg_peaks > 3.0 {
            Self::Excellent
        } else if avg_contrast > 3.0 && avg_peaks > 2.0 {
            Self::Good
        } else if avg_contrast > 1.5 {
            Self::Weak
        } else {
            Self::Invisible
        }
    }

    /// Human-readable explanation.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "grid lines are clearly visible with strong contrast",
            Self::Good => "grid lines visible but could be stronger",
            Self::Weak => "grid lines barely distinguishable from floor",
            Self::Invisible => "grid lines cannot be detected above floor noise",
        }
    }
}

impl std::fmt::Display for GridVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "EXCELLENT"),
            Self::Good => write!(f, "GOOD"),
            Self::Weak => write!(f, "WEAK"),
            Self::Invisible => write!(f, "INVISIBLE"),
        }
    }
}

/// All scan lines plus their averages and the derived verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridReport {
    /// One entry per scan line, in [`SCAN_LINES`] order.
    pub scan_lines: Vec<ScanLineResult>,
    pub avg_contrast: f64,
    pub avg_peaks: f64,
    pub verdict: GridVerdict,
}

/// Count rising edges of `sequence[i] > threshold`.
///
/// A run of consecutive samples above the threshold counts once, and a
/// sequence that starts above the threshold does not count its first run.
///
/// # Example
///
/// ```
/// use screenshot_eval::analysis::grid::count_peaks;
///
/// assert_eq!(count_peaks(&[0.0, 1.0, 1.0, 0.0, 1.0], 0.5), 2);
/// assert_eq!(count_peaks(&[0.3; 10], 0.1), 0);
/// ```
#[must_use]
pub fn count_peaks(sequence: &[f32], threshold: f64) -> usize {
    sequence
        .windows(2)
        .filter(|w| f64::from(w[0]) <= threshold && f64::from(w[1]) > threshold)
        .count()
}

/// Measure one 1-D luminance sequence.
#[must_use]
pub fn measure_scan_line(name: &str, axis: ScanAxis, sequence: &[f32]) -> ScanLineResult {
    let sorted = stats::sorted_copy(sequence);
    let floor_level = stats::percentile_sorted(&sorted, FLOOR_PERCENTILE).max(MIN_FLOOR_LEVEL);
    let line_level = stats::percentile_sorted(&sorted, LINE_PERCENTILE);
    let threshold = floor_level + (line_level - floor_level) * PEAK_THRESHOLD_FRACTION;
    // A line darker than the clamped floor reads as no contrast at all (1.0), not below it.
    let contrast_ratio = line_level.max(floor_level) / floor_level;

    ScanLineResult {
        name: name.to_string(),
        axis,
        floor_brightness: floor_level * 100.0,
        line_brightness: line_level * 100.0,
        contrast_ratio,
        peak_count: count_peaks(sequence, threshold),
    }
}

/// Scan all fixed rows and columns of a luminance map.
#[must_use]
pub fn analyze_grid(luma: LuminanceRef<'_>) -> GridReport {
    let (width, height) = (luma.width(), luma.height());

    let scan_lines: Vec<ScanLineResult> = SCAN_LINES
        .iter()
        .map(|&(name, axis, fraction)| {
            let sequence: Vec<f32> = match axis {
                ScanAxis::Horizontal => {
                    let y = fraction_index(fraction, height);
                    luma.rows().nth(y).map(<[f32]>::to_vec).unwrap_or_default()
                }
                ScanAxis::Vertical => {
                    let x = fraction_index(fraction, width);
                    luma.rows().map(|row| row[x]).collect()
                }
            };
            measure_scan_line(name, axis, &sequence)
        })
        .collect();

    let count = scan_lines.len() as f64;
    let avg_contrast = scan_lines.iter().map(|s| s.contrast_ratio).sum::<f64>() / count;
    let avg_peaks = scan_lines.iter().map(|s| s.peak_count as f64).sum::<f64>() / count;
    let verdict = GridVerdict::from_averages(avg_contrast, avg_peaks);

    tracing::debug!(avg_contrast, avg_peaks, %verdict, "grid scan");

    GridReport {
        scan_lines,
        avg_contrast,
        avg_peaks,
        verdict,
    }
}

/// Pixel index of a fractional position, truncated and kept in bounds.
fn fraction_index(fraction: f64, len: usize) -> usize {
    ((fraction * len as f64) as usize).min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgref::ImgVec;

    #[test]
    fn test_flat_sequence_has_no_peaks() {
        let flat = [0.42f32; 64];
        for threshold in [0.0, 0.2, 0.42, 0.9] {
            assert_eq!(count_peaks(&flat, threshold), 0);
        }
    }

    #[test]
    fn test_alternating_sequence_peaks() {
        // low, high, low, high, ... (even length): every high is a rising edge.
        let seq: Vec<f32> = (0..20).map(|i| if i % 2 == 0 { 0.05 } else { 0.2 }).collect();
        assert_eq!(count_peaks(&seq, 0.1), 10);

        // Starting high: the first elevated run has no rising edge.
        let seq: Vec<f32> = (0..20).map(|i| if i % 2 == 0 { 0.2 } else { 0.05 }).collect();
        assert_eq!(count_peaks(&seq, 0.1), 9);
    }

    #[test]
    fn test_run_counts_once() {
        let seq = [0.0f32, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0];
        assert_eq!(count_peaks(&seq, 0.5), 2);
    }

    #[test]
    fn test_threshold_is_strict() {
        let seq = [0.0f32, 0.5, 0.0, 0.5];
        assert_eq!(count_peaks(&seq, 0.5), 0);
    }

    #[test]
    fn test_black_line_clamps_floor() {
        let result = measure_scan_line("h_50%", ScanAxis::Horizontal, &[0.0; 32]);
        assert!((result.contrast_ratio - 1.0).abs() < 1e-9);
        assert!((result.floor_brightness - 0.1).abs() < 1e-9);
        assert_eq!(result.line_brightness, 0.0);
        assert_eq!(result.peak_count, 0);
    }

    #[test]
    fn test_alternating_line_contrast() {
        let seq: Vec<f32> = (0..100).map(|i| if i % 2 == 0 { 0.05 } else { 0.2 }).collect();
        let result = measure_scan_line("h_50%", ScanAxis::Horizontal, &seq);
        assert!((result.contrast_ratio - 4.0).abs() < 1e-3);
        assert_eq!(result.peak_count, 50);
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(GridVerdict::from_averages(6.0, 4.0), GridVerdict::Excellent);
        assert_eq!(GridVerdict::from_averages(6.0, 3.0), GridVerdict::Good);
        assert_eq!(GridVerdict::from_averages(4.0, 2.5), GridVerdict::Good);
        assert_eq!(GridVerdict::from_averages(4.0, 2.0), GridVerdict::Weak);
        assert_eq!(GridVerdict::from_averages(1.6, 0.0), GridVerdict::Weak);
        assert_eq!(GridVerdict::from_averages(1.5, 10.0), GridVerdict::Invisible);
    }

    #[test]
    fn test_analyze_grid_scan_order() {
        let img = ImgVec::new(vec![0.0f32; 40 * 30], 40, 30);
        let report = analyze_grid(img.as_ref());
        let names: Vec<_> = report.scan_lines.iter().map(|s| s.name.as_str()).collect();
        let expected: Vec<_> = SCAN_LINES.iter().map(|s| s.0).collect();
        assert_eq!(names, expected);
        assert_eq!(report.verdict, GridVerdict::Invisible);
        assert!((report.avg_contrast - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_scan_uses_column() {
        // Column stripes: every other row bright in column 5 (0.5 * 10).
        let (w, h) = (10, 40);
        let buf: Vec<f32> = (0..w * h)
            .map(|i| {
                let (x, y) = (i % w, i / w);
                if x == 5 && y % 2 == 1 { 0.8 } else { 0.05 }
            })
            .collect();
        let img = ImgVec::new(buf, w, h);
        let report = analyze_grid(img.as_ref());
        let v50 = report.scan_lines.iter().find(|s| s.name == "v_50%").unwrap();
        assert_eq!(v50.axis, ScanAxis::Vertical);
        assert_eq!(v50.peak_count, 20);
        let v40 = report.scan_lines.iter().find(|s| s.name == "v_40%").unwrap();
        assert_eq!(v40.peak_count, 0);
    }
}
