//! Analysis pipeline.
//!
//! The luminance map is derived once, then five independent analyzers read
//! it (and the color buffer) without mutation:
//!
//! - [`distribution`]: brightness bands and summary statistics
//! - [`grid`]: scan-line grid detection and verdict
//! - [`color`]: hue category percentages
//! - [`regions`]: per-region brightness
//! - [`reflection`]: floor variance as an SSR proxy
//!
//! Their outputs are combined by [`crate::report::synthesize`].

pub mod color;
pub mod distribution;
pub mod grid;
pub mod luminance;
pub mod reflection;
pub mod regions;

use crate::pixels::PixelBuffer;
use crate::report::{ScreenshotReport, synthesize};

use self::color::classify_colors;
use self::distribution::analyze_distribution;
use self::grid::analyze_grid;
use self::luminance::luminance_map;
use self::reflection::estimate_reflection;
use self::regions::sample_regions;

/// Configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Run the analyzers on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for [`AnalysisConfig`].
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    parallel: Option<bool>,
}

impl AnalysisConfigBuilder {
    /// Run analyzers in parallel (default) or sequentially.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AnalysisConfig {
        let defaults = AnalysisConfig::default();
        AnalysisConfig {
            parallel: self.parallel.unwrap_or(defaults.parallel),
        }
    }
}

/// Analyze a screenshot with the default configuration.
#[must_use]
pub fn analyze(pixels: &PixelBuffer) -> ScreenshotReport {
    analyze_with(pixels, &AnalysisConfig::default())
}

/// Analyze a screenshot.
///
/// The result does not depend on `config.parallel`.
#[must_use]
pub fn analyze_with(pixels: &PixelBuffer, config: &AnalysisConfig) -> ScreenshotReport {
    let luma = luminance_map(pixels);
    let view = luma.as_ref();

    let (distribution, grid, colors, regions, reflection) = if config.parallel {
        let ((distribution, grid), ((colors, regions), reflection)) = rayon::join(
            || rayon::join(|| analyze_distribution(view), || analyze_grid(view)),
            || {
                rayon::join(
                    || rayon::join(|| classify_colors(pixels), || sample_regions(view)),
                    || estimate_reflection(view),
                )
            },
        );
        (distribution, grid, colors, regions, reflection)
    } else {
        (
            analyze_distribution(view),
            analyze_grid(view),
            classify_colors(pixels),
            sample_regions(view),
            estimate_reflection(view),
        )
    };

    let report = synthesize(
        (pixels.width(), pixels.height()),
        distribution,
        grid,
        colors,
        regions,
        reflection,
    );
    tracing::info!(
        width = report.width,
        height = report.height,
        verdict = %report.grid.verdict,
        issues = report.issues.len(),
        "screenshot analyzed"
    );
    report
}
