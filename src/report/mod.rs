//! Screenshot report and rule-based issue synthesis.
//!
//! [`synthesize`] turns the five analyzer outputs into a [`ScreenshotReport`]
//! with an ordered list of [`Issue`]s. Every rule in [`ISSUE_RULES`] is
//! evaluated independently; all that fire are reported, in table order.

pub mod text;

use serde::{Deserialize, Serialize};

use crate::analysis::color::{ColorCategory, ColorReport};
use crate::analysis::distribution::{BrightnessBand, DistributionReport};
use crate::analysis::grid::GridReport;
use crate::analysis::reflection::{FloorVariation, ReflectionReport};
use crate::analysis::regions::RegionReport;

/// A problem detected in the screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    /// More than 70% of pixels are true black.
    TooDark,
    /// Mostly black with almost nothing in the grid-line brightness band.
    NoGridFloor,
    /// Average grid contrast below 2.
    LowContrast,
    /// Less than 1% cyan pixels.
    NoCyan,
    /// Floor brightness does not vary.
    NoSsr,
    /// More than 15% of pixels are hot.
    BloomOverload,
}

impl Issue {
    /// Short upper-case tag.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::TooDark => "TOO DARK",
            Self::NoGridFloor => "NO GRID FLOOR",
            Self::LowContrast => "LOW CONTRAST",
            Self::NoCyan => "NO CYAN",
            Self::NoSsr => "NO SSR",
            Self::BloomOverload => "BLOOM OVERLOAD",
        }
    }

    /// Actionable explanation.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::TooDark => ">70% of pixels are true black — emission values need to go up",
            Self::NoGridFloor => {
                "Almost no pixels in the grid-line brightness range (6-15%)"
            }
            Self::LowContrast => "Grid lines not distinguishable from floor",
            Self::NoCyan => "Grid emissives not registering — emission multiplier too low",
            Self::NoSsr => {
                "Floor shows no brightness variation — reflections may not be working"
            }
            Self::BloomOverload => ">15% of pixels are hot white — reduce emission or glow",
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Analyzer outputs the issue rules are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs<'a> {
    pub distribution: &'a DistributionReport,
    pub grid: &'a GridReport,
    pub colors: &'a ColorReport,
    pub reflection: &'a ReflectionReport,
}

/// Issue rules in report order.
pub const ISSUE_RULES: [(Issue, fn(&RuleInputs<'_>) -> bool); 6] = [
    (Issue::TooDark, too_dark),
    (Issue::NoGridFloor, no_grid_floor),
    (Issue::LowContrast, low_contrast),
    (Issue::NoCyan, no_cyan),
    (Issue::NoSsr, no_ssr),
    (Issue::BloomOverload, bloom_overload),
];

fn too_dark(i: &RuleInputs<'_>) -> bool {
    i.distribution.percent(BrightnessBand::Black) > 70.0
}

fn no_grid_floor(i: &RuleInputs<'_>) -> bool {
    i.distribution.percent(BrightnessBand::Black) > 50.0
        && i.distribution.percent(BrightnessBand::Dark) < 5.0
}

fn low_contrast(i: &RuleInputs<'_>) -> bool {
    i.grid.avg_contrast < 2.0
}

fn no_cyan(i: &RuleInputs<'_>) -> bool {
    i.colors.percent(ColorCategory::Cyan) < 1.0
}

fn no_ssr(i: &RuleInputs<'_>) -> bool {
    i.reflection.floor_has_variation == FloorVariation::No
}

fn bloom_overload(i: &RuleInputs<'_>) -> bool {
    i.distribution.percent(BrightnessBand::Hot) > 15.0
}

/// Evaluate every rule; no early exit.
#[must_use]
pub fn detect_issues(inputs: &RuleInputs<'_>) -> Vec<Issue> {
    ISSUE_RULES
        .iter()
        .filter(|(_, fires)| fires(inputs))
        .map(|&(issue, _)| issue)
        .collect()
}

/// Complete analysis of one screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenshotReport {
    pub width: usize,
    pub height: usize,
    pub distribution: DistributionReport,
    pub grid: GridReport,
    pub colors: ColorReport,
    pub regions: RegionReport,
    pub reflection: ReflectionReport,
    /// Detected issues; empty means no major issues.
    pub issues: Vec<Issue>,
}

impl ScreenshotReport {
    /// Whether `issue` was detected.
    #[must_use]
    pub fn has_issue(&self, issue: Issue) -> bool {
        self.issues.contains(&issue)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Combine analyzer outputs into a report.
#[must_use]
pub fn synthesize(
    (width, height): (usize, usize),
    distribution: DistributionReport,
    grid: GridReport,
    colors: ColorReport,
    regions: RegionReport,
    reflection: ReflectionReport,
) -> ScreenshotReport {
    let issues = detect_issues(&RuleInputs {
        distribution: &distribution,
        grid: &grid,
        colors: &colors,
        reflection: &reflection,
    });
    ScreenshotReport {
        width,
        height,
        distribution,
        grid,
        colors,
        regions,
        reflection,
        issues,
    }
}
