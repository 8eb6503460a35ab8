//! # screenshot-eval
//!
//! Quantitative image-quality metrics for rendered screenshots.
//!
//! An automated agent tuning rendering parameters (emission, bloom, grid
//! contrast, screen-space reflections) cannot look at its output. This library
//! turns a single screenshot into numbers it can act on: brightness
//! distribution, grid line contrast, emissive color coverage, regional
//! brightness, floor reflection variance, and a list of concrete issues.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use screenshot_eval::{analyze, decode::load_screenshot, report::text};
//!
//! let pixels = load_screenshot("Screenshots/latest.png")?;
//! let report = analyze(&pixels);
//!
//! println!("{}", text::render(&report));
//! for issue in &report.issues {
//!     eprintln!("{issue}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`pixels`]: Validated, normalized RGB buffers
//! - [`analysis`]: Luminance transform and the five analyzers
//! - [`report`]: Report model, issue rules and text rendering
//! - [`stats`]: Descriptive statistics
//! - [`discovery`]: Finding the latest screenshot in a directory
//! - `decode`: Loading PNG/JPEG files (feature `decode`)

pub mod analysis;
#[cfg(feature = "decode")]
pub mod decode;
pub mod discovery;
pub mod error;
pub mod pixels;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use analysis::{AnalysisConfig, analyze, analyze_with};
pub use analysis::color::{ColorCategory, ColorReport};
pub use analysis::distribution::{BrightnessBand, DistributionReport};
pub use analysis::grid::{GridReport, GridVerdict, ScanLineResult};
pub use analysis::luminance::LuminanceMap;
pub use analysis::reflection::{FloorVariation, ReflectionReport};
pub use analysis::regions::{Region, RegionReport};
pub use error::{Error, Result};
pub use pixels::PixelBuffer;
pub use report::{Issue, ScreenshotReport};
