//! Hue classification of emissive colors.
//!
//! Categories are independent predicates over the raw RGB channels, so a pixel
//! may count toward several of them and the percentages need not sum to 100.

use rgb::RGB;
use serde::{Deserialize, Serialize};

use crate::pixels::PixelBuffer;

/// Color category detected in a screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCategory {
    /// Grid emissives: green and blue present, red suppressed.
    Cyan,
    /// Red/orange trail walls.
    Warm,
    /// Red and blue present, green suppressed.
    Purple,
    /// Green-dominant trails.
    Green,
    /// All channels bright: node dots and bloom cores.
    WhiteHot,
}

/// Category predicates in report order.
pub const COLOR_CATEGORIES: [(ColorCategory, fn(RGB<f32>) -> bool); 5] = [
    (ColorCategory::Cyan, is_cyan),
    (ColorCategory::Warm, is_warm),
    (ColorCategory::Purple, is_purple),
    (ColorCategory::Green, is_green),
    (ColorCategory::WhiteHot, is_white_hot),
];

fn is_cyan(p: RGB<f32>) -> bool {
    p.g > 0.1 && p.b > 0.1 && p.r < p.g * 0.3
}

fn is_warm(p: RGB<f32>) -> bool {
    p.r > 0.1 && p.r > p.g * 1.5 && p.r > p.b * 1.5
}

fn is_purple(p: RGB<f32>) -> bool {
    p.r > 0.1 && p.b > 0.1 && p.g < p.r * 0.5
}

fn is_green(p: RGB<f32>) -> bool {
    p.g > 0.1 && p.g > p.r * 2.0 && p.g > p.b * 1.5
}

fn is_white_hot(p: RGB<f32>) -> bool {
    p.r > 0.5 && p.g > 0.5 && p.b > 0.5
}

impl ColorCategory {
    /// Whether a pixel belongs to this category.
    #[must_use]
    pub fn matches(self, pixel: RGB<f32>) -> bool {
        let predicate = COLOR_CATEGORIES[self as usize].1;
        predicate(pixel)
    }

    /// Report label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cyan => "cyan_teal_%",
            Self::Warm => "warm_red_orange_%",
            Self::Purple => "purple_magenta_%",
            Self::Green => "green_%",
            Self::WhiteHot => "white_hot_%",
        }
    }
}

impl std::fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Share of pixels matching one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: ColorCategory,
    /// Percentage of all pixels, 0-100.
    pub percent: f64,
}

/// Percentage of pixels in each (overlapping) color category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// One entry per category, in [`COLOR_CATEGORIES`] order.
    pub categories: Vec<CategoryShare>,
}

impl ColorReport {
    /// Percentage of pixels matching `category`.
    #[must_use]
    pub fn percent(&self, category: ColorCategory) -> f64 {
        self.categories
            .iter()
            .find(|share| share.category == category)
            .map_or(0.0, |share| share.percent)
    }
}

/// Classify every pixel against every category.
#[must_use]
pub fn classify_colors(pixels: &PixelBuffer) -> ColorReport {
    let mut counts = [0usize; COLOR_CATEGORIES.len()];
    for pixel in pixels.pixels() {
        for (count, (_, matches)) in counts.iter_mut().zip(COLOR_CATEGORIES.iter()) {
            if matches(pixel) {
                *count += 1;
            }
        }
    }

    let total = pixels.len() as f64;
    let categories = COLOR_CATEGORIES
        .iter()
        .zip(counts)
        .map(|(&(category, _), count)| CategoryShare {
            category,
            percent: count as f64 / total * 100.0,
        })
        .collect();
    let report = ColorReport { categories };

    tracing::debug!(
        cyan = report.percent(ColorCategory::Cyan),
        white_hot = report.percent(ColorCategory::WhiteHot),
        "color classification"
    );
    report
}
