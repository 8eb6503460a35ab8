//! Plain-text rendering of a [`ScreenshotReport`].

use std::fmt::Write;

use super::ScreenshotReport;

const RULE_WIDTH: usize = 70;

/// Render the human-readable report.
#[must_use]
pub fn render(report: &ScreenshotReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "── {title} {:─<width$}", "", width = 46usize.saturating_sub(title.len()))
}

fn write_report(out: &mut String, report: &ScreenshotReport) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "  SCREENSHOT ANALYSIS REPORT")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "  Resolution: {}x{}", report.width, report.height)?;
    writeln!(out)?;

    let dist = &report.distribution;
    section(out, "BRIGHTNESS DISTRIBUTION")?;
    for share in &dist.bands {
        writeln!(out, "  {:25}: {:6.1}%", share.band.label(), share.percent)?;
    }
    for (name, value) in [
        ("mean", dist.mean),
        ("median", dist.median),
        ("p95", dist.p95),
        ("p99", dist.p99),
        ("max", dist.max),
    ] {
        writeln!(out, "  {name:25}: {value:6.1}%")?;
    }
    writeln!(out)?;

    let grid = &report.grid;
    section(out, "GRID LINE DETECTION (scan lines through floor)")?;
    writeln!(
        out,
        "  {:10} {:>8} {:>8} {:>10} {:>6}",
        "Scan", "Floor%", "Line%", "Contrast", "Peaks"
    )?;
    for line in &grid.scan_lines {
        writeln!(
            out,
            "  {:10} {:7.1}% {:7.1}% {:9.1}x {:5}",
            line.name, line.floor_brightness, line.line_brightness, line.contrast_ratio, line.peak_count
        )?;
    }
    writeln!(
        out,
        "  {:10} {:>8} {:>8} {:9.1}x {:5.0}",
        "AVERAGE", "", "", grid.avg_contrast, grid.avg_peaks
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "  GRID VERDICT: {} — {}",
        grid.verdict,
        grid.verdict.description()
    )?;
    writeln!(out)?;

    section(out, "COLOR CHANNELS")?;
    for share in &report.colors.categories {
        writeln!(
            out,
            "  {:25}: {:5.1}%  {}",
            share.category.label(),
            share.percent,
            bar(share.percent)
        )?;
    }
    writeln!(out)?;

    section(out, "REGION BRIGHTNESS")?;
    for stats in &report.regions.regions {
        let name = stats.region.label();
        writeln!(out, "  {:25}: {:5.1}%", format!("{name}_mean"), stats.mean)?;
        if let Some(p95) = stats.p95 {
            writeln!(out, "  {:25}: {:5.1}%", format!("{name}_p95"), p95)?;
        }
    }
    writeln!(out)?;

    let refl = &report.reflection;
    section(out, "REFLECTIONS (SSR)")?;
    writeln!(out, "  {:25}: {}", "floor_brightness_std", refl.floor_brightness_std)?;
    writeln!(out, "  {:25}: {}", "floor_max_brightness", refl.floor_max_brightness)?;
    writeln!(out, "  {:25}: {}", "floor_has_variation", refl.floor_has_variation)?;
    writeln!(out)?;

    section(out, "OVERALL ASSESSMENT")?;
    if report.issues.is_empty() {
        writeln!(out, "  ✓ No major issues detected")?;
    } else {
        for issue in &report.issues {
            writeln!(out, "  ✗ {issue}")?;
        }
    }
    write!(out, "{rule}")
}

/// Two block characters per percent, or a dot for negligible shares.
fn bar(percent: f64) -> String {
    if percent > 0.1 {
        "█".repeat((percent * 2.0) as usize)
    } else {
        "·".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.0), "·");
        assert_eq!(bar(0.1), "·");
        assert_eq!(bar(2.6), "█████");
    }

    #[test]
    fn test_section_header() {
        let mut out = String::new();
        section(&mut out, "COLOR CHANNELS").unwrap();
        assert!(out.starts_with("── COLOR CHANNELS ─"));
        assert!(out.ends_with("─\n"));
    }
}
