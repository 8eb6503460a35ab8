//! Screenshot analysis command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use screenshot_eval::decode::load_screenshot;
use screenshot_eval::discovery::latest_screenshot;
use screenshot_eval::report::text;
use screenshot_eval::{AnalysisConfig, ScreenshotReport, analyze_with};

#[derive(Serialize)]
struct PathReport<'a> {
    path: String,
    report: &'a ScreenshotReport,
}

pub fn run(paths: Vec<PathBuf>, dir: &Path, json: bool, sequential: bool) -> Result<()> {
    let paths = if paths.is_empty() {
        let latest = latest_screenshot(dir)
            .with_context(|| format!("No screenshot given and none found in {}", dir.display()))?;
        eprintln!(
            "Auto-detected: {}",
            latest.file_name().unwrap_or_default().to_string_lossy()
        );
        vec![latest]
    } else {
        paths
    };

    let config = AnalysisConfig::builder().parallel(!sequential).build();

    // Screenshots are independent; analyze them in parallel, print in input order.
    let reports: Vec<(PathBuf, ScreenshotReport)> = paths
        .into_par_iter()
        .map(|path| {
            let pixels = load_screenshot(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            let report = analyze_with(&pixels, &config);
            Ok((path, report))
        })
        .collect::<Result<_>>()?;

    if json {
        let value: Vec<PathReport<'_>> = reports
            .iter()
            .map(|(path, report)| PathReport {
                path: path.display().to_string(),
                report,
            })
            .collect();
        let out = if value.len() == 1 {
            serde_json::to_string_pretty(&value[0])?
        } else {
            serde_json::to_string_pretty(&value)?
        };
        println!("{out}");
        return Ok(());
    }

    for (i, (path, report)) in reports.iter().enumerate() {
        if reports.len() > 1 {
            if i > 0 {
                println!();
            }
            println!("{}", path.display());
        }
        println!("{}", text::render(report));
    }

    Ok(())
}
