//! Screenshot discovery in a directory.
//!
//! Screenshots are expected to carry sortable names (timestamps or frame
//! counters), so "latest" means last by file name, not by modification time.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension of screenshots written by the renderer.
const SCREENSHOT_EXTENSION: &str = "png";

/// List screenshots in `dir`, sorted by file name ascending.
pub fn list_screenshots(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::Discovery(format!(
            "Path does not exist: {}",
            dir.display()
        )));
    }

    if !dir.is_dir() {
        return Err(Error::Discovery(format!(
            "Path is not a directory: {}",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        Error::Discovery(format!("Failed to read directory {}: {}", dir.display(), e))
    })?;

    let mut screenshots = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::Discovery(format!("Failed to read entry in {}: {}", dir.display(), e))
        })?;
        let path = entry.path();
        if path.is_file() && is_screenshot(&path) {
            screenshots.push(path);
        }
    }

    screenshots.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = %dir.display(), count = screenshots.len(), "listed screenshots");
    Ok(screenshots)
}

/// The last screenshot in `dir` by file name.
pub fn latest_screenshot(dir: &Path) -> Result<PathBuf> {
    list_screenshots(dir)?
        .pop()
        .ok_or_else(|| Error::Discovery(format!("No screenshots found in {}", dir.display())))
}

fn is_screenshot(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SCREENSHOT_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_list_sorted_png_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "shot_002.png");
        touch(dir.path(), "shot_001.png");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "shot_003.PNG");
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let found = list_screenshots(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["shot_001.png", "shot_002.png", "shot_003.PNG"]);
    }

    #[test]
    fn test_latest() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "2024-01-02.png");
        touch(dir.path(), "2024-01-10.png");
        touch(dir.path(), "2024-01-03.png");
        let latest = latest_screenshot(dir.path()).unwrap();
        assert!(latest.ends_with("2024-01-10.png"));
    }

    #[test]
    fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "readme.md");
        assert!(matches!(latest_screenshot(dir.path()), Err(Error::Discovery(_))));
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Screenshots");
        assert!(matches!(list_screenshots(&missing), Err(Error::Discovery(_))));
    }
}
