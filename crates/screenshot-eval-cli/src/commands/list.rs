//! Screenshot listing command.

use std::path::Path;

use anyhow::{Context, Result};
use screenshot_eval::discovery::list_screenshots;

pub fn run(dir: &Path) -> Result<()> {
    let screenshots = list_screenshots(dir)
        .with_context(|| format!("Failed to list screenshots in {}", dir.display()))?;

    for path in &screenshots {
        println!("{}", path.display());
    }
    println!("{} screenshots", screenshots.len());

    Ok(())
}
