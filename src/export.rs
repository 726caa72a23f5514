

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::{KeywordError, Result};


pub fn render_keywords(keywords: &[String]) -> String {
    keywords.join("\n")
}


pub fn export_filename(now: DateTime<Local>) -> String {
    format!("keywords_{}.txt", now.format("%Y-%m-%d_%H%M%S"))
}


/// Writes one keyword per line into a timestamped file under `dir` and returns its path.
pub fn save_keywords(dir: &Path, keywords: &[String]) -> Result<PathBuf> {
    let text = render_keywords(keywords);
    if text.trim().is_empty() {
        return Err(KeywordError::Export("no keywords to save".to_string()));
    }

    let path = dir.join(export_filename(Local::now()));
    std::fs::write(&path, text)?;
    info!("Saved {} keywords to {}", keywords.len(), path.display());
    Ok(path)
}
