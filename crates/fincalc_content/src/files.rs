use std::fs;
use std::path::Path;

use fincalc_core::{Article, InternalLink, Result};

pub fn load_articles(path: impl AsRef<Path>) -> Result<Vec<Article>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_articles(path: impl AsRef<Path>, articles: &[Article]) -> Result<()> {
    let raw = serde_json::to_string_pretty(articles)?;
    fs::write(path, raw)?;
    Ok(())
}

pub fn load_links(path: impl AsRef<Path>) -> Result<Vec<InternalLink>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
