use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Destination for "open the markup". The desk pops a dialog; a terminal
/// hands the operator a file path for their browser instead.
pub trait MarkupViewer {
    fn open(&self, markup: &str) -> Result<PathBuf>;
}

/// Writes the markup body to a temp file and reports where it landed.
pub struct TempFileViewer;

impl MarkupViewer for TempFileViewer {
    fn open(&self, markup: &str) -> Result<PathBuf> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos();
        let path = std::env::temp_dir().join(format!(
            "activity-markup-{}-{}.html",
            std::process::id(),
            nanos
        ));

        std::fs::write(&path, markup)
            .with_context(|| format!("Failed to write markup to {}", path.display()))?;
        Ok(path)
    }
}
