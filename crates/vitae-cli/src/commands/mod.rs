pub mod analyze;
pub mod predict;
pub mod quick;
pub mod similarity;

use anyhow::{Context, Result};
use std::path::Path;

/// Read an input file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}
