use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

/// Write the full incident record sequence as one JSON array, replacing
/// any existing file at the destination.
pub fn write_log(records: &[serde_json::Value], destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let file = std::fs::File::create(destination)
        .with_context(|| format!("failed to create {}", destination.display()))?;
    serde_json::to_writer(BufWriter::new(file), records)
        .with_context(|| format!("failed to write {}", destination.display()))?;
    Ok(())
}
