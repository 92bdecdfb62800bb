// SPDX-License-Identifier: MPL-2.0

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Writes an output file, creating parent directories as needed.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
