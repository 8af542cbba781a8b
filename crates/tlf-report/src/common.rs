//! Shared helpers for the output writers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Create the parent directory of an output path when it does not exist yet.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
