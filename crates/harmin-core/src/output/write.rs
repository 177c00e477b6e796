//! Output path normalization and file writing (not atomic).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OutputFormat;

/// Appends `.json`/`.yaml` to `raw` unless it already ends with it.
pub fn output_path(raw: &Path, format: OutputFormat) -> PathBuf {
    let ext = format.extension();
    if raw.to_string_lossy().ends_with(ext) {
        return raw.to_path_buf();
    }
    let mut name = raw.as_os_str().to_os_string();
    name.push(ext);
    PathBuf::from(name)
}

/// Writes the optional preamble, a newline, then the payload to `path`.
pub fn write_output(path: &Path, prompt: Option<&str>, payload: &str) -> Result<()> {
    let mut contents = String::with_capacity(prompt.map_or(0, str::len) + 1 + payload.len());
    if let Some(prompt) = prompt {
        contents.push_str(prompt);
        contents.push('\n');
    }
    contents.push_str(payload);
    fs::write(path, contents).with_context(|| format!("write output: {}", path.display()))?;
    tracing::debug!(bytes = payload.len(), "wrote {}", path.display());
    Ok(())
}
