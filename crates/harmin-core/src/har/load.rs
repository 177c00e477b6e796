//! Read a HAR file from disk into the typed model.

use anyhow::{Context, Result};
use std::path::Path;

use super::parse::HarLog;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads and parses a HAR file. A leading UTF-8 byte-order mark is tolerated.
pub fn load_har(path: &Path) -> Result<HarLog> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read HAR file: {}", path.display()))?;
    let har = parse_har(&bytes).with_context(|| format!("parse HAR JSON: {}", path.display()))?;
    tracing::debug!(
        entries = har.log.entries.len(),
        "loaded HAR file {}",
        path.display()
    );
    Ok(har)
}

/// Parses HAR JSON from memory.
pub fn parse_har(bytes: &[u8]) -> Result<HarLog> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(serde_json::from_slice(body)?)
}
