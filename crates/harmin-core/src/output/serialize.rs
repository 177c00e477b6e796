//! JSON and YAML renderings. Keys come out sorted because the model declares
//! fields in key order and uses ordered maps for entries and tables.

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::model::MinimizedHar;

/// Compact single-line JSON; non-ASCII characters are written as is.
pub fn to_json(doc: &MinimizedHar) -> Result<String> {
    serde_json::to_string(doc).context("serialize JSON")
}

pub fn to_yaml(doc: &MinimizedHar) -> Result<String> {
    serde_yaml::to_string(doc).context("serialize YAML")
}

pub fn render(doc: &MinimizedHar, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(doc),
        OutputFormat::Yaml => to_yaml(doc),
    }
}
