//! Token sizing with the cl100k_base BPE.
//!
//! The counter is built once per run and passed to whoever needs it.

use anyhow::{Context, Result};
use std::fmt;
use tiktoken_rs::{cl100k_base, CoreBPE};

use crate::model::MinimizedHar;

use super::serialize::{to_json, to_yaml};

pub struct TokenCounter {
    bpe: CoreBPE,
}

impl TokenCounter {
    /// Loads the cl100k_base encoding (bundled with tiktoken-rs, no network).
    pub fn cl100k() -> Result<Self> {
        let bpe = cl100k_base().map_err(|e| anyhow::anyhow!("{e}")).context("load cl100k_base")?;
        Ok(Self { bpe })
    }

    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

/// Token counts of both renderings of the same document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenReport {
    pub json: usize,
    pub yaml: usize,
}

impl fmt::Display for TokenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total tokens in JSON format: {}, in YAML format: {}",
            self.json, self.yaml
        )
    }
}

/// Renders `doc` as JSON and YAML and counts the tokens of each.
pub fn count_renderings(counter: &TokenCounter, doc: &MinimizedHar) -> Result<TokenReport> {
    let report = TokenReport {
        json: counter.count(&to_json(doc)?),
        yaml: counter.count(&to_yaml(doc)?),
    };
    tracing::info!(json = report.json, yaml = report.yaml, "counted tokens");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entries, ReferenceTable};

    #[test]
    fn counts_known_text() {
        let counter = TokenCounter::cl100k().unwrap();
        assert_eq!(counter.count("hello world"), 2);
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn report_covers_both_renderings() {
        let counter = TokenCounter::cl100k().unwrap();
        let doc = MinimizedHar {
            cookie_dict: None,
            entries: Entries::new(),
            header_dict: ReferenceTable::new(),
        };
        let report = count_renderings(&counter, &doc).unwrap();
        assert_eq!(report.json, counter.count(r#"{"entries":{},"header_dict":{}}"#));
        assert!(report.yaml > 0);
        assert_eq!(
            report.to_string(),
            format!(
                "Total tokens in JSON format: {}, in YAML format: {}",
                report.json, report.yaml
            )
        );
    }
}
