//! `harmin --input <har> --output <path>`: run the transform and report sizes.

use anyhow::Result;
use harmin_core::config::OutputFormat;
use harmin_core::filter::FilterOptions;
use harmin_core::output::{
    build_prompt, count_renderings, output_path, render, write_output, TokenCounter,
};
use harmin_core::pipeline::process_har_file;
use std::path::PathBuf;

/// Everything one run needs, after merging CLI flags with the config file.
#[derive(Debug, Clone)]
pub struct MinimizeSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub embed_prompt: bool,
    pub filter: FilterOptions,
}

/// Runs the transform, prints the preamble and token counts, and writes the
/// output file. Returns the path that was written.
pub fn run_minimize(settings: &MinimizeSettings) -> Result<PathBuf> {
    let doc = process_har_file(&settings.input, &settings.filter)?;

    let counter = TokenCounter::cl100k()?;
    let report = count_renderings(&counter, &doc)?;

    let prompt = build_prompt(&doc, settings.format, settings.filter.exclude_static);
    println!("{prompt}");
    println!("{report}");

    let path = output_path(&settings.output, settings.format);
    let payload = render(&doc, settings.format)?;
    let embedded = settings.embed_prompt.then_some(prompt.as_str());
    write_output(&path, embedded, &payload)?;

    tracing::info!(
        entries = doc.entries.len(),
        output = %path.display(),
        "minimized HAR"
    );
    println!("Wrote {}", path.display());
    Ok(path)
}
