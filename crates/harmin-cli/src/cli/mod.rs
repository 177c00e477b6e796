//! CLI for harmin, the HAR minimizer.

mod minimize;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use harmin_core::config::{self, HarminConfig, OutputFormat};
use harmin_core::filter::FilterOptions;
use std::path::PathBuf;

use minimize::{run_minimize, MinimizeSettings};

/// Top-level CLI: filter, deduplicate and serialize a HAR capture.
#[derive(Debug, Parser)]
#[command(name = "harmin")]
#[command(
    about = "Shrink a HAR capture into compact JSON/YAML for LLM analysis",
    long_about = None
)]
pub struct Cli {
    /// HAR file to read.
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output file; `.json`/`.yaml` is appended if missing.
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Output format (default from config, else json).
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Exclude static resources (css, js, images, fonts).
    #[arg(long)]
    pub no_static: bool,

    /// Exclude cookies.
    #[arg(long)]
    pub no_cookies: bool,

    /// Exclude standard headers (host, content-length, content-type, user-agent, accept,
    /// connection).
    #[arg(long)]
    pub no_standard_headers: bool,

    /// Write only the payload, without the instructional preamble.
    #[arg(long)]
    pub payload_only: bool,

    /// Config file to use instead of ~/.config/harmin/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        run_minimize(&cli.settings(cfg))?;
        Ok(())
    }

    /// Merges flags over the config: switches can only turn exclusions on.
    pub fn settings(&self, cfg: HarminConfig) -> MinimizeSettings {
        let format = self.format.map(OutputFormat::from).unwrap_or(cfg.format);
        let embed_prompt = cfg.embed_prompt && !self.payload_only;
        let mut filter = FilterOptions::from_config(&cfg);
        filter.exclude_static |= self.no_static;
        filter.exclude_cookies |= self.no_cookies;
        filter.exclude_standard_headers |= self.no_standard_headers;

        MinimizeSettings {
            input: self.input.clone(),
            output: self.output.clone(),
            format,
            embed_prompt,
            filter,
        }
    }
}
