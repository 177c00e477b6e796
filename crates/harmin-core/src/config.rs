use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions (matched against the query-stripped URL) treated as static assets.
pub const DEFAULT_STATIC_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".png", ".svg", ".jpg", ".jpeg", ".gif", ".woff", ".woff2", ".ttf",
];

/// Header names (lowercase) dropped by `--no-standard-headers`.
pub const DEFAULT_STANDARD_HEADERS: &[&str] = &[
    "host",
    "content-length",
    "content-type",
    "user-agent",
    "accept",
    "connection",
];

/// Serialized payload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// File extension (with leading dot) appended to output paths.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => ".json",
            OutputFormat::Yaml => ".yaml",
        }
    }
}

/// Global configuration loaded from `~/.config/harmin/config.toml`.
///
/// Boolean switches here are defaults; CLI flags can only turn them on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarminConfig {
    /// Default output format when `--format` is not given.
    pub format: OutputFormat,
    /// Drop entries whose URL path ends in a static extension.
    pub exclude_static: bool,
    /// Drop request/response cookies and skip the cookie table.
    pub exclude_cookies: bool,
    /// Drop common boilerplate headers (see `standard_headers`).
    pub exclude_standard_headers: bool,
    /// Write the instructional preamble ahead of the payload in the output file.
    pub embed_prompt: bool,
    pub static_extensions: Vec<String>,
    /// Matched case-insensitively.
    pub standard_headers: Vec<String>,
}

impl Default for HarminConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            exclude_static: false,
            exclude_cookies: false,
            exclude_standard_headers: false,
            embed_prompt: true,
            static_extensions: DEFAULT_STATIC_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            standard_headers: DEFAULT_STANDARD_HEADERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Default config file location. Nothing is created on disk.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs =
        xdg::BaseDirectories::with_prefix("harmin").context("locate XDG config directory")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from the default location, creating a default file if none exists.
///
/// A config location that cannot be resolved or written is not fatal: the
/// built-in defaults are used and a warning is logged.
pub fn load_or_init() -> Result<HarminConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(err) => {
            tracing::warn!("using built-in config defaults: {err:#}");
            Ok(HarminConfig::default())
        }
    }
}

/// Like [`load_or_init`] for an explicit path. An existing file that cannot be
/// read or parsed is still an error.
pub fn load_or_init_at(path: &Path) -> Result<HarminConfig> {
    if path.exists() {
        return load_from(path);
    }

    let default_cfg = HarminConfig::default();
    match write_config(path, &default_cfg) {
        Ok(()) => tracing::info!("created default config at {}", path.display()),
        Err(err) => tracing::warn!("using built-in config defaults: {err:#}"),
    }
    Ok(default_cfg)
}

/// Write `cfg` as TOML to `path`, creating parent directories.
pub fn write_config(path: &Path, cfg: &HarminConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)
        .with_context(|| format!("serialize config: {}", path.display()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir: {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<HarminConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: HarminConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
