//! Rendering, token sizing, prompt text and file output for a `MinimizedHar`.

mod prompt;
mod serialize;
mod tokens;
mod write;

pub use prompt::build_prompt;
pub use serialize::{render, to_json, to_yaml};
pub use tokens::{count_renderings, TokenCounter, TokenReport};
pub use write::{output_path, write_output};
