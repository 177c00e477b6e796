//! HAR (HTTP Archive) loading.
//!
//! Parses the `log.entries` array of a HAR 1.2 document into typed structs.
//! Missing required fields (`request.url`, `request.method`, `response.status`)
//! are parse errors.

mod load;
mod parse;

pub use load::{load_har, parse_har};
pub use parse::{HarContent, HarEntry, HarLog, HarNameValue, HarPostData, HarRequest, HarResponse};
