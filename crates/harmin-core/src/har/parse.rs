//! HAR 1.2 structures: only the fields the filter reads.
//!
//! Anything else (timings, cache, sizes, httpVersion, statusText) is ignored
//! at deserialization time, which is how those fields are dropped.

use serde::Deserialize;

/// Root HAR document (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarRequest {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<HarNameValue>,
    #[serde(default)]
    pub cookies: Option<Vec<HarNameValue>>,
    #[serde(default)]
    pub query_string: Option<Vec<HarNameValue>>,
    #[serde(default)]
    pub post_data: Option<HarPostData>,
}

#[derive(Debug, Deserialize)]
pub struct HarResponse {
    pub status: i64,
    #[serde(default)]
    pub headers: Vec<HarNameValue>,
    #[serde(default)]
    pub cookies: Option<Vec<HarNameValue>>,
    #[serde(default)]
    pub content: Option<HarContent>,
    #[serde(default, rename = "redirectURL")]
    pub redirect_url: Option<String>,
}

/// Header, cookie or query parameter: all three share `name`/`value`.
#[derive(Debug, Deserialize)]
pub struct HarNameValue {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarPostData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HarContent {
    #[serde(default)]
    pub text: Option<String>,
}
