//! Entry filter: selects HAR entries and prunes them into `FilteredEntry`s.
//!
//! Static assets can be skipped, cookies and standard headers dropped, bodies
//! decoded (base64 or URL-encoded) and multipart bodies split into named parts.
//! Kept entries are renumbered densely from 1 in original order.

mod asset;
mod decode;
mod headers;
mod multipart;

pub use asset::{is_static_asset, strip_query};
pub use decode::{decode_body, url_unescape};
pub use headers::{convert_cookies, convert_headers, convert_query, find_header};
pub use multipart::{boundary_from_content_type, parse_multipart};

use crate::config::HarminConfig;
use crate::error::HarError;
use crate::har::{HarEntry, HarPostData, HarRequest, HarResponse};
use crate::model::{Entries, FilteredEntry, FilteredRequest, FilteredResponse, PostData};

/// Switches and lists controlling which entries and fields survive.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub exclude_static: bool,
    pub exclude_cookies: bool,
    pub exclude_standard_headers: bool,
    pub static_extensions: Vec<String>,
    pub standard_headers: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::from_config(&HarminConfig::default())
    }
}

impl FilterOptions {
    pub fn from_config(cfg: &HarminConfig) -> Self {
        Self {
            exclude_static: cfg.exclude_static,
            exclude_cookies: cfg.exclude_cookies,
            exclude_standard_headers: cfg.exclude_standard_headers,
            static_extensions: cfg.static_extensions.clone(),
            standard_headers: cfg.standard_headers.clone(),
        }
    }

    fn standard_headers(&self) -> Option<&[String]> {
        self.exclude_standard_headers.then_some(self.standard_headers.as_slice())
    }
}

/// Filters `entries` in order and returns the kept ones keyed by ordinal (from 1).
pub fn filter_entries(entries: &[HarEntry], opts: &FilterOptions) -> Result<Entries, HarError> {
    let mut out = Entries::new();
    let mut skipped = 0usize;

    for entry in entries {
        if opts.exclude_static && is_static_asset(&entry.request.url, &opts.static_extensions) {
            tracing::debug!(url = %entry.request.url, "skipping static asset");
            skipped += 1;
            continue;
        }

        let filtered = FilteredEntry {
            comment: entry.comment.clone().unwrap_or_default(),
            request: filter_request(&entry.request, opts)?,
            response: filter_response(&entry.response, opts),
        };
        out.insert(out.len() + 1, filtered);
    }

    tracing::info!(kept = out.len(), skipped, "filtered HAR entries");
    Ok(out)
}

fn filter_request(request: &HarRequest, opts: &FilterOptions) -> Result<FilteredRequest, HarError> {
    let cookies = match (&request.cookies, opts.exclude_cookies) {
        (Some(cookies), false) => Some(convert_cookies(cookies)),
        _ => None,
    };

    let post_data = request
        .post_data
        .as_ref()
        .map(|data| decode_post_data(request, data))
        .transpose()?;

    Ok(FilteredRequest {
        cookies,
        headers: convert_headers(&request.headers, opts.standard_headers()),
        method: request.method.clone(),
        post_data,
        query_string: request.query_string.as_deref().map(convert_query),
        url: request.url.clone(),
    })
}

fn filter_response(response: &HarResponse, opts: &FilterOptions) -> FilteredResponse {
    let cookies = match (&response.cookies, opts.exclude_cookies) {
        (Some(cookies), false) => Some(convert_cookies(cookies)),
        _ => None,
    };

    FilteredResponse {
        content: response
            .content
            .as_ref()
            .map(|c| decode_body(c.text.as_deref().unwrap_or_default())),
        cookies,
        headers: convert_headers(&response.headers, opts.standard_headers()),
        redirect_url: response.redirect_url.clone(),
        status: response.status,
    }
}

fn decode_post_data(request: &HarRequest, data: &HarPostData) -> Result<PostData, HarError> {
    let text = data.text.as_deref().unwrap_or_default();
    let is_multipart = data
        .mime_type
        .as_deref()
        .is_some_and(|m| m.contains("multipart"));
    if !is_multipart {
        return Ok(PostData::Text(decode_body(text)));
    }

    let content_type = find_header(&request.headers, "content-type").ok_or_else(|| {
        HarError::MissingContentType {
            url: request.url.clone(),
        }
    })?;
    let boundary =
        boundary_from_content_type(content_type).ok_or_else(|| HarError::MissingBoundary {
            url: request.url.clone(),
            content_type: content_type.to_string(),
        })?;
    let parts = parse_multipart(text, boundary, &request.url)?;
    Ok(PostData::Multipart(parts))
}
