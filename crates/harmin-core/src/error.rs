//! Domain errors raised while transforming HAR entries.
//!
//! IO and JSON failures are reported through `anyhow` with file context; these
//! variants cover malformed entry content that cannot be recovered locally.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarError {
    /// Multipart `postData` on a request that carries no `Content-Type` header.
    #[error("multipart body without Content-Type header: {url}")]
    MissingContentType { url: String },

    /// `Content-Type` header present but without a `boundary=` parameter.
    #[error("Content-Type has no boundary parameter ({content_type}): {url}")]
    MissingBoundary { url: String, content_type: String },

    /// A multipart part whose header block has no `name="..."` attribute.
    #[error("multipart part #{index} has no name attribute: {url}")]
    UnnamedPart { url: String, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_request() {
        let err = HarError::MissingContentType {
            url: "https://x.com/upload".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "multipart body without Content-Type header: https://x.com/upload"
        );

        let err = HarError::UnnamedPart {
            url: "https://x.com/upload".to_string(),
            index: 2,
        };
        assert!(err.to_string().contains("#2"));
    }
}
