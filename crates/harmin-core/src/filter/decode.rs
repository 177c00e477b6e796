//! Body text decoding: base64 first, URL-unescape as the fallback.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::percent_decode_str;

/// Decodes a HAR body string.
///
/// Tries strict base64 followed by UTF-8. If either step fails the raw text is
/// URL-unescaped instead, so this never errors.
pub fn decode_body(text: &str) -> String {
    match STANDARD.decode(text) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => decoded,
            Err(_) => {
                tracing::trace!("base64 body is not UTF-8, url-unescaping instead");
                url_unescape(text)
            }
        },
        Err(_) => url_unescape(text),
    }
}

/// Decodes `%XX` escapes as UTF-8 (lossy). `+` is left as is and malformed
/// escapes are kept literally.
pub fn url_unescape(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}
