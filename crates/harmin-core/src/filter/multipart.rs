//! `multipart/form-data` body splitting.

use crate::error::HarError;
use crate::model::Part;

/// Extracts the `boundary` parameter from a `Content-Type` header value.
///
/// Handles quoted boundaries and trailing parameters
/// (`multipart/form-data; boundary="abc"; charset=utf-8` → `abc`).
pub fn boundary_from_content_type(content_type: &str) -> Option<&str> {
    let (_, rest) = content_type.split_once("boundary=")?;
    let token = rest.split(';').next().unwrap_or(rest).trim();
    let token = token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token);
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Splits a multipart body on `--{boundary}` and returns its parts in order.
///
/// Each part's name comes from the `name="..."` attribute of its header block;
/// its value is the text after the first blank line, or `None` when the part
/// has no body. A part without a name attribute is an error.
pub fn parse_multipart(body: &str, boundary: &str, url: &str) -> Result<Vec<Part>, HarError> {
    let delimiter = format!("--{boundary}");
    let mut parts = Vec::new();

    for (index, raw) in body
        .split(delimiter.as_str())
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != "--")
        .enumerate()
    {
        let (head, value) = match split_head(raw) {
            Some((head, value)) => (head, Some(value.to_string())),
            None => (raw, None),
        };
        let name = part_name(head).ok_or_else(|| HarError::UnnamedPart {
            url: url.to_string(),
            index,
        })?;
        parts.push(Part {
            name: name.to_string(),
            value,
        });
    }

    Ok(parts)
}

/// Splits a part into its header block and body at the first blank line.
fn split_head(part: &str) -> Option<(&str, &str)> {
    match part.split_once("\r\n\r\n") {
        Some(split) => Some(split),
        None => part.split_once("\n\n"),
    }
}

/// Value of the `name="..."` attribute, ignoring `filename="..."`.
fn part_name(head: &str) -> Option<&str> {
    const KEY: &str = "name=\"";
    for (pos, _) in head.match_indices(KEY) {
        let preceded_by_separator = head[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| c == ';' || c.is_whitespace());
        if !preceded_by_separator {
            continue;
        }
        let rest = &head[pos + KEY.len()..];
        return rest.find('"').map(|end| &rest[..end]);
    }
    None
}
