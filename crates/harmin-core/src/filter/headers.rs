//! Header, cookie and query-string conversion into `{name: value}` records.

use crate::har::HarNameValue;
use crate::model::{ListItem, Pair};

use super::decode::url_unescape;

/// Converts headers to inline list items, dropping `Cookie` and, when
/// `standard` is given, any name in it (both compared case-insensitively).
pub fn convert_headers(headers: &[HarNameValue], standard: Option<&[String]>) -> Vec<ListItem> {
    headers
        .iter()
        .filter(|h| !h.name.eq_ignore_ascii_case("cookie"))
        .filter(|h| {
            standard.map_or(true, |names| {
                !names.iter().any(|n| n.eq_ignore_ascii_case(&h.name))
            })
        })
        .map(|h| ListItem::Inline(Pair::new(&h.name, &h.value)))
        .collect()
}

pub fn convert_cookies(cookies: &[HarNameValue]) -> Vec<ListItem> {
    cookies
        .iter()
        .map(|c| ListItem::Inline(Pair::new(&c.name, &c.value)))
        .collect()
}

/// Query parameters with URL-decoded values, in original order.
pub fn convert_query(params: &[HarNameValue]) -> Vec<Pair> {
    params
        .iter()
        .map(|p| Pair::new(&p.name, url_unescape(&p.value)))
        .collect()
}

/// First header named `name` (case-insensitive).
pub fn find_header<'a>(headers: &'a [HarNameValue], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}
