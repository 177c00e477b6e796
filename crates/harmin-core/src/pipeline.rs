//! Load → filter → deduplicate, producing the document handed to the serializer.

use anyhow::{Context, Result};
use std::path::Path;

use crate::dedup::{deduplicate, references_resolve};
use crate::filter::{filter_entries, FilterOptions};
use crate::har::{load_har, HarLog};
use crate::model::{ListKind, MinimizedHar};

/// Reads the HAR file at `path` and minimizes it.
pub fn process_har_file(path: &Path, opts: &FilterOptions) -> Result<MinimizedHar> {
    let har = load_har(path)?;
    process_har(&har, opts).with_context(|| format!("process HAR file: {}", path.display()))
}

/// Minimizes an already parsed HAR document.
///
/// The header table is always built; the cookie table only when cookies are
/// kept, in which case `cookie_dict` is present (possibly empty).
pub fn process_har(har: &HarLog, opts: &FilterOptions) -> Result<MinimizedHar> {
    let mut entries = filter_entries(&har.log.entries, opts)?;

    let header_dict = deduplicate(&mut entries, ListKind::Headers, false).unwrap_or_default();
    let cookie_dict = deduplicate(&mut entries, ListKind::Cookies, opts.exclude_cookies);

    debug_assert!(references_resolve(&entries, &header_dict, ListKind::Headers));
    if let Some(table) = &cookie_dict {
        debug_assert!(references_resolve(&entries, table, ListKind::Cookies));
    }

    Ok(MinimizedHar {
        cookie_dict,
        entries,
        header_dict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::parse_har;
    use crate::model::{ListItem, Pair};

    const HAR: &str = r#"{"log":{"entries":[
        {"request":{"method":"GET","url":"https://x.com/a","headers":[{"name":"Accept","value":"application/json"}],
                    "cookies":[{"name":"sid","value":"1"}]},
         "response":{"status":200,"headers":[{"name":"Accept","value":"application/json"}]}},
        {"request":{"method":"GET","url":"https://x.com/app.js?v=2","headers":[]},
         "response":{"status":200,"headers":[]}},
        {"request":{"method":"GET","url":"https://x.com/b","headers":[{"name":"Accept","value":"application/json"}],
                    "cookies":[{"name":"sid","value":"1"}]},
         "response":{"status":200,"headers":[],"cookies":[{"name":"sid","value":"1"}]}}
    ]}}"#;

    #[test]
    fn process_har_tables_and_references() {
        let har = parse_har(HAR.as_bytes()).unwrap();
        let opts = FilterOptions {
            exclude_static: true,
            ..FilterOptions::default()
        };
        let out = process_har(&har, &opts).unwrap();
        assert_eq!(out.entries.len(), 2);
        assert_eq!(out.entries[&2].request.url, "https://x.com/b");
        assert_eq!(out.header_dict.len(), 1);
        assert_eq!(out.header_dict[&0], Pair::new("Accept", "application/json"));
        let cookies = out.cookie_dict.as_ref().unwrap();
        assert_eq!(cookies[&0], Pair::new("sid", "1"));
        assert_eq!(
            out.entries[&2].response.cookies,
            Some(vec![ListItem::Reference(0)])
        );
        assert!(references_resolve(&out.entries, &out.header_dict, ListKind::Headers));
        assert!(references_resolve(&out.entries, cookies, ListKind::Cookies));
    }

    #[test]
    fn process_har_without_cookies_has_no_cookie_dict() {
        let har = parse_har(HAR.as_bytes()).unwrap();
        let opts = FilterOptions {
            exclude_cookies: true,
            ..FilterOptions::default()
        };
        let out = process_har(&har, &opts).unwrap();
        assert_eq!(out.entries.len(), 3);
        assert!(out.cookie_dict.is_none());
        let json = serde_json::to_string(&out).unwrap();
        assert!(!json.contains("cookie"));
    }
}
