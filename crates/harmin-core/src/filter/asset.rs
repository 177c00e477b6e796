//! Query stripping and static-asset detection on request URLs.

/// Returns the URL with its query string removed (fragment kept).
///
/// URLs the `url` crate cannot parse are cut at the first `?` instead.
pub fn strip_query(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.to_string()
        }
        Err(_) => match raw.split_once('?') {
            Some((before, after)) => match after.split_once('#') {
                Some((_, fragment)) => format!("{before}#{fragment}"),
                None => before.to_string(),
            },
            None => raw.to_string(),
        },
    }
}

/// True if the query-stripped URL ends with one of `extensions`.
pub fn is_static_asset(raw: &str, extensions: &[String]) -> bool {
    let clean = strip_query(raw);
    extensions.iter().any(|ext| clean.ends_with(ext.as_str()))
}
