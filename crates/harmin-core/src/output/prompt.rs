//! Instructional preamble for whoever (or whatever) reads the output file.

use crate::config::OutputFormat;
use crate::model::{FilteredRequest, MinimizedHar};

const STATIC_NOTE: &str =
    " Static resources (stylesheets, scripts, images, fonts) have been filtered out.";

const TABLES_WITH_COOKIES: &str = " Headers and cookies that repeat across many requests and \
    responses are stored once in lookup tables ('header_dict' and 'cookie_dict') and referenced \
    by integer identifiers.\n\n";

const TABLES_HEADERS_ONLY: &str = " Headers that repeat across many requests and responses are \
    stored once in a lookup table ('header_dict') and referenced by integer identifiers.\n\n";

const REQUEST_TAIL: &str = ", queryString (URL-decoded `{name: value}` records) and postData \
    when present. postData is the decoded body text, or a list of `{name: value}` records for \
    multipart bodies.\n";

const REFERENCE_NOTE: &str = "- Header and cookie lists mix inline `{name: value}` records \
    with integers. An integer is an identifier: look it up in the matching table to get the \
    actual pair.\n\n";

const ANALYSIS: &str = "### Suggested analysis\n\n\
    1. Correlate request parameters (query string, body fields, headers) with response \
    statuses and content.\n\
    2. Identify pagination parameters (e.g. `page`, `limit`, `offset`, cursors) and how they \
    change the responses.\n\
    3. Trace values that flow from one response into later requests (tokens, IDs, CSRF \
    values, cookies).\n\
    4. Use JSONPath expressions such as `$.entries.*.request.queryString[*]` or regular \
    expressions to extract values of interest.\n\n";

/// Builds the preamble: schema description, analysis hints and a per-entry
/// index (ordinal, comment if any, method and URL).
pub fn build_prompt(doc: &MinimizedHar, format: OutputFormat, static_excluded: bool) -> String {
    let kind = match format {
        OutputFormat::Json => "JSON",
        OutputFormat::Yaml => "YAML",
    };
    let with_cookies = doc.cookie_dict.is_some();
    let cookies = if with_cookies { ", cookies" } else { "" };

    let mut out = format!(
        "This {kind} document contains HTTP request and response data extracted from a HAR \
         (HTTP Archive) capture and reduced for efficient analysis."
    );
    if static_excluded {
        out.push_str(STATIC_NOTE);
    }
    out.push_str(if with_cookies {
        TABLES_WITH_COOKIES
    } else {
        TABLES_HEADERS_ONLY
    });

    out.push_str("### Structure\n\n");
    out.push_str(
        "- **entries**: HTTP transactions keyed by ordinal (1, 2, 3, ...). \
         Each holds a 'request', a 'response' and a 'comment'.\n",
    );
    out.push_str("- **header_dict**: frequently occurring headers, keyed by identifier.\n");
    if with_cookies {
        out.push_str("- **cookie_dict**: frequently occurring cookies, keyed by identifier.\n");
    }
    out.push_str("\n### Entry fields\n\n");
    out.push_str(&format!("- **request**: method, url, headers{cookies}{REQUEST_TAIL}"));
    out.push_str(&format!(
        "- **response**: status, headers{cookies}, redirectURL and content (decoded body text).\n"
    ));
    out.push_str(REFERENCE_NOTE);
    out.push_str(ANALYSIS);

    out.push_str("### Entries\n\n");
    for (ordinal, entry) in &doc.entries {
        let FilteredRequest { method, url, .. } = &entry.request;
        if entry.comment.is_empty() {
            out.push_str(&format!("{ordinal}. {method} {url}\n"));
        } else {
            out.push_str(&format!("{ordinal}. [{}] {method} {url}\n", entry.comment));
        }
    }

    out
}
