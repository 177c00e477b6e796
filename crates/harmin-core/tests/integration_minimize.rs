//! Integration test: HAR file on disk → minimized document → rendered output file.
//!
//! Writes small HAR captures to a temp dir, runs the pipeline and checks the
//! serialized JSON/YAML as a consumer would read it.

use harmin_core::config::OutputFormat;
use harmin_core::filter::FilterOptions;
use harmin_core::output::{build_prompt, output_path, render, write_output};
use harmin_core::pipeline::process_har_file;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_har(dir: &TempDir, har: &Value) -> PathBuf {
    let path = dir.path().join("capture.har");
    fs::write(&path, har.to_string()).unwrap();
    path
}

fn get(url: &str, headers: Value) -> Value {
    json!({
        "startedDateTime": "2024-01-01T00:00:00.000Z",
        "time": 12.5,
        "request": {
            "method": "GET",
            "url": url,
            "httpVersion": "HTTP/2",
            "headers": headers,
            "cookies": [],
            "queryString": [],
            "headersSize": -1,
            "bodySize": 0
        },
        "response": {
            "status": 200,
            "statusText": "OK",
            "httpVersion": "HTTP/2",
            "headers": [],
            "cookies": [],
            "content": { "size": 2, "mimeType": "application/json", "text": "{}" },
            "redirectURL": "",
            "headersSize": -1,
            "bodySize": 2
        },
        "cache": {},
        "timings": { "send": 0, "wait": 10, "receive": 2 }
    })
}

fn minimize_to_json(har: &Value, opts: &FilterOptions) -> Value {
    let dir = tempfile::tempdir().unwrap();
    let path = write_har(&dir, har);
    let doc = process_har_file(&path, opts).unwrap();
    serde_json::from_str(&render(&doc, OutputFormat::Json).unwrap()).unwrap()
}

#[test]
fn repeated_accept_header_becomes_reference_zero() {
    let accept = json!([{ "name": "Accept", "value": "application/json" }]);
    let mut second = get("https://x.com/b", accept.clone());
    second["response"]["headers"] = accept.clone();
    let har = json!({ "log": { "version": "1.2", "entries": [
        get("https://x.com/a", accept),
        second,
    ]}});

    let out = minimize_to_json(&har, &FilterOptions::default());
    assert_eq!(
        out["header_dict"],
        json!({ "0": { "Accept": "application/json" } })
    );
    assert_eq!(out["entries"]["1"]["request"]["headers"], json!([0]));
    assert_eq!(out["entries"]["2"]["request"]["headers"], json!([0]));
    assert_eq!(out["entries"]["2"]["response"]["headers"], json!([0]));
}

#[test]
fn pair_seen_twice_stays_inline() {
    let header = json!([{ "name": "X-Twice", "value": "v" }]);
    let har = json!({ "log": { "entries": [
        get("https://x.com/a", header.clone()),
        get("https://x.com/b", header),
    ]}});
    let out = minimize_to_json(&har, &FilterOptions::default());
    assert_eq!(out["header_dict"], json!({}));
    assert_eq!(
        out["entries"]["1"]["request"]["headers"],
        json!([{ "X-Twice": "v" }])
    );
}

#[test]
fn static_asset_dropped_without_ordinal_gap() {
    let har = json!({ "log": { "entries": [
        get("https://x.com/", json!([])),
        get("https://x.com/app.js?v=2", json!([])),
        get("https://x.com/api/items", json!([])),
    ]}});
    let opts = FilterOptions {
        exclude_static: true,
        ..FilterOptions::default()
    };
    let out = minimize_to_json(&har, &opts);
    let entries = out["entries"].as_object().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        out["entries"]["2"]["request"]["url"],
        "https://x.com/api/items"
    );
    assert!(out["entries"].get("3").is_none());
}

#[test]
fn pruned_fields_absent_and_content_decoded() {
    let mut entry = get("https://x.com/greet", json!([]));
    entry["response"]["content"]["text"] = json!("aGVsbG8=");
    entry["comment"] = json!("greeting");
    let har = json!({ "log": { "entries": [entry] } });

    let out = minimize_to_json(&har, &FilterOptions::default());
    let e = &out["entries"]["1"];
    assert_eq!(e["comment"], "greeting");
    assert_eq!(e["response"]["content"], "hello");
    assert_eq!(e["response"]["status"], 200);
    for dropped in ["bodySize", "headersSize", "httpVersion"] {
        assert!(e["request"].get(dropped).is_none(), "{dropped} kept");
        assert!(e["response"].get(dropped).is_none(), "{dropped} kept");
    }
    assert!(e["response"].get("statusText").is_none());
    assert!(e.get("timings").is_none());
}

#[test]
fn multipart_fields_in_order() {
    let body = "--XYZ\r\nContent-Disposition: form-data; name=\"field1\"\r\n\r\nalpha\r\n\
                --XYZ\r\nContent-Disposition: form-data; name=\"field2\"\r\n\r\nbeta\r\n\
                --XYZ--\r\n";
    let mut entry = get(
        "https://x.com/upload",
        json!([{ "name": "Content-Type", "value": "multipart/form-data; boundary=XYZ" }]),
    );
    entry["request"]["method"] = json!("POST");
    entry["request"]["postData"] = json!({
        "mimeType": "multipart/form-data; boundary=XYZ",
        "text": body
    });
    let har = json!({ "log": { "entries": [entry] } });

    let out = minimize_to_json(&har, &FilterOptions::default());
    assert_eq!(
        out["entries"]["1"]["request"]["postData"],
        json!([{ "field1": "alpha" }, { "field2": "beta" }])
    );
}

#[test]
fn cookies_tabled_unless_excluded() {
    let mut entries = Vec::new();
    for path in ["a", "b", "c"] {
        let mut e = get(&format!("https://x.com/{path}"), json!([]));
        e["request"]["cookies"] = json!([{ "name": "sid", "value": "s1", "httpOnly": true }]);
        entries.push(e);
    }
    let har = json!({ "log": { "entries": entries } });

    let out = minimize_to_json(&har, &FilterOptions::default());
    assert_eq!(out["cookie_dict"], json!({ "0": { "sid": "s1" } }));
    assert_eq!(out["entries"]["3"]["request"]["cookies"], json!([0]));

    let opts = FilterOptions {
        exclude_cookies: true,
        ..FilterOptions::default()
    };
    let out = minimize_to_json(&har, &opts);
    assert!(out.get("cookie_dict").is_none());
    assert!(out["entries"]["1"]["request"].get("cookies").is_none());
}

#[test]
fn bom_prefixed_har_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bom.har");
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(
        json!({ "log": { "entries": [get("https://x.com/", json!([]))] } })
            .to_string()
            .as_bytes(),
    );
    fs::write(&path, bytes).unwrap();
    let doc = process_har_file(&path, &FilterOptions::default()).unwrap();
    assert_eq!(doc.entries.len(), 1);
}

#[test]
fn malformed_har_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.har");
    fs::write(&path, "{ not json").unwrap();
    let err = process_har_file(&path, &FilterOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("parse HAR JSON"));
}

#[test]
fn yaml_file_written_with_prompt_and_extension() {
    let dir = tempfile::tempdir().unwrap();
    let har = json!({ "log": { "entries": [get("https://x.com/ü", json!([]))] } });
    let path = write_har(&dir, &har);
    let doc = process_har_file(&path, &FilterOptions::default()).unwrap();

    let out = output_path(&dir.path().join("result"), OutputFormat::Yaml);
    assert!(out.to_string_lossy().ends_with("result.yaml"));
    let prompt = build_prompt(&doc, OutputFormat::Yaml, false);
    let payload = render(&doc, OutputFormat::Yaml).unwrap();
    write_output(&out, Some(&prompt), &payload).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("This YAML document"));
    let (_, tail) = written.split_once("\nentries:").unwrap();
    assert!(tail.contains("header_dict: {}"));
}
