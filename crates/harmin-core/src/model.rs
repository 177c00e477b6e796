//! Output model: filtered entries, reference tables and the final document.
//!
//! Struct fields are declared in lexicographic order of their serialized names
//! so that both JSON and YAML renderings come out with sorted keys.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Filtered entries keyed by dense 1-based ordinal.
pub type Entries = BTreeMap<usize, FilteredEntry>;

/// Shared `{name: value}` pairs keyed by reference ID.
pub type ReferenceTable = BTreeMap<u32, Pair>;

/// A single `{name: value}` record (header, cookie or query parameter).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    pub name: String,
    pub value: String,
}

impl Pair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

/// Element of a headers/cookies list: either the pair itself or the ID of a
/// shared pair in the matching table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListItem {
    Inline(Pair),
    Reference(u32),
}

impl ListItem {
    pub fn as_inline(&self) -> Option<&Pair> {
        match self {
            ListItem::Inline(pair) => Some(pair),
            ListItem::Reference(_) => None,
        }
    }
}

impl From<Pair> for ListItem {
    fn from(pair: Pair) -> Self {
        ListItem::Inline(pair)
    }
}

/// One part of a multipart body; `value` is `None` when the part has no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub value: Option<String>,
}

impl Serialize for Part {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

/// Request body after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PostData {
    Text(String),
    Multipart(Vec<Part>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<ListItem>>,
    pub headers: Vec<ListItem>,
    pub method: String,
    #[serde(rename = "postData", skip_serializing_if = "Option::is_none")]
    pub post_data: Option<PostData>,
    #[serde(rename = "queryString", skip_serializing_if = "Option::is_none")]
    pub query_string: Option<Vec<Pair>>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<ListItem>>,
    pub headers: Vec<ListItem>,
    #[serde(rename = "redirectURL", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    pub status: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredEntry {
    pub comment: String,
    pub request: FilteredRequest,
    pub response: FilteredResponse,
}

/// Which list of a request/response side a reference table covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Headers,
    Cookies,
}

impl ListKind {
    pub fn request_list<'a>(self, request: &'a FilteredRequest) -> Option<&'a Vec<ListItem>> {
        match self {
            ListKind::Headers => Some(&request.headers),
            ListKind::Cookies => request.cookies.as_ref(),
        }
    }

    pub fn response_list<'a>(self, response: &'a FilteredResponse) -> Option<&'a Vec<ListItem>> {
        match self {
            ListKind::Headers => Some(&response.headers),
            ListKind::Cookies => response.cookies.as_ref(),
        }
    }

    pub fn request_list_mut<'a>(
        self,
        request: &'a mut FilteredRequest,
    ) -> Option<&'a mut Vec<ListItem>> {
        match self {
            ListKind::Headers => Some(&mut request.headers),
            ListKind::Cookies => request.cookies.as_mut(),
        }
    }

    pub fn response_list_mut<'a>(
        self,
        response: &'a mut FilteredResponse,
    ) -> Option<&'a mut Vec<ListItem>> {
        match self {
            ListKind::Headers => Some(&mut response.headers),
            ListKind::Cookies => response.cookies.as_mut(),
        }
    }
}

/// Final document handed to the serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimizedHar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_dict: Option<ReferenceTable>,
    pub entries: Entries,
    pub header_dict: ReferenceTable,
}
