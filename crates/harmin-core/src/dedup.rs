//! Reference deduplication of repeated header/cookie pairs.
//!
//! Pairs that occur more than [`REFERENCE_THRESHOLD`] times across all
//! entries (request and response sides together) are moved into a table and
//! replaced in the entries by their integer ID. IDs are assigned 0, 1, 2, ...
//! in first-seen order: entries by ordinal, request list before response list.

use std::collections::HashMap;

use crate::model::{Entries, ListItem, ListKind, Pair, ReferenceTable};

/// A pair must occur strictly more often than this to be tabled.
pub const REFERENCE_THRESHOLD: usize = 2;

/// Counts pairs under `kind` and returns the table of those above the threshold.
pub fn build_table(entries: &Entries, kind: ListKind) -> ReferenceTable {
    let mut counts: HashMap<&Pair, usize> = HashMap::new();
    let mut first_seen: Vec<&Pair> = Vec::new();

    for entry in entries.values() {
        let lists = [
            kind.request_list(&entry.request),
            kind.response_list(&entry.response),
        ];
        for pair in lists
            .into_iter()
            .flatten()
            .flatten()
            .filter_map(ListItem::as_inline)
        {
            let count = counts.entry(pair).or_insert(0);
            if *count == 0 {
                first_seen.push(pair);
            }
            *count += 1;
        }
    }

    first_seen
        .into_iter()
        .filter(|pair| counts[pair] > REFERENCE_THRESHOLD)
        .zip(0u32..)
        .map(|(pair, id)| (id, pair.clone()))
        .collect()
}

/// Replaces every inline pair that exactly matches a table entry with its ID.
pub fn substitute(entries: &mut Entries, table: &ReferenceTable, kind: ListKind) -> usize {
    let ids: HashMap<&Pair, u32> = table.iter().map(|(id, pair)| (pair, *id)).collect();
    let mut replaced = 0;

    for entry in entries.values_mut() {
        let lists = [
            kind.request_list_mut(&mut entry.request),
            kind.response_list_mut(&mut entry.response),
        ];
        for item in lists.into_iter().flatten().flatten() {
            let id = match &*item {
                ListItem::Inline(pair) => ids.get(pair).copied(),
                ListItem::Reference(_) => None,
            };
            if let Some(id) = id {
                *item = ListItem::Reference(id);
                replaced += 1;
            }
        }
    }

    replaced
}

/// Builds the table for `kind` and substitutes references in one go.
///
/// Returns `None` without touching the entries when `disabled` is set.
pub fn deduplicate(
    entries: &mut Entries,
    kind: ListKind,
    disabled: bool,
) -> Option<ReferenceTable> {
    if disabled {
        return None;
    }
    let table = build_table(entries, kind);
    let replaced = substitute(entries, &table, kind);
    tracing::info!(
        ?kind,
        shared = table.len(),
        replaced,
        "deduplicated repeated pairs"
    );
    Some(table)
}

/// Resolves a list item to its pair, looking references up in `table`.
pub fn resolve<'a>(item: &'a ListItem, table: &'a ReferenceTable) -> Option<&'a Pair> {
    match item {
        ListItem::Inline(pair) => Some(pair),
        ListItem::Reference(id) => table.get(id),
    }
}

/// True if every item under `kind` resolves against `table`.
pub fn references_resolve(entries: &Entries, table: &ReferenceTable, kind: ListKind) -> bool {
    entries.values().all(|entry| {
        let lists = [
            kind.request_list(&entry.request),
            kind.response_list(&entry.response),
        ];
        lists
            .into_iter()
            .flatten()
            .flatten()
            .all(|item| resolve(item, table).is_some())
    })
}
