// File: store.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::header::HeaderMap;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

/// Response headers of one analyzed URL.
///
/// Lookups are case-insensitive and iteration is sorted by lowercase name.
/// Raw input keeps the last value of a repeated header; a reqwest `HeaderMap`
/// has its repeated values joined with `", "`. The store is never mutated
/// after it is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderStore {
    status: u16,
    entries: BTreeMap<String, HeaderEntry>,
}

impl HeaderStore {
    pub fn build_from<I, N, V>(status: u16, raw_headers: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (name, value) in raw_headers {
            let name = name.into();
            entries.insert(
                name.to_ascii_lowercase(),
                HeaderEntry {
                    name,
                    value: value.into(),
                },
            );
        }
        Self { status, entries }
    }

    pub fn from_header_map(status: u16, headers: &HeaderMap) -> Self {
        Self::build_from(
            status,
            headers.keys().map(|name| {
                let value = headers
                    .get_all(name)
                    .iter()
                    .map(|value| match value.to_str() {
                        Ok(v) => v.to_string(),
                        Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                (display_name(name.as_str()), value)
            }),
        )
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// reqwest hands names over lowercased; restore the usual Title-Case for display.
fn display_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
