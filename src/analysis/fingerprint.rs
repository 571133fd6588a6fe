// File: fingerprint.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::info;
use std::collections::HashMap;

use super::catalog::fingerprint_name;
use super::{Category, CategoryReport, Finding, HeaderStore, RuleCatalog};

pub fn evaluate(store: &HeaderStore, catalog: &RuleCatalog) -> CategoryReport {
    let mut report = CategoryReport::new(Category::Fingerprint);

    let mut labels: HashMap<String, &str> = HashMap::new();
    for entry in &catalog.fingerprint_headers {
        labels
            .entry(fingerprint_name(entry).to_ascii_lowercase())
            .or_insert(entry.as_str());
    }

    for header in store.iter() {
        // Empty values belong to the empty-value pass.
        if header.value.is_empty() {
            continue;
        }
        if let Some(label) = labels.get(&header.name.to_ascii_lowercase()) {
            info!("Fingerprint header {}: {}", header.name, header.value);
            report.push(Finding::fingerprint(label, &header.value));
        }
    }

    report
}
