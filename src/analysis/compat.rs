// File: compat.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use serde::Serialize;

use super::{HeaderStore, RuleCatalog};

pub const CANIUSE_SEARCH: &str = "https://caniuse.com/?search=";

// caniuse files CSP under its level-2 feature name.
const CSP_HEADER: &str = "Content-Security-Policy";
const CSP_REFERENCE_KEY: &str = "contentsecuritypolicy2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityRef {
    pub header: String,
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    pub entries: Vec<CompatibilityRef>,
}

impl CompatibilityReport {
    pub fn nothing_enabled(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn reference_url(header: &str) -> String {
    if header.eq_ignore_ascii_case(CSP_HEADER) {
        format!("{}{}", CANIUSE_SEARCH, CSP_REFERENCE_KEY)
    } else {
        format!("{}{}", CANIUSE_SEARCH, header)
    }
}

pub fn evaluate(store: &HeaderStore, catalog: &RuleCatalog) -> CompatibilityReport {
    let entries = catalog
        .compatibility_headers
        .iter()
        .filter(|name| store.contains(name))
        .map(|name| CompatibilityRef {
            header: name.clone(),
            reference: reference_url(name),
        })
        .collect();
    CompatibilityReport { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_url() {
        assert_eq!(
            reference_url("Strict-Transport-Security"),
            "https://caniuse.com/?search=Strict-Transport-Security"
        );
        assert_eq!(
            reference_url("Content-Security-Policy"),
            "https://caniuse.com/?search=contentsecuritypolicy2"
        );
    }

    #[test]
    fn test_entries_follow_catalog_order() {
        let store = HeaderStore::build_from(
            200,
            vec![
                ("x-frame-options", "DENY"),
                ("content-security-policy", "default-src 'self'"),
                ("server", "nginx"),
            ],
        );
        let report = evaluate(&store, &RuleCatalog::default());
        let headers: Vec<&str> = report.entries.iter().map(|e| e.header.as_str()).collect();
        assert_eq!(headers, vec!["Content-Security-Policy", "X-Frame-Options"]);
        assert!(!report.nothing_enabled());
    }

    #[test]
    fn test_nothing_enabled() {
        let store = HeaderStore::build_from(200, vec![("server", "nginx")]);
        assert!(evaluate(&store, &RuleCatalog::default()).nothing_enabled());
    }
}
