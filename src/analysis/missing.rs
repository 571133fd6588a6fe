// File: missing.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::{debug, warn};

use super::{Category, CategoryReport, Finding, HeaderStore, RuleCatalog};

const X_FRAME_OPTIONS: &str = "X-Frame-Options";
const CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
const FRAME_ANCESTORS: &str = "frame-ancestors";

/// Reports every required security header absent from the store.
///
/// `X-Frame-Options` also counts as present when the CSP carries
/// `frame-ancestors`, which supersedes it. When not a single required header
/// is present the whole list is reported as-is.
pub fn evaluate(store: &HeaderStore, catalog: &RuleCatalog) -> CategoryReport {
    let mut report = CategoryReport::new(Category::Missing);
    let required = &catalog.required_headers;

    if !required.iter().any(|name| store.contains(name)) {
        warn!("None of the {} recommended security headers is enabled", required.len());
        for name in required {
            report.push(Finding::missing(name));
        }
        return report;
    }

    for name in required {
        if store.contains(name) {
            continue;
        }
        if name.eq_ignore_ascii_case(X_FRAME_OPTIONS) && frame_ancestors_enabled(store) {
            debug!("X-Frame-Options superseded by CSP frame-ancestors");
            continue;
        }
        report.push(Finding::missing(name));
    }

    report
}

fn frame_ancestors_enabled(store: &HeaderStore) -> bool {
    store
        .get(CONTENT_SECURITY_POLICY)
        .is_some_and(|csp| csp.to_ascii_lowercase().contains(FRAME_ANCESTORS))
}
