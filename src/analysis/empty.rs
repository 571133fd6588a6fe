// File: empty.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use super::{Category, CategoryReport, Finding, HeaderStore};

pub fn evaluate(store: &HeaderStore) -> CategoryReport {
    let mut report = CategoryReport::new(Category::Empty);
    for header in store.iter().filter(|h| h.value.is_empty()) {
        report.push(Finding::empty(&header.name));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_sorted() {
        let store = HeaderStore::build_from(
            200,
            vec![("X-B", ""), ("Server", "nginx"), ("x-a", "")],
        );
        let report = evaluate(&store);
        let subjects: Vec<&str> = report.iter().map(|f| f.subject.as_str()).collect();
        assert_eq!(subjects, vec!["x-a", "X-B"]);
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let store = HeaderStore::build_from(200, vec![("X-Space", " ")]);
        assert!(evaluate(&store).is_clear());
    }
}
