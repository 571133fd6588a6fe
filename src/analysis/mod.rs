// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

pub mod catalog;
pub mod compat;
pub mod context;
pub mod empty;
pub mod fingerprint;
pub mod insecure;
pub mod missing;
pub mod store;

use log::{debug, info};
use serde::Serialize;

pub use catalog::{RuleCatalog, DEFAULT_CATALOG};
pub use compat::{CompatibilityRef, CompatibilityReport};
pub use context::{AnalysisContext, Scheme};
pub use insecure::InsecureRule;
pub use store::{HeaderEntry, HeaderStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Missing,
    Fingerprint,
    DeprecatedInsecure,
    Empty,
    CompatibilityReference,
}

impl Category {
    /// Categories that produce findings and counts, in report order.
    pub const COUNTED: [Category; 4] = [
        Category::Missing,
        Category::Fingerprint,
        Category::DeprecatedInsecure,
        Category::Empty,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Missing => "missing",
            Category::Fingerprint => "fingerprint",
            Category::DeprecatedInsecure => "deprecated_insecure",
            Category::Empty => "empty",
            Category::CompatibilityReference => "compatibility_reference",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Stable identity of the check behind a finding. Display text is looked up
/// from this, never stored in the finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "rule", rename_all = "snake_case")]
pub enum RuleId {
    Missing,
    Fingerprint,
    Insecure(InsecureRule),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub category: Category,
    pub rule: RuleId,
    pub subject: String,
    pub evidence: Option<String>,
}

impl Finding {
    pub fn missing(header: &str) -> Self {
        Self {
            category: Category::Missing,
            rule: RuleId::Missing,
            subject: header.to_string(),
            evidence: None,
        }
    }

    pub fn fingerprint(label: &str, value: &str) -> Self {
        Self {
            category: Category::Fingerprint,
            rule: RuleId::Fingerprint,
            subject: label.to_string(),
            evidence: Some(value.to_string()),
        }
    }

    pub fn insecure(rule: InsecureRule, subject: &str, evidence: Option<String>) -> Self {
        Self {
            category: Category::DeprecatedInsecure,
            rule: RuleId::Insecure(rule),
            subject: subject.to_string(),
            evidence,
        }
    }

    pub fn empty(header: &str) -> Self {
        Self {
            category: Category::Empty,
            rule: RuleId::Empty,
            subject: header.to_string(),
            evidence: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub findings: Vec<Finding>,
}

impl CategoryReport {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            findings: Vec::new(),
        }
    }

    pub fn push(&mut self, finding: Finding) {
        debug_assert_eq!(finding.category, self.category);
        self.findings.push(finding);
    }

    pub fn count(&self) -> usize {
        self.findings.len()
    }

    pub fn is_clear(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub missing: usize,
    pub fingerprint: usize,
    pub deprecated_insecure: usize,
    pub empty: usize,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.missing + self.fingerprint + self.deprecated_insecure + self.empty
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub missing: CategoryReport,
    pub fingerprint: CategoryReport,
    pub deprecated_insecure: CategoryReport,
    pub empty: CategoryReport,
    pub compatibility: CompatibilityReport,
}

impl AnalysisReport {
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        match category {
            Category::Missing => Some(&self.missing),
            Category::Fingerprint => Some(&self.fingerprint),
            Category::DeprecatedInsecure => Some(&self.deprecated_insecure),
            Category::Empty => Some(&self.empty),
            Category::CompatibilityReference => None,
        }
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            missing: self.missing.count(),
            fingerprint: self.fingerprint.count(),
            deprecated_insecure: self.deprecated_insecure.count(),
            empty: self.empty.count(),
        }
    }

    pub fn all_clear(&self) -> bool {
        Category::COUNTED
            .iter()
            .filter_map(|c| self.category(*c))
            .all(CategoryReport::is_clear)
    }
}

/// Runs every category evaluator against one header store.
pub struct Analyzer<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> Analyzer<'a> {
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn run(&self, ctx: &AnalysisContext, store: &HeaderStore) -> AnalysisReport {
        info!("Analyzing {} response header(s) of {}", store.len(), ctx.url());

        let report = AnalysisReport {
            missing: missing::evaluate(store, self.catalog),
            fingerprint: fingerprint::evaluate(store, self.catalog),
            deprecated_insecure: insecure::evaluate(ctx, store, self.catalog),
            empty: empty::evaluate(store),
            compatibility: compat::evaluate(store, self.catalog),
        };

        debug!("Analysis counts for {}: {:?}", ctx.url(), report.counts());
        report
    }
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_CATALOG)
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
