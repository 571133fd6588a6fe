// File: insecure.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::{debug, info};
use serde::Serialize;

use super::catalog::TokenList;
use super::{AnalysisContext, Category, CategoryReport, Finding, HeaderStore, RuleCatalog, Scheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsecureRule {
    AccessControlAllowMethods,
    AccessControlAllowOrigin,
    AllowMethods,
    CacheControl,
    CspUnsafeValues,
    CspNoValidDirectives,
    CspDeprecatedDirectives,
    CspIncorrectValues,
    CspInsecureSchemes,
    Etag,
    ExpectCtUnsafeScheme,
    FeaturePolicy,
    HttpScheme,
    PermissionsPolicyNoFeatures,
    PermissionsPolicyPermissive,
    PermissionsPolicyIncorrect,
    PublicKeyPins,
    PublicKeyPinsUnsafeScheme,
    ReferrerPolicyRecommended,
    ReferrerPolicyUnsafe,
    ServerTiming,
    SetCookie,
    HstsRecommended,
    HstsDuplicated,
    HstsIgnored,
    TimingAllowOrigin,
    WwwAuthenticateBasic,
    XContentSecurityPolicy,
    XContentTypeOptionsDuplicated,
    XContentTypeOptionsIncorrect,
    XDnsPrefetchControl,
    XDownloadOptions,
    XFrameOptionsDuplicated,
    XPad,
    XPermittedCrossDomainPolicies,
    XPingback,
    XRobotsTag,
    XRuntime,
    XWebkitCsp,
    XXssProtectionDuplicated,
    XXssProtectionUnsafe,
    ClientErrorStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeGuard {
    Any,
    Http,
    Https,
}

impl SchemeGuard {
    fn admits(&self, scheme: Scheme) -> bool {
        match self {
            SchemeGuard::Any => true,
            SchemeGuard::Http => scheme == Scheme::Http,
            SchemeGuard::Https => scheme == Scheme::Https,
        }
    }
}

/// Value test of a rule. Token lists are resolved against the catalog at
/// evaluation time; every substring test ignores ASCII case.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    Always,
    Contains(&'static str),
    ContainsAny(TokenList),
    ContainsAll(TokenList),
    Not(&'static Predicate),
    AllOf(&'static [Predicate]),
    AnyOf(&'static [Predicate]),
    /// HSTS `max-age` missing, digit-less, or under the catalog minimum.
    MaxAgeBelow,
    /// Response status listed among the catalog client errors.
    StatusIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    None,
    Value,
    Matches(TokenList),
    Status,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: InsecureRule,
    pub subject: &'static str,
    /// Header that must be present for the rule to apply. `None` rules look
    /// only at the scheme and status.
    pub header: Option<&'static str>,
    pub scheme: SchemeGuard,
    pub predicate: Predicate,
    pub evidence: Evidence,
}

struct RuleInput<'a> {
    value: &'a str,
    status: u16,
    catalog: &'a RuleCatalog,
}

const ACAM: &str = "Access-Control-Allow-Methods";
const ACAO: &str = "Access-Control-Allow-Origin";
const CSP: &str = "Content-Security-Policy";
const HSTS: &str = "Strict-Transport-Security";
const PERMISSIONS: &str = "Permissions-Policy";
const PKP: &str = "Public-Key-Pins";
const REFERRER: &str = "Referrer-Policy";
const XCTO: &str = "X-Content-Type-Options";
const XXSS: &str = "X-XSS-Protection";

const fn present(id: InsecureRule, header: &'static str, predicate: Predicate) -> Rule {
    Rule {
        id,
        subject: header,
        header: Some(header),
        scheme: SchemeGuard::Any,
        predicate,
        evidence: Evidence::None,
    }
}

const fn over(id: InsecureRule, header: &'static str, scheme: SchemeGuard, predicate: Predicate) -> Rule {
    Rule {
        id,
        subject: header,
        header: Some(header),
        scheme,
        predicate,
        evidence: Evidence::None,
    }
}

const fn with_evidence(rule: Rule, evidence: Evidence) -> Rule {
    Rule { evidence, ..rule }
}

/// Every deprecated/insecure check, in report order.
pub static RULES: &[Rule] = &[
    with_evidence(
        present(
            InsecureRule::AccessControlAllowMethods,
            ACAM,
            Predicate::ContainsAny(TokenList::InsecureMethods),
        ),
        Evidence::Matches(TokenList::InsecureMethods),
    ),
    present(
        InsecureRule::AccessControlAllowOrigin,
        ACAO,
        Predicate::AllOf(&[
            Predicate::ContainsAny(TokenList::UnsafeOrigins),
            Predicate::Not(&Predicate::Contains("*.")),
        ]),
    ),
    with_evidence(
        present(
            InsecureRule::AllowMethods,
            "Allow",
            Predicate::ContainsAny(TokenList::InsecureMethods),
        ),
        Evidence::Value,
    ),
    present(
        InsecureRule::CacheControl,
        "Cache-Control",
        Predicate::Not(&Predicate::ContainsAll(TokenList::CacheControlDirectives)),
    ),
    present(
        InsecureRule::CspUnsafeValues,
        CSP,
        Predicate::ContainsAny(TokenList::CspUnsafe),
    ),
    present(
        InsecureRule::CspNoValidDirectives,
        CSP,
        Predicate::AllOf(&[
            Predicate::Not(&Predicate::ContainsAny(TokenList::CspUnsafe)),
            Predicate::Not(&Predicate::ContainsAny(TokenList::CspDirectives)),
        ]),
    ),
    with_evidence(
        present(
            InsecureRule::CspDeprecatedDirectives,
            CSP,
            Predicate::ContainsAny(TokenList::CspDeprecated),
        ),
        Evidence::Matches(TokenList::CspDeprecated),
    ),
    present(
        InsecureRule::CspIncorrectValues,
        CSP,
        Predicate::AllOf(&[
            Predicate::Contains("="),
            Predicate::Not(&Predicate::ContainsAny(TokenList::CspEqualAllowed)),
        ]),
    ),
    over(
        InsecureRule::CspInsecureSchemes,
        CSP,
        SchemeGuard::Https,
        Predicate::Contains("http:"),
    ),
    present(InsecureRule::Etag, "Etag", Predicate::Always),
    over(
        InsecureRule::ExpectCtUnsafeScheme,
        "Expect-CT",
        SchemeGuard::Http,
        Predicate::Always,
    ),
    present(InsecureRule::FeaturePolicy, "Feature-Policy", Predicate::Always),
    Rule {
        id: InsecureRule::HttpScheme,
        subject: "HTTP",
        header: None,
        scheme: SchemeGuard::Http,
        predicate: Predicate::Always,
        evidence: Evidence::None,
    },
    present(
        InsecureRule::PermissionsPolicyNoFeatures,
        PERMISSIONS,
        Predicate::Not(&Predicate::ContainsAny(TokenList::PermissionsFeatures)),
    ),
    present(
        InsecureRule::PermissionsPolicyPermissive,
        PERMISSIONS,
        Predicate::Contains("*"),
    ),
    present(
        InsecureRule::PermissionsPolicyIncorrect,
        PERMISSIONS,
        Predicate::Contains("none"),
    ),
    present(InsecureRule::PublicKeyPins, PKP, Predicate::Always),
    over(
        InsecureRule::PublicKeyPinsUnsafeScheme,
        PKP,
        SchemeGuard::Http,
        Predicate::Always,
    ),
    present(
        InsecureRule::ReferrerPolicyRecommended,
        REFERRER,
        Predicate::Not(&Predicate::ContainsAny(TokenList::ReferrerRecommended)),
    ),
    present(
        InsecureRule::ReferrerPolicyUnsafe,
        REFERRER,
        Predicate::Contains("unsafe-url"),
    ),
    present(InsecureRule::ServerTiming, "Server-Timing", Predicate::Always),
    present(
        InsecureRule::SetCookie,
        "Set-Cookie",
        Predicate::Not(&Predicate::ContainsAll(TokenList::CookieAttributes)),
    ),
    over(
        InsecureRule::HstsRecommended,
        HSTS,
        SchemeGuard::Https,
        Predicate::AnyOf(&[
            Predicate::Not(&Predicate::ContainsAll(TokenList::HstsDirectives)),
            Predicate::MaxAgeBelow,
        ]),
    ),
    present(InsecureRule::HstsDuplicated, HSTS, Predicate::Contains(",")),
    over(
        InsecureRule::HstsIgnored,
        HSTS,
        SchemeGuard::Http,
        Predicate::Always,
    ),
    present(
        InsecureRule::TimingAllowOrigin,
        "Timing-Allow-Origin",
        Predicate::Contains("*"),
    ),
    over(
        InsecureRule::WwwAuthenticateBasic,
        "WWW-Authenticate",
        SchemeGuard::Http,
        Predicate::Contains("basic"),
    ),
    present(
        InsecureRule::XContentSecurityPolicy,
        "X-Content-Security-Policy",
        Predicate::Always,
    ),
    present(
        InsecureRule::XContentTypeOptionsDuplicated,
        XCTO,
        Predicate::Contains(","),
    ),
    present(
        InsecureRule::XContentTypeOptionsIncorrect,
        XCTO,
        Predicate::AllOf(&[
            Predicate::Not(&Predicate::Contains(",")),
            Predicate::Not(&Predicate::Contains("nosniff")),
        ]),
    ),
    present(
        InsecureRule::XDnsPrefetchControl,
        "X-DNS-Prefetch-Control",
        Predicate::Contains("on"),
    ),
    present(
        InsecureRule::XDownloadOptions,
        "X-Download-Options",
        Predicate::Always,
    ),
    present(
        InsecureRule::XFrameOptionsDuplicated,
        "X-Frame-Options",
        Predicate::Contains(","),
    ),
    present(InsecureRule::XPad, "X-Pad", Predicate::Always),
    present(
        InsecureRule::XPermittedCrossDomainPolicies,
        "X-Permitted-Cross-Domain-Policies",
        Predicate::Contains("all"),
    ),
    present(
        InsecureRule::XPingback,
        "X-Pingback",
        Predicate::Contains("xmlrpc.php"),
    ),
    present(
        InsecureRule::XRobotsTag,
        "X-Robots-Tag",
        Predicate::Contains("all"),
    ),
    present(InsecureRule::XRuntime, "X-Runtime", Predicate::Always),
    present(InsecureRule::XWebkitCsp, "X-Webkit-CSP", Predicate::Always),
    present(
        InsecureRule::XXssProtectionDuplicated,
        XXSS,
        Predicate::Contains(","),
    ),
    present(
        InsecureRule::XXssProtectionUnsafe,
        XXSS,
        Predicate::AllOf(&[
            Predicate::Not(&Predicate::Contains(",")),
            Predicate::Not(&Predicate::Contains("0")),
        ]),
    ),
    Rule {
        id: InsecureRule::ClientErrorStatus,
        subject: "HTTP status",
        header: None,
        scheme: SchemeGuard::Any,
        predicate: Predicate::StatusIn,
        evidence: Evidence::Status,
    },
];

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Digits of the `max-age` directive, if it has any.
///
/// Oversized values saturate instead of failing.
pub fn max_age(value: &str) -> Option<u64> {
    let directive = value
        .split([';', ','])
        .map(str::trim)
        .find(|d| d.to_ascii_lowercase().starts_with("max-age"))?;
    let digits: Vec<u64> = directive
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(
        digits
            .into_iter()
            .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(d)),
    )
}

impl Predicate {
    fn holds(&self, input: &RuleInput<'_>) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Contains(token) => contains_ci(input.value, token),
            Predicate::ContainsAny(list) => input
                .catalog
                .tokens(*list)
                .iter()
                .any(|token| contains_ci(input.value, token)),
            Predicate::ContainsAll(list) => input
                .catalog
                .tokens(*list)
                .iter()
                .all(|token| contains_ci(input.value, token)),
            Predicate::Not(inner) => !inner.holds(input),
            Predicate::AllOf(all) => all.iter().all(|p| p.holds(input)),
            Predicate::AnyOf(any) => any.iter().any(|p| p.holds(input)),
            Predicate::MaxAgeBelow => {
                max_age(input.value).map_or(true, |age| age < input.catalog.hsts_min_max_age)
            }
            Predicate::StatusIn => input.catalog.client_error_codes.contains(&input.status),
        }
    }
}

impl Rule {
    /// Runs this rule alone; `None` when a guard excludes it or the value passes.
    pub fn check(
        &self,
        ctx: &AnalysisContext,
        store: &HeaderStore,
        catalog: &RuleCatalog,
    ) -> Option<Finding> {
        if !self.scheme.admits(ctx.scheme()) {
            return None;
        }
        let value = match self.header {
            Some(name) => store.get(name)?,
            None => "",
        };
        let input = RuleInput {
            value,
            status: store.status(),
            catalog,
        };
        if !self.predicate.holds(&input) {
            return None;
        }

        let evidence = match self.evidence {
            Evidence::None => None,
            Evidence::Value => Some(value.to_string()),
            Evidence::Status => Some(store.status().to_string()),
            Evidence::Matches(list) => {
                let matched: Vec<&str> = catalog
                    .tokens(list)
                    .iter()
                    .filter(|token| contains_ci(value, token))
                    .map(String::as_str)
                    .collect();
                (!matched.is_empty()).then(|| matched.join(", "))
            }
        };
        Some(Finding::insecure(self.id, self.subject, evidence))
    }
}

pub fn evaluate(ctx: &AnalysisContext, store: &HeaderStore, catalog: &RuleCatalog) -> CategoryReport {
    evaluate_rules(RULES, ctx, store, catalog)
}

pub fn evaluate_rules(
    rules: &[Rule],
    ctx: &AnalysisContext,
    store: &HeaderStore,
    catalog: &RuleCatalog,
) -> CategoryReport {
    let mut report = CategoryReport::new(Category::DeprecatedInsecure);
    for rule in rules {
        if let Some(finding) = rule.check(ctx, store, catalog) {
            info!("{:?} triggered on {}", rule.id, ctx.url());
            report.push(finding);
        }
    }
    debug!(
        "{} of {} insecure-value rules triggered",
        report.count(),
        rules.len()
    );
    report
}

pub fn rule(id: InsecureRule) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.id == id)
}

#[cfg(test)]
#[path = "insecure_tests.rs"]
mod tests;
