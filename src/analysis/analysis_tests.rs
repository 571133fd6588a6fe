// File: analysis_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::analysis::{
        AnalysisContext, Analyzer, Category, CategoryCounts, HeaderStore, InsecureRule, RuleCatalog,
        RuleId,
    };
    use crate::explain::Locale;
    use pretty_assertions::assert_eq;
    use reqwest::header::{HeaderMap, HeaderValue};
    use rstest::*;

    fn hardened_headers() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Cache-Control", "no-cache, no-store, must-revalidate"),
            ("Clear-Site-Data", "\"cache\""),
            ("Content-Type", "text/html; charset=utf-8"),
            ("Cross-Origin-Embedder-Policy", "require-corp"),
            ("Cross-Origin-Opener-Policy", "same-origin"),
            ("Cross-Origin-Resource-Policy", "same-origin"),
            (
                "Content-Security-Policy",
                "default-src 'self'; frame-ancestors 'none'",
            ),
            ("Expect-CT", "max-age=86400, enforce"),
            ("NEL", "{\"report_to\":\"default\",\"max_age\":2592000}"),
            ("Permissions-Policy", "geolocation=(), camera=()"),
            ("Pragma", "no-cache"),
            ("Referrer-Policy", "strict-origin-when-cross-origin"),
            (
                "Strict-Transport-Security",
                "max-age=31536000; includeSubDomains",
            ),
            ("X-Content-Type-Options", "nosniff"),
            ("X-Frame-Options", "DENY"),
        ]
    }

    fn analyze(url: &str, status: u16, headers: Vec<(&str, &str)>) -> crate::analysis::AnalysisReport {
        let ctx = AnalysisContext::new(url, status, false, Locale::En);
        let store = HeaderStore::build_from(status, headers);
        Analyzer::default().run(&ctx, &store)
    }

    #[test]
    fn test_hardened_response_is_all_clear() {
        let report = analyze("https://example.com", 200, hardened_headers());

        assert_eq!(report.counts(), CategoryCounts::default());
        assert!(report.all_clear());
        assert_eq!(report.compatibility.entries.len(), 15);
    }

    #[test]
    fn test_no_security_headers_reports_full_list_once() {
        let report = analyze(
            "https://example.com",
            200,
            vec![("Date", "Mon, 01 Jan 2024 00:00:00 GMT")],
        );

        assert_eq!(report.counts().missing, 15);
        assert!(report.compatibility.nothing_enabled());
        assert!(!report.all_clear());
    }

    #[test]
    fn test_content_type_and_nosniff_only() {
        let report = analyze(
            "https://example.com",
            200,
            vec![
                ("Content-Type", "text/html"),
                ("X-Content-Type-Options", "nosniff"),
            ],
        );

        assert_eq!(
            report.counts(),
            CategoryCounts {
                missing: 13,
                fingerprint: 0,
                deprecated_insecure: 0,
                empty: 0,
            }
        );
    }

    #[test]
    fn test_hsts_over_http_is_ignored_not_recommended() {
        let report = analyze(
            "http://example.com",
            200,
            vec![(
                "Strict-Transport-Security",
                "max-age=63072000; includeSubDomains",
            )],
        );

        let rules: Vec<RuleId> = report.deprecated_insecure.iter().map(|f| f.rule).collect();
        assert!(rules.contains(&RuleId::Insecure(InsecureRule::HstsIgnored)));
        assert!(!rules.contains(&RuleId::Insecure(InsecureRule::HstsRecommended)));
    }

    #[rstest]
    #[case("https://example.com", "max-age=3600; includeSubDomains", InsecureRule::HstsRecommended)]
    #[case("http://example.com", "max-age=31536000; includeSubDomains", InsecureRule::HstsIgnored)]
    fn test_hsts_findings(#[case] url: &str, #[case] value: &str, #[case] expected: InsecureRule) {
        let report = analyze(url, 200, vec![("Strict-Transport-Security", value)]);
        assert!(report
            .deprecated_insecure
            .iter()
            .any(|f| f.rule == RuleId::Insecure(expected)));
    }

    #[test]
    fn test_csp_unsafe_inline_single_finding() {
        let report = analyze(
            "https://example.com",
            200,
            vec![(
                "Content-Security-Policy",
                "default-src 'self'; unsafe-inline",
            )],
        );
        assert_eq!(report.deprecated_insecure.count(), 1);
    }

    #[test]
    fn test_fingerprint_and_empty_are_exclusive() {
        let report = analyze(
            "https://example.com",
            200,
            vec![
                ("Server", ""),
                ("X-Powered-By", "PHP/8.2"),
                ("X-Custom", ""),
                ("Content-Type", "text/html"),
            ],
        );

        let fingerprinted: Vec<&str> = report
            .fingerprint
            .iter()
            .map(|f| f.subject.as_str())
            .collect();
        let empty: Vec<&str> = report.empty.iter().map(|f| f.subject.as_str()).collect();

        assert_eq!(fingerprinted, vec!["X-Powered-By"]);
        assert_eq!(empty, vec!["Server", "X-Custom"]);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let headers = vec![
            ("Server", "nginx"),
            ("Set-Cookie", "id=1"),
            ("X-Frame-Options", "DENY"),
            ("X-Empty", ""),
        ];
        let ctx = AnalysisContext::new("http://example.com", 403, false, Locale::En);
        let store = HeaderStore::build_from(403, headers);
        let analyzer = Analyzer::default();

        assert_eq!(analyzer.run(&ctx, &store), analyzer.run(&ctx, &store));
    }

    #[test]
    fn test_categories_hold_only_their_findings() {
        let report = analyze(
            "http://example.com",
            401,
            vec![("Server", "nginx"), ("X-Empty", ""), ("Etag", "\"1\"")],
        );

        for category in Category::COUNTED {
            let section = report.category(category).expect("counted category");
            assert!(section.iter().all(|f| f.category == category));
        }
        assert!(report.category(Category::CompatibilityReference).is_none());
        assert_eq!(report.counts().total(), 15 + 1 + 3 + 1);
    }

    #[test]
    fn test_custom_catalog_drives_missing() {
        let catalog = RuleCatalog {
            required_headers: vec!["X-Frame-Options".to_string(), "Pragma".to_string()],
            ..RuleCatalog::default()
        };
        let ctx = AnalysisContext::new("https://example.com", 200, false, Locale::En);
        let store = HeaderStore::build_from(200, vec![("Pragma", "no-cache")]);

        let report = Analyzer::new(&catalog).run(&ctx, &store);
        let missing: Vec<&str> = report.missing.iter().map(|f| f.subject.as_str()).collect();
        assert_eq!(missing, vec!["X-Frame-Options"]);
    }

    #[test]
    fn test_finding_serializes_rule_identity() {
        let report = analyze("http://example.com", 200, vec![("X-Pad", "x")]);
        let json = serde_json::to_value(&report.deprecated_insecure.findings[1])
            .expect("finding serializes");
        assert_eq!(json["rule"]["kind"], "insecure");
        assert_eq!(json["rule"]["rule"], "x_pad");
        assert_eq!(json["category"], "deprecated_insecure");
    }

    fn insecure_rules(report: &crate::analysis::AnalysisReport) -> Vec<InsecureRule> {
        report
            .deprecated_insecure
            .iter()
            .filter_map(|f| match f.rule {
                RuleId::Insecure(rule) => Some(rule),
                _ => None,
            })
            .collect()
    }

    fn analyze_map(url: &str, headers: &HeaderMap) -> crate::analysis::AnalysisReport {
        let ctx = AnalysisContext::new(url, 200, false, Locale::En);
        let store = HeaderStore::from_header_map(200, headers);
        Analyzer::default().run(&ctx, &store)
    }

    #[test]
    fn test_header_sent_twice_is_duplicated() {
        let mut headers = HeaderMap::new();
        headers.append("x-frame-options", HeaderValue::from_static("DENY"));
        headers.append("x-frame-options", HeaderValue::from_static("SAMEORIGIN"));

        let report = analyze_map("https://example.com", &headers);
        assert_eq!(
            insecure_rules(&report),
            vec![InsecureRule::XFrameOptionsDuplicated]
        );
    }

    #[test]
    fn test_every_cookie_reaches_the_cookie_rule() {
        let mut headers = HeaderMap::new();
        headers.append("set-cookie", HeaderValue::from_static("a=1"));
        headers.append("set-cookie", HeaderValue::from_static("b=2; Path=/"));

        let report = analyze_map("https://example.com", &headers);
        assert_eq!(insecure_rules(&report), vec![InsecureRule::SetCookie]);
        let store = HeaderStore::from_header_map(200, &headers);
        assert_eq!(store.get("set-cookie"), Some("a=1, b=2; Path=/"));
    }
}
