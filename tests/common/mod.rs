// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use hdrprobe::analysis::{AnalysisContext, AnalysisReport, Analyzer, HeaderStore};
use hdrprobe::config::ConfigParameter;
use hdrprobe::errors::FetchResult;
use hdrprobe::explain::Locale;
use hdrprobe::http::Http;
use hdrprobe::httpinner::HttpInner;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct Audit {
    pub inner: HttpInner,
    pub ctx: AnalysisContext,
    pub store: HeaderStore,
    pub report: AnalysisReport,
}

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn create_mock_response(status: u16, headers: &[(&str, &str)]) -> ResponseTemplate {
    let mut response = ResponseTemplate::new(status);
    for (key, value) in headers {
        response = response.append_header(*key, *value);
    }
    response
}

pub async fn mount(server: &MockServer, route: &str, status: u16, headers: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(create_mock_response(status, headers))
        .mount(server)
        .await;
}

pub fn test_config() -> ConfigParameter {
    let mut config = ConfigParameter::new();
    config.set_timeout(5);
    config
}

pub async fn audit(url: &str, brief: bool, locale: Locale) -> FetchResult<Audit> {
    let http = Http::new(test_config())?;
    let inner = http.fetch(url).await?;
    let store = inner.header_store();
    let ctx = AnalysisContext::new(inner.url(), inner.status(), brief, locale);
    let report = Analyzer::default().run(&ctx, &store);
    Ok(Audit {
        inner,
        ctx,
        store,
        report,
    })
}

/// Every recommended header that is meaningful over plain HTTP.
pub fn hardened_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("cache-control", "no-cache, no-store, must-revalidate"),
        ("clear-site-data", "\"cache\""),
        ("content-type", "text/html; charset=utf-8"),
        ("cross-origin-embedder-policy", "require-corp"),
        ("cross-origin-opener-policy", "same-origin"),
        ("cross-origin-resource-policy", "same-origin"),
        (
            "content-security-policy",
            "default-src 'self'; frame-ancestors 'none'",
        ),
        ("nel", "{\"report_to\":\"default\",\"max_age\":2592000}"),
        ("permissions-policy", "geolocation=(), camera=()"),
        ("pragma", "no-cache"),
        ("referrer-policy", "strict-origin-when-cross-origin"),
        ("x-content-type-options", "nosniff"),
        ("x-frame-options", "DENY"),
    ]
}
