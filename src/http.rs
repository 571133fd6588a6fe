// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::{debug, info, warn};
use reqwest::Url;
use std::time::{Duration, Instant};

use crate::config::ConfigParameter;
use crate::errors::{FetchError, FetchResult};
use crate::httpinner::HttpInner;

#[derive(Debug, Clone)]
pub struct Http {
    config_ptr: ConfigParameter,
    client: reqwest::Client,
}

impl Http {
    pub fn new(config_ptr: ConfigParameter) -> FetchResult<Self> {
        // Self-signed and expired certificates must not stop a header audit.
        let client = reqwest::Client::builder()
            .user_agent(config_ptr.user_agent())
            .timeout(Duration::from_secs(config_ptr.timeout()))
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Http { config_ptr, client })
    }

    pub fn config(&self) -> &ConfigParameter {
        &self.config_ptr
    }

    /// Fetches `url` once and keeps its status and headers.
    ///
    /// 407 and 5xx responses are fatal; every other status, 4xx included,
    /// is returned for analysis.
    pub async fn fetch(&self, url: &str) -> FetchResult<HttpInner> {
        let target = validate_url(url)?;
        debug!(
            "GET {} (timeout {}s)",
            target,
            self.config_ptr.timeout()
        );

        let start = Instant::now();
        let response = self.client.get(target).send().await?;
        let elapsed = start.elapsed();

        let status = response.status();
        if status.as_u16() == 407 {
            return Err(FetchError::ProxyAuthRequired(url.to_string()));
        }
        if status.is_server_error() {
            return Err(FetchError::ServerError(status.as_u16()));
        }
        if status.is_client_error() {
            warn!("{} answered {}; analyzing the error response", url, status);
        }

        let final_url = response.url().to_string();
        info!(
            "{} answered {} with {} header(s) in {:.2}s",
            final_url,
            status.as_u16(),
            response.headers().len(),
            elapsed.as_secs_f64()
        );

        Ok(HttpInner::new_with_all(
            response.headers().clone(),
            status.as_u16(),
            url.to_string(),
            final_url,
            elapsed,
        ))
    }
}

/// Accepts absolute `http:`/`https:` URLs with a host.
pub fn validate_url(url: &str) -> FetchResult<Url> {
    let url = url.trim();
    if !url.contains("://") {
        return Err(FetchError::UnsupportedScheme(url.to_string()));
    }
    let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(FetchError::UnsupportedScheme(other.to_string())),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("https://example.com")]
    #[case("http://example.com:8080/path?q=1")]
    #[case("  HTTPS://Example.com  ")]
    fn test_validate_url_accepts(#[case] url: &str) {
        assert!(validate_url(url).is_ok());
    }

    #[rstest]
    #[case("example.com")]
    #[case("ftp://example.com")]
    #[case("file:///etc/passwd")]
    fn test_validate_url_rejects_scheme(#[case] url: &str) {
        assert!(matches!(
            validate_url(url),
            Err(FetchError::UnsupportedScheme(_))
        ));
    }

    #[rstest]
    #[case("http://")]
    #[case("https://exa mple.com")]
    fn test_validate_url_rejects_invalid(#[case] url: &str) {
        assert!(matches!(validate_url(url), Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_builds_from_config() {
        let mut config = ConfigParameter::new();
        config.set_timeout(3);
        let http = Http::new(config).unwrap();
        assert_eq!(http.config().timeout(), 3);
    }
}
