// File: httpinner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::analysis::HeaderStore;

/// Snapshot of one fetched response; the body is never kept.
#[derive(Debug, Clone)]
pub struct HttpInner {
    headers: HeaderMap,
    status: u16,
    url: String,
    final_url: String,
    elapsed: Duration,
}

impl HttpInner {
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// URL as requested.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// URL after redirects.
    pub fn final_url(&self) -> &str {
        &self.final_url
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn new_with_all(
        headers: HeaderMap,
        status: u16,
        url: String,
        final_url: String,
        elapsed: Duration,
    ) -> Self {
        HttpInner {
            headers,
            status,
            url,
            final_url,
            elapsed,
        }
    }

    pub fn redirected(&self) -> bool {
        self.url.trim_end_matches('/') != self.final_url.trim_end_matches('/')
    }

    pub fn header_store(&self) -> HeaderStore {
        HeaderStore::from_header_map(self.status, &self.headers)
    }
}
