// File: context.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::explain::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
    Other,
}

impl Scheme {
    pub fn of(url: &str) -> Self {
        let url = url.trim_start().to_ascii_lowercase();
        if url.starts_with("https:") {
            Scheme::Https
        } else if url.starts_with("http:") {
            Scheme::Http
        } else {
            Scheme::Other
        }
    }
}

/// Per-run facts the evaluators may consult besides the headers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisContext {
    url: String,
    final_url: Option<String>,
    scheme: Scheme,
    status: u16,
    timestamp: DateTime<Utc>,
    brief: bool,
    locale: Locale,
}

impl AnalysisContext {
    pub fn new(url: &str, status: u16, brief: bool, locale: Locale) -> Self {
        Self {
            url: url.to_string(),
            final_url: None,
            scheme: Scheme::of(url),
            status,
            timestamp: Utc::now(),
            brief,
            locale,
        }
    }

    /// Records where a redirect landed. Scheme checks keep using the
    /// requested URL.
    pub fn with_final_url(mut self, final_url: &str) -> Self {
        self.final_url = Some(final_url.to_string());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn final_url(&self) -> Option<&str> {
        self.final_url.as_deref()
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn brief(&self) -> bool {
        self.brief
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
