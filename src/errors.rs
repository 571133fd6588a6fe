// File: errors.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    InvalidUrl(String),
    UnsupportedScheme(String),
    Timeout(String),
    Connection(String),
    ProxyAuthRequired(String),
    ServerError(u16),
    Client(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => write!(f, "'{}' is not a valid URL (check syntax and try again)", url),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Schema error: '{}' is not supported, use 'http:' or 'https:'",
                scheme
            ),
            Self::Timeout(url) => write!(
                f,
                "Timeout error: '{}' is taking too long to respond (wait a while and try again)",
                url
            ),
            Self::Connection(msg) => write!(f, "Connection error: {}", msg),
            Self::ProxyAuthRequired(url) => {
                write!(f, "407 error: proxy authentication required to access '{}'", url)
            }
            Self::ServerError(status) => write!(
                f,
                "{} error: server error while requesting the URL (wait a while and try again)",
                status
            ),
            Self::Client(e) => write!(f, "HTTP client error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map_or_else(|| "Unknown URL".to_string(), |u| u.to_string());
        if error.is_timeout() {
            Self::Timeout(url)
        } else if error.is_connect() {
            Self::Connection(format!("'{}' could not be reached ({})", url, error))
        } else if error.is_builder() {
            Self::InvalidUrl(url)
        } else {
            Self::Client(error)
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Rule catalog I/O error: {}", e),
            Self::Parse(e) => write!(f, "Rule catalog parse error: {}", e),
            Self::Invalid(msg) => write!(f, "Invalid rule catalog: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error)
    }
}
