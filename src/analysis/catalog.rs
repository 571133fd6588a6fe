// File: catalog.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::CatalogError;

const REQUIRED_HEADERS: &[&str] = &[
    "Cache-Control",
    "Clear-Site-Data",
    "Content-Type",
    "Cross-Origin-Embedder-Policy",
    "Cross-Origin-Opener-Policy",
    "Cross-Origin-Resource-Policy",
    "Content-Security-Policy",
    "Expect-CT",
    "NEL",
    "Permissions-Policy",
    "Pragma",
    "Referrer-Policy",
    "Strict-Transport-Security",
    "X-Content-Type-Options",
    "X-Frame-Options",
];

// Header names that leak the stack behind a site. Wappalyzer-style
// "Name [Technology]" annotations are optional.
const FINGERPRINT_HEADERS: &[&str] = &[
    "Akamai-Cache-Status [Akamai]",
    "CF-Cache-Status [Cloudflare]",
    "CF-Ray [Cloudflare]",
    "Composed-By [Ruby on Rails]",
    "Fastly-Debug-Digest [Fastly]",
    "Liferay-Portal [Liferay]",
    "MicrosoftOfficeWebServer [Microsoft Office Web Server]",
    "MicrosoftSharePointTeamServices [SharePoint]",
    "Powered-By",
    "Server",
    "SPRequestGuid [SharePoint]",
    "Via",
    "X-AH-Environment [Acquia Cloud]",
    "X-Akamai-Transformed [Akamai]",
    "X-Amz-Cf-Id [Amazon CloudFront]",
    "X-Amz-Cf-Pop [Amazon CloudFront]",
    "X-Amz-Request-Id [Amazon S3]",
    "X-AspNet-Version [ASP.NET]",
    "X-AspNetMvc-Version [ASP.NET MVC]",
    "X-Backend-Server",
    "X-Cache",
    "X-Confluence-Request-Time [Confluence]",
    "X-Content-Powered-By [K2]",
    "X-Drupal-Cache [Drupal]",
    "X-Drupal-Dynamic-Cache [Drupal]",
    "X-Envoy-Upstream-Service-Time [Envoy]",
    "X-Generator",
    "X-GitHub-Request-Id [GitHub Pages]",
    "X-Hudson [Hudson]",
    "X-Jenkins [Jenkins]",
    "X-Kong-Proxy-Latency [Kong]",
    "X-Kong-Upstream-Latency [Kong]",
    "X-LiteSpeed-Cache [LiteSpeed]",
    "X-Magento-Cache-Debug [Magento]",
    "X-Mod-Pagespeed [PageSpeed]",
    "X-Nf-Request-Id [Netlify]",
    "X-Nginx-Cache-Status [nginx]",
    "X-OWA-Version [Outlook Web Access]",
    "X-Page-Speed [PageSpeed]",
    "X-Powered-By",
    "X-Powered-By-Plesk [Plesk]",
    "X-Powered-CMS",
    "X-Rack-Cache [Rack]",
    "X-Redirect-By [WordPress]",
    "X-Served-By",
    "X-Server-Powered-By",
    "X-Shopify-Stage [Shopify]",
    "X-SharePointHealthScore [SharePoint]",
    "X-Sucuri-ID [Sucuri]",
    "X-Turbo-Charged-By [LiteSpeed]",
    "X-Varnish [Varnish]",
    "X-Vercel-Id [Vercel]",
    "X-Wix-Request-Id [Wix]",
];

// caniuse.com tracks these; display order follows this list.
const COMPATIBILITY_HEADERS: &[&str] = &[
    "Cache-Control",
    "Clear-Site-Data",
    "Content-Type",
    "Content-Security-Policy",
    "Cross-Origin-Embedder-Policy",
    "Cross-Origin-Opener-Policy",
    "Cross-Origin-Resource-Policy",
    "Expect-CT",
    "NEL",
    "Permissions-Policy",
    "Pragma",
    "Referrer-Policy",
    "Strict-Transport-Security",
    "X-Content-Type-Options",
    "X-Frame-Options",
];

const INSECURE_METHODS: &[&str] = &[
    "PUT", "HEAD", "OPTIONS", "CONNECT", "TRACE", "TRACK", "DELETE", "DEBUG", "PATCH", "*",
];

const UNSAFE_ORIGINS: &[&str] = &["*", "null"];

const CACHE_CONTROL_DIRECTIVES: &[&str] = &["no-cache", "no-store", "must-revalidate"];

const CSP_DIRECTIVES: &[&str] = &[
    "child-src",
    "connect-src",
    "default-src",
    "font-src",
    "frame-src",
    "img-src",
    "manifest-src",
    "media-src",
    "object-src",
    "prefetch-src",
    "script-src",
    "script-src-elem",
    "script-src-attr",
    "style-src",
    "style-src-elem",
    "style-src-attr",
    "worker-src",
    "base-uri",
    "sandbox",
    "form-action",
    "frame-ancestors",
    "navigate-to",
    "report-to",
    "upgrade-insecure-requests",
    "require-sri-for",
    "require-trusted-types-for",
    "trusted-types",
];

const CSP_DEPRECATED: &[&str] = &["block-all-mixed-content", "plugin-types", "referrer", "report-uri"];

const CSP_UNSAFE: &[&str] = &["unsafe-inline", "unsafe-eval"];

// Sources and directives that legitimately carry '='.
const CSP_EQUAL_ALLOWED: &[&str] = &["nonce", "sha", "style-src-elem", "report-uri", "report-to"];

const PERMISSIONS_FEATURES: &[&str] = &[
    "accelerometer",
    "ambient-light-sensor",
    "autoplay",
    "battery",
    "browsing-topics",
    "camera",
    "clipboard-read",
    "clipboard-write",
    "conversion-measurement",
    "cross-origin-isolated",
    "display-capture",
    "document-access",
    "document-domain",
    "document-write",
    "encrypted-media",
    "execution-while-not-rendered",
    "execution-while-out-of-viewport",
    "focus-without-user-activation",
    "font-display-late-swap",
    "fullscreen",
    "gamepad",
    "geolocation",
    "gyroscope",
    "hid",
    "idle-detection",
    "interest-cohort",
    "layout-animations",
    "lazyload",
    "legacy-image-formats",
    "loading-frame-default-eager",
    "magnetometer",
    "microphone",
    "midi",
    "navigation-override",
    "oversized-images",
    "payment",
    "picture-in-picture",
    "publickey-credentials-get",
    "screen-wake-lock",
    "serial",
    "speaker",
    "speaker-selection",
    "sync-script",
    "sync-xhr",
    "trust-token-redemption",
    "unoptimized-images",
    "unoptimized-lossless-images",
    "unoptimized-lossless-images-strict",
    "unoptimized-lossy-images",
    "unsized-media",
    "usb",
    "vertical-scroll",
    "vibrate",
    "wake-lock",
    "web-share",
    "window-placement",
    "xr-spatial-tracking",
];

const REFERRER_RECOMMENDED: &[&str] = &[
    "strict-origin",
    "strict-origin-when-cross-origin",
    "no-referrer-when-downgrade",
    "no-referrer",
];

const COOKIE_ATTRIBUTES: &[&str] = &["secure", "httponly"];

const HSTS_DIRECTIVES: &[&str] = &["includeSubDomains", "max-age"];

const CLIENT_ERROR_CODES: &[u16] = &[
    400, 401, 402, 403, 405, 406, 409, 410, 411, 412, 413, 414, 415, 416, 417, 421, 422, 423, 424,
    425, 426, 428, 429, 431, 451,
];

// One year, in seconds.
const HSTS_MIN_MAX_AGE: u64 = 31_536_000;

pub static DEFAULT_CATALOG: Lazy<RuleCatalog> = Lazy::new(RuleCatalog::default);

/// Names of the token lists the insecure-value rules match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenList {
    InsecureMethods,
    UnsafeOrigins,
    CacheControlDirectives,
    CspDirectives,
    CspDeprecated,
    CspUnsafe,
    CspEqualAllowed,
    PermissionsFeatures,
    ReferrerRecommended,
    CookieAttributes,
    HstsDirectives,
}

/// Declarative vocabulary of every check.
///
/// The embedded defaults cover a complete audit; a JSON file may replace
/// any subset of the lists, fields left out keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleCatalog {
    pub required_headers: Vec<String>,
    pub fingerprint_headers: Vec<String>,
    pub compatibility_headers: Vec<String>,
    pub insecure_methods: Vec<String>,
    pub unsafe_origins: Vec<String>,
    pub cache_control_directives: Vec<String>,
    pub csp_directives: Vec<String>,
    pub csp_deprecated: Vec<String>,
    pub csp_unsafe: Vec<String>,
    pub csp_equal_allowed: Vec<String>,
    pub permissions_features: Vec<String>,
    pub referrer_recommended: Vec<String>,
    pub cookie_attributes: Vec<String>,
    pub hsts_directives: Vec<String>,
    pub client_error_codes: Vec<u16>,
    pub hsts_min_max_age: u64,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self {
            required_headers: owned(REQUIRED_HEADERS),
            fingerprint_headers: owned(FINGERPRINT_HEADERS),
            compatibility_headers: owned(COMPATIBILITY_HEADERS),
            insecure_methods: owned(INSECURE_METHODS),
            unsafe_origins: owned(UNSAFE_ORIGINS),
            cache_control_directives: owned(CACHE_CONTROL_DIRECTIVES),
            csp_directives: owned(CSP_DIRECTIVES),
            csp_deprecated: owned(CSP_DEPRECATED),
            csp_unsafe: owned(CSP_UNSAFE),
            csp_equal_allowed: owned(CSP_EQUAL_ALLOWED),
            permissions_features: owned(PERMISSIONS_FEATURES),
            referrer_recommended: owned(REFERRER_RECOMMENDED),
            cookie_attributes: owned(COOKIE_ATTRIBUTES),
            hsts_directives: owned(HSTS_DIRECTIVES),
            client_error_codes: CLIENT_ERROR_CODES.to_vec(),
            hsts_min_max_age: HSTS_MIN_MAX_AGE,
        }
    }
}

impl RuleCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: RuleCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("Loading rule catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn tokens(&self, list: TokenList) -> &[String] {
        match list {
            TokenList::InsecureMethods => &self.insecure_methods,
            TokenList::UnsafeOrigins => &self.unsafe_origins,
            TokenList::CacheControlDirectives => &self.cache_control_directives,
            TokenList::CspDirectives => &self.csp_directives,
            TokenList::CspDeprecated => &self.csp_deprecated,
            TokenList::CspUnsafe => &self.csp_unsafe,
            TokenList::CspEqualAllowed => &self.csp_equal_allowed,
            TokenList::PermissionsFeatures => &self.permissions_features,
            TokenList::ReferrerRecommended => &self.referrer_recommended,
            TokenList::CookieAttributes => &self.cookie_attributes,
            TokenList::HstsDirectives => &self.hsts_directives,
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.required_headers.is_empty() {
            return Err(CatalogError::Invalid(
                "required_headers must not be empty".to_string(),
            ));
        }
        if let Some(blank) = self
            .required_headers
            .iter()
            .chain(&self.fingerprint_headers)
            .chain(&self.compatibility_headers)
            .find(|name| fingerprint_name(name).is_empty())
        {
            return Err(CatalogError::Invalid(format!(
                "header entry '{}' has no name",
                blank
            )));
        }
        if self.hsts_min_max_age == 0 {
            return Err(CatalogError::Invalid(
                "hsts_min_max_age must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Bare header name of a fingerprint entry, without its `[Technology]` note.
pub fn fingerprint_name(entry: &str) -> &str {
    entry
        .split_once('[')
        .map_or(entry, |(name, _)| name)
        .trim()
}
