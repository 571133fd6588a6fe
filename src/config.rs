// File: config.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::path::{Path, PathBuf};

use crate::explain::Locale;
use crate::reports::ReportFormat;

pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; hdrprobe/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

#[derive(Debug, Clone)]
pub struct ConfigParameter {
    timeout: u64,
    brief: bool,
    show_headers: bool,
    color: bool,
    locale: Locale,
    user_agent: String,
    output_format: Option<ReportFormat>,
    output_dir: PathBuf,
    catalog_path: Option<PathBuf>,
}

impl ConfigParameter {
    pub fn new() -> Self {
        Self {
            timeout: 10,
            brief: false,
            show_headers: false,
            color: true,
            locale: Locale::En,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_format: None,
            output_dir: PathBuf::from("."),
            catalog_path: None,
        }
    }

    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn set_brief(&mut self, brief: bool) {
        self.brief = brief;
    }

    pub fn brief(&self) -> bool {
        self.brief
    }

    pub fn set_show_headers(&mut self, show_headers: bool) {
        self.show_headers = show_headers;
    }

    pub fn show_headers(&self) -> bool {
        self.show_headers
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_user_agent(&mut self, user_agent: String) {
        self.user_agent = user_agent;
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_output_format(&mut self, output_format: Option<ReportFormat>) {
        self.output_format = output_format;
    }

    pub fn output_format(&self) -> Option<ReportFormat> {
        self.output_format
    }

    pub fn set_output_dir(&mut self, output_dir: PathBuf) {
        self.output_dir = output_dir;
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn set_catalog_path(&mut self, catalog_path: Option<PathBuf>) {
        self.catalog_path = catalog_path;
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }
}

impl Default for ConfigParameter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
