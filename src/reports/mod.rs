// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::analysis::{
    AnalysisContext, AnalysisReport, Category, CategoryCounts, CategoryReport, CompatibilityReport,
    HeaderEntry, HeaderStore, RuleId,
};
use crate::explain::{self, Detail, Locale};

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

/// Renderer-ready view of one analysis: every string already resolved for
/// the chosen locale.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub generated_at: DateTime<Utc>,
    pub title: String,
    pub url: String,
    pub final_url: Option<String>,
    pub status: u16,
    pub locale: Locale,
    pub brief: bool,
    pub headers: Vec<HeaderEntry>,
    pub sections: Vec<ReportSection>,
    pub compatibility: CompatibilityReport,
    pub summary: CategoryCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub category: Category,
    pub title: String,
    pub intro: Option<String>,
    pub entries: Vec<ReportEntry>,
}

impl ReportSection {
    pub fn is_clear(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub rule: RuleId,
    pub title: String,
    pub evidence: Option<String>,
    pub detail: Option<Detail>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Include the retrieved response headers ahead of the analysis.
    pub show_headers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Txt,
    Md,
    Html,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Txt => "txt",
            ReportFormat::Md => "md",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }
}

pub trait ReportGenerator {
    fn generate(&self, data: &ReportData, config: &ReportConfig) -> Result<String>;
    fn file_extension(&self) -> &'static str;
    fn content_type(&self) -> &'static str;
    fn supports_pagination(&self) -> bool {
        false
    }
}

pub struct ReportEngine;

impl ReportEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_report<P: AsRef<Path>>(
        &self,
        format: ReportFormat,
        data: &ReportData,
        config: &ReportConfig,
        output_path: Option<P>,
    ) -> Result<String> {
        let generator = self.get_generator(format);
        let content = generator.generate(data, config)?;

        if let Some(path) = output_path {
            std::fs::write(path.as_ref(), &content)?;
            info!("Report written to {}", path.as_ref().display());
        }

        Ok(content)
    }

    pub fn create_report_data(
        &self,
        ctx: &AnalysisContext,
        store: &HeaderStore,
        report: &AnalysisReport,
    ) -> ReportData {
        let locale = ctx.locale();
        let sections = Category::COUNTED
            .iter()
            .filter_map(|category| report.category(*category))
            .map(|section| self.resolve_section(section, locale, ctx.brief()))
            .collect();

        ReportData {
            generated_at: ctx.timestamp(),
            title: format!("hdrprobe: {}", explain::message(locale, explain::Message::Tool)),
            url: ctx.url().to_string(),
            final_url: ctx.final_url().map(str::to_string),
            status: ctx.status(),
            locale,
            brief: ctx.brief(),
            headers: store.iter().cloned().collect(),
            sections,
            compatibility: report.compatibility.clone(),
            summary: report.counts(),
        }
    }

    /// `<host>_headers_<yyyymmdd>.<ext>` inside `dir`.
    pub fn output_path(
        &self,
        dir: &Path,
        url: &str,
        date: DateTime<Utc>,
        format: ReportFormat,
    ) -> PathBuf {
        let host = reqwest::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| sanitize(url));
        dir.join(format!(
            "{}_headers_{}.{}",
            host,
            date.format("%Y%m%d"),
            format.extension()
        ))
    }

    fn get_generator(&self, format: ReportFormat) -> Box<dyn ReportGenerator> {
        match format {
            ReportFormat::Txt => Box::new(text::TextGenerator::new()),
            ReportFormat::Md => Box::new(markdown::MarkdownGenerator::new()),
            ReportFormat::Html => Box::new(html::HtmlGenerator::new()),
            ReportFormat::Json => Box::new(json::JsonGenerator::new()),
        }
    }

    fn resolve_section(&self, section: &CategoryReport, locale: Locale, brief: bool) -> ReportSection {
        let entries = section
            .iter()
            .map(|finding| ReportEntry {
                rule: finding.rule,
                title: explain::title(locale, finding),
                evidence: finding.evidence.clone(),
                detail: if brief {
                    None
                } else {
                    explain::detail(locale, finding)
                },
            })
            .collect();

        ReportSection {
            category: section.category,
            title: explain::section_title(locale, section.category).to_string(),
            intro: if brief {
                None
            } else {
                explain::intro(locale, section.category).map(str::to_string)
            },
            entries,
        }
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn sanitize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "report".to_string()
    } else {
        cleaned
    }
}
