// File: markdown.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;

use super::{ReportConfig, ReportData, ReportGenerator, ReportSection};
use crate::analysis::Category;
use crate::explain::{self, Message};

pub struct MarkdownGenerator;

impl MarkdownGenerator {
    pub fn new() -> Self {
        Self
    }

    fn escape_markdown(&self, text: &str) -> String {
        text.replace('|', "\\|")
            .replace('*', "\\*")
            .replace('_', "\\_")
            .replace('`', "\\`")
            .replace('#', "\\#")
            .replace('[', "\\[")
            .replace(']', "\\]")
    }

    fn heading(&self, title: &str) -> String {
        title.trim_start_matches('[').trim_end_matches(']').to_string()
    }

    fn render_section(&self, data: &ReportData, section: &ReportSection, md: &mut String) {
        md.push_str(&format!("## {}\n\n", self.heading(&section.title)));
        if let Some(intro) = &section.intro {
            md.push_str(&format!("_{}_\n\n", intro));
        }
        if section.is_clear() {
            md.push_str(&format!("✅ {}\n\n", explain::message(data.locale, Message::AllOk)));
            return;
        }

        for entry in &section.entries {
            md.push_str(&format!("- **{}**", self.escape_markdown(&entry.title)));
            if let Some(evidence) = &entry.evidence {
                md.push_str(&format!(": `{}`", evidence.replace('`', "'")));
            }
            md.push('\n');
            if let Some(detail) = &entry.detail {
                md.push_str(&format!("  - {}\n", detail.text));
                md.push_str(&format!("  - <{}>\n", detail.reference));
            }
        }
        md.push('\n');
    }
}

impl ReportGenerator for MarkdownGenerator {
    fn generate(&self, data: &ReportData, config: &ReportConfig) -> Result<String> {
        let locale = data.locale;
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", data.title));
        md.push_str(&format!(
            "**{}:** {} | **{}:** {} | **{}:** {}\n\n",
            explain::message(locale, Message::Date),
            data.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            explain::message(locale, Message::Url),
            data.url,
            explain::message(locale, Message::Status),
            data.status
        ));
        if let Some(final_url) = &data.final_url {
            md.push_str(&format!(
                "**{}:** {}\n\n",
                explain::message(locale, Message::RedirectedTo),
                final_url
            ));
        }
        md.push_str("---\n\n");

        md.push_str(&format!(
            "## {}\n\n",
            self.heading(explain::message(locale, Message::SummarySection))
        ));
        md.push_str("| | |\n");
        md.push_str("|--------|-------|\n");
        md.push_str(&format!(
            "| {} | {} |\n",
            explain::message(locale, Message::MissingCount),
            data.summary.missing
        ));
        md.push_str(&format!(
            "| {} | {} |\n",
            explain::message(locale, Message::FingerprintCount),
            data.summary.fingerprint
        ));
        md.push_str(&format!(
            "| {} | {} |\n",
            explain::message(locale, Message::InsecureCount),
            data.summary.deprecated_insecure
        ));
        md.push_str(&format!(
            "| {} | {} |\n\n",
            explain::message(locale, Message::EmptyCount),
            data.summary.empty
        ));

        if config.show_headers {
            md.push_str(&format!(
                "## {}\n\n",
                self.heading(explain::message(locale, Message::RetrievedSection))
            ));
            md.push_str("| Header | Value |\n");
            md.push_str("|--------|-------|\n");
            for header in &data.headers {
                md.push_str(&format!(
                    "| {} | {} |\n",
                    self.escape_markdown(&header.name),
                    self.escape_markdown(&header.value)
                ));
            }
            md.push('\n');
        }

        for section in &data.sections {
            self.render_section(data, section, &mut md);
        }

        md.push_str(&format!(
            "## {}\n\n",
            self.heading(explain::section_title(locale, Category::CompatibilityReference))
        ));
        if data.compatibility.nothing_enabled() {
            md.push_str(&format!("{}\n", explain::message(locale, Message::NothingEnabled)));
        }
        for entry in &data.compatibility.entries {
            if data.brief {
                md.push_str(&format!("- {}\n", entry.header));
            } else {
                md.push_str(&format!("- [{}]({})\n", entry.header, entry.reference));
            }
        }

        Ok(md)
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn content_type(&self) -> &'static str {
        "text/markdown"
    }
}
