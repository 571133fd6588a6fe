// File: text.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;

use super::{ReportConfig, ReportData, ReportEntry, ReportGenerator};
use crate::analysis::Category;
use crate::explain::{self, Message};

const RULE: &str =
    "===============================================================================\n";

pub struct TextGenerator;

impl TextGenerator {
    pub fn new() -> Self {
        Self
    }

    fn render_entry(&self, data: &ReportData, entry: &ReportEntry, output: &mut String) {
        output.push_str(&format!(" {}\n", entry.title));
        if let Some(evidence) = &entry.evidence {
            output.push_str(&format!(
                "   {}: {}\n",
                explain::message(data.locale, Message::Value),
                evidence
            ));
        }
        if let Some(detail) = &entry.detail {
            output.push_str(&format!("   {}\n", detail.text));
            output.push_str(&format!(
                "   {}: {}\n",
                explain::message(data.locale, Message::Reference),
                detail.reference
            ));
        }
    }
}

impl ReportGenerator for TextGenerator {
    fn generate(&self, data: &ReportData, config: &ReportConfig) -> Result<String> {
        let locale = data.locale;
        let mut output = String::new();

        output.push_str(RULE);
        output.push_str(&format!("  {}\n", data.title));
        output.push_str(RULE);
        output.push_str(&format!("{}\n\n", explain::message(locale, Message::InfoSection)));
        output.push_str(&format!(
            " {}:   {}\n",
            explain::message(locale, Message::Date),
            data.generated_at.format("%Y/%m/%d - %H:%M:%S UTC")
        ));
        output.push_str(&format!(
            " {}:    {}\n",
            explain::message(locale, Message::Url),
            data.url
        ));
        if let Some(final_url) = &data.final_url {
            output.push_str(&format!(
                " {}: {}\n",
                explain::message(locale, Message::RedirectedTo),
                final_url
            ));
        }
        output.push_str(&format!(
            " {}: {}\n\n",
            explain::message(locale, Message::Status),
            data.status
        ));

        if config.show_headers {
            output.push_str(&format!(
                "{}\n\n",
                explain::message(locale, Message::RetrievedSection)
            ));
            for header in &data.headers {
                output.push_str(&format!(" {}: {}\n", header.name, header.value));
            }
            output.push('\n');
        }

        for section in &data.sections {
            output.push_str(&format!("{}\n\n", section.title));
            if let Some(intro) = &section.intro {
                output.push_str(&format!(" {}\n\n", intro));
            }
            if section.is_clear() {
                output.push_str(&format!(" {}\n", explain::message(locale, Message::AllOk)));
            }
            for entry in &section.entries {
                self.render_entry(data, entry, &mut output);
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "{}\n\n",
            explain::section_title(locale, Category::CompatibilityReference)
        ));
        if data.compatibility.nothing_enabled() {
            output.push_str(&format!(
                " {}\n",
                explain::message(locale, Message::NothingEnabled)
            ));
        }
        for entry in &data.compatibility.entries {
            if data.brief {
                output.push_str(&format!(" {}\n", entry.header));
            } else {
                output.push_str(&format!(" {}: {}\n", entry.header, entry.reference));
            }
        }
        output.push('\n');

        output.push_str(&format!("{}\n\n", explain::message(locale, Message::SummarySection)));
        let counts = [
            (Message::MissingCount, data.summary.missing),
            (Message::FingerprintCount, data.summary.fingerprint),
            (Message::InsecureCount, data.summary.deprecated_insecure),
            (Message::EmptyCount, data.summary.empty),
        ];
        for (label, count) in counts {
            let label = format!("{}:", explain::message(locale, label));
            output.push_str(&format!("  {:<32}{}\n", label, count));
        }
        output.push('\n');
        output.push_str(RULE);

        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn content_type(&self) -> &'static str {
        "text/plain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::Locale;
    use crate::reports::tests::sample;

    #[test]
    fn test_text_generation() {
        let data = sample(false, Locale::En);
        let text = TextGenerator::new()
            .generate(&data, &ReportConfig::default())
            .unwrap();

        assert!(text.contains("[1. Missing HTTP Security Headers]"));
        assert!(text.contains(" X-XSS-Protection (Unsafe Value)"));
        assert!(text.contains("   Value: nginx/1.25"));
        assert!(text.contains("Missing headers:"));
        assert!(text.contains("[5. Browser Compatibility for Enabled HTTP Security Headers]"));
        assert!(text.contains("X-Frame-Options: https://caniuse.com/?search=X-Frame-Options"));
        assert!(!text.contains("[HTTP Response Headers]"));
    }

    #[test]
    fn test_retrieved_headers_and_brief() {
        let data = sample(true, Locale::En);
        let config = ReportConfig { show_headers: true };
        let text = TextGenerator::new().generate(&data, &config).unwrap();

        assert!(text.contains("[HTTP Response Headers]"));
        assert!(text.contains(" X-Empty: \n"));
        assert!(!text.contains("Ref:"));
        assert!(!text.contains("caniuse.com"));
    }

    #[test]
    fn test_redirect_target_in_info() {
        let mut data = sample(false, Locale::En);
        let config = ReportConfig::default();
        assert!(!TextGenerator::new()
            .generate(&data, &config)
            .unwrap()
            .contains("Redirected to"));

        data.final_url = Some("https://example.com/login".to_string());
        let text = TextGenerator::new().generate(&data, &config).unwrap();
        assert!(text.contains(" Redirected to: https://example.com/login\n"));
    }

    #[test]
    fn test_spanish_text() {
        let data = sample(false, Locale::Es);
        let text = TextGenerator::new()
            .generate(&data, &ReportConfig::default())
            .unwrap();
        assert!(text.contains("[Resumen]"));
        assert!(text.contains("Cabeceras vacías:"));
    }
}
