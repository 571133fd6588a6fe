// File: html.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{ReportConfig, ReportData, ReportGenerator, ReportSection};
use crate::analysis::Category;
use crate::explain::{self, Message};

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"https?://[^\s<>"]+"#).unwrap());

// A4 pages with a running page counter; every category starts on a new page.
const PRINT_CSS: &str = r#"
        @page {
            size: A4;
            margin: 20mm 15mm;
            @top-center { content: "hdrprobe"; font: 9pt monospace; }
            @bottom-center { content: "Page " counter(page) " of " counter(pages); font: italic 8pt sans-serif; }
        }
        body { font-family: 'Courier New', monospace; font-size: 10pt; color: #111; margin: 0 auto; max-width: 190mm; }
        h1 { font-size: 14pt; text-align: center; }
        h2 { font-size: 12pt; border-bottom: 1px solid #999; padding-bottom: 2mm; }
        section.category { page-break-before: always; break-before: page; }
        .finding { color: #b00020; font-weight: bold; margin: 3mm 0 1mm 0; }
        .evidence { margin-left: 5mm; }
        .detail { margin-left: 5mm; color: #333; }
        .ok { color: #0a7a28; }
        table { border-collapse: collapse; width: 100%; }
        td, th { border: 1px solid #ccc; padding: 1mm 2mm; text-align: left; vertical-align: top; word-break: break-all; }
        @media screen { section.category { border-top: 1px dashed #ccc; } }
"#;

pub struct HtmlGenerator;

impl HtmlGenerator {
    pub fn new() -> Self {
        Self
    }

    fn escape_html(&self, text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Escapes `text` and turns every URL in it into a link.
    fn linkify(&self, text: &str) -> String {
        let mut html = String::new();
        let mut last = 0;
        for found in URL_PATTERN.find_iter(text) {
            html.push_str(&self.escape_html(&text[last..found.start()]));
            let url = self.escape_html(found.as_str());
            html.push_str(&format!(r#"<a href="{}">{}</a>"#, url, url));
            last = found.end();
        }
        html.push_str(&self.escape_html(&text[last..]));
        html
    }

    fn render_info(&self, data: &ReportData) -> String {
        let locale = data.locale;
        let redirect = data
            .final_url
            .as_ref()
            .map(|url| {
                format!(
                    "\n            <tr><th>{}</th><td>{}</td></tr>",
                    explain::message(locale, Message::RedirectedTo),
                    self.linkify(url)
                )
            })
            .unwrap_or_default();
        format!(
            r#"
    <section class="info">
        <h2>{}</h2>
        <table>
            <tr><th>{}</th><td>{}</td></tr>
            <tr><th>{}</th><td>{}</td></tr>{}
            <tr><th>{}</th><td>{}</td></tr>
        </table>
    </section>"#,
            explain::message(locale, Message::InfoSection),
            explain::message(locale, Message::Date),
            data.generated_at.format("%Y/%m/%d - %H:%M:%S UTC"),
            explain::message(locale, Message::Url),
            self.linkify(&data.url),
            redirect,
            explain::message(locale, Message::Status),
            data.status
        )
    }

    fn render_headers(&self, data: &ReportData) -> String {
        let rows: String = data
            .headers
            .iter()
            .map(|h| {
                format!(
                    "\n            <tr><th>{}</th><td>{}</td></tr>",
                    self.escape_html(&h.name),
                    self.escape_html(&h.value)
                )
            })
            .collect();
        format!(
            r#"
    <section class="headers">
        <h2>{}</h2>
        <table>{}
        </table>
    </section>"#,
            explain::message(data.locale, Message::RetrievedSection),
            rows
        )
    }

    fn render_section(&self, data: &ReportData, section: &ReportSection) -> String {
        let mut html = format!(
            "\n    <section class=\"category\" id=\"{}\">\n        <h2>{}</h2>\n",
            section.category.id(),
            self.escape_html(&section.title)
        );
        if let Some(intro) = &section.intro {
            html.push_str(&format!("        <p><em>{}</em></p>\n", self.escape_html(intro)));
        }
        if section.is_clear() {
            html.push_str(&format!(
                "        <p class=\"ok\">{}</p>\n",
                explain::message(data.locale, Message::AllOk)
            ));
        }
        for entry in &section.entries {
            html.push_str(&format!(
                "        <p class=\"finding\">{}</p>\n",
                self.escape_html(&entry.title)
            ));
            if let Some(evidence) = &entry.evidence {
                html.push_str(&format!(
                    "        <p class=\"evidence\">{}: <code>{}</code></p>\n",
                    explain::message(data.locale, Message::Value),
                    self.escape_html(evidence)
                ));
            }
            if let Some(detail) = &entry.detail {
                html.push_str(&format!(
                    "        <p class=\"detail\">{}<br>{}: {}</p>\n",
                    self.linkify(&detail.text),
                    explain::message(data.locale, Message::Reference),
                    self.linkify(&detail.reference)
                ));
            }
        }
        html.push_str("    </section>");
        html
    }

    fn render_compatibility(&self, data: &ReportData) -> String {
        let locale = data.locale;
        let mut html = format!(
            "\n    <section class=\"category\" id=\"{}\">\n        <h2>{}</h2>\n",
            Category::CompatibilityReference.id(),
            explain::section_title(locale, Category::CompatibilityReference)
        );
        if data.compatibility.nothing_enabled() {
            html.push_str(&format!(
                "        <p>{}</p>\n",
                explain::message(locale, Message::NothingEnabled)
            ));
        }
        for entry in &data.compatibility.entries {
            if data.brief {
                html.push_str(&format!("        <p>{}</p>\n", self.escape_html(&entry.header)));
            } else {
                html.push_str(&format!(
                    "        <p>{}: {}</p>\n",
                    self.escape_html(&entry.header),
                    self.linkify(&entry.reference)
                ));
            }
        }
        html.push_str("    </section>");
        html
    }

    fn render_summary(&self, data: &ReportData) -> String {
        let locale = data.locale;
        format!(
            r#"
    <section class="summary">
        <h2>{}</h2>
        <table>
            <tr><th>{}</th><td>{}</td></tr>
            <tr><th>{}</th><td>{}</td></tr>
            <tr><th>{}</th><td>{}</td></tr>
            <tr><th>{}</th><td>{}</td></tr>
        </table>
    </section>"#,
            explain::message(locale, Message::SummarySection),
            explain::message(locale, Message::MissingCount),
            data.summary.missing,
            explain::message(locale, Message::FingerprintCount),
            data.summary.fingerprint,
            explain::message(locale, Message::InsecureCount),
            data.summary.deprecated_insecure,
            explain::message(locale, Message::EmptyCount),
            data.summary.empty
        )
    }
}

impl ReportGenerator for HtmlGenerator {
    fn generate(&self, data: &ReportData, config: &ReportConfig) -> Result<String> {
        let headers = if config.show_headers {
            self.render_headers(data)
        } else {
            String::new()
        };
        let sections: String = data
            .sections
            .iter()
            .map(|s| self.render_section(data, s))
            .collect();

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
    <h1>{}</h1>{}{}{}{}{}
    <footer><p>hdrprobe v{}</p></footer>
</body>
</html>"#,
            data.locale.code(),
            self.escape_html(&data.title),
            PRINT_CSS,
            self.escape_html(&data.title),
            self.render_info(data),
            self.render_summary(data),
            headers,
            sections,
            self.render_compatibility(data),
            env!("CARGO_PKG_VERSION")
        );
        Ok(html)
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn content_type(&self) -> &'static str {
        "text/html"
    }

    fn supports_pagination(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::Locale;
    use crate::reports::tests::sample;

    #[test]
    fn test_html_generation() {
        let data = sample(false, Locale::En);
        let html = HtmlGenerator::new()
            .generate(&data, &ReportConfig::default())
            .unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("@page"));
        assert!(html.contains("counter(pages)"));
        assert!(html.contains(r#"<section class="category" id="deprecated_insecure">"#));
        assert!(html.contains(
            r#"<a href="https://caniuse.com/?search=X-Frame-Options">https://caniuse.com/?search=X-Frame-Options</a>"#
        ));
    }

    #[test]
    fn test_redirect_row() {
        let mut data = sample(false, Locale::Es);
        data.final_url = Some("https://example.com/".to_string());
        let html = HtmlGenerator::new()
            .generate(&data, &ReportConfig::default())
            .unwrap();
        assert!(html.contains(
            r#"<tr><th>Redirigido a</th><td><a href="https://example.com/">https://example.com/</a></td></tr>"#
        ));
    }

    #[test]
    fn test_linkify_escapes_text() {
        let generator = HtmlGenerator::new();
        assert_eq!(
            generator.linkify("<b> see https://example.com/a?b=1&c=2 now"),
            "&lt;b&gt; see <a href=\"https://example.com/a?b=1&amp;c=2\">https://example.com/a?b=1&amp;c=2</a> now"
        );
    }

    #[test]
    fn test_spanish_lang_attribute() {
        let data = sample(true, Locale::Es);
        let html = HtmlGenerator::new()
            .generate(&data, &ReportConfig { show_headers: true })
            .unwrap();
        assert!(html.contains(r#"<html lang="es">"#));
        assert!(html.contains("[Cabeceras HTTP de respuesta]"));
    }

    #[test]
    fn test_generator_metadata() {
        let generator = HtmlGenerator::new();
        assert!(generator.supports_pagination());
        assert_eq!(generator.file_extension(), "html");
        assert_eq!(generator.content_type(), "text/html");
    }
}
