// File: printer.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use colored::*;
use std::fmt::Write;
use std::path::Path;
use std::time::Duration;

use crate::analysis::Category;
use crate::explain::{self, Locale, Message};
use crate::reports::{ReportConfig, ReportData, ReportSection};

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_report(data: &ReportData, config: &ReportConfig) {
    print!("{}", render(data, config));
}

pub fn print_report_saved(locale: Locale, path: &Path) {
    print_success(&format!(
        "{} \"{}\".",
        explain::message(locale, Message::ReportSaved),
        path.display()
    ));
}

pub fn print_elapsed(locale: Locale, elapsed: Duration) {
    println!(
        "{} {}",
        explain::message(locale, Message::AnalysisDone),
        format!("{:.2}s", elapsed.as_secs_f64()).bold()
    );
}

/// Console rendering of a report. Colors follow the global `colored` override.
pub fn render(data: &ReportData, config: &ReportConfig) -> String {
    let locale = data.locale;
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", data.title.bold().cyan());
    let _ = writeln!(out, "{}", "─".repeat(60).bright_black());
    let _ = writeln!(out, "{}", explain::message(locale, Message::InfoSection).bold());
    let _ = writeln!(
        out,
        " {:<8}{}",
        format!("{}:", explain::message(locale, Message::Date)),
        data.generated_at.format("%Y/%m/%d - %H:%M:%S")
    );
    let _ = writeln!(
        out,
        " {:<8}{}",
        format!("{}:", explain::message(locale, Message::Url)),
        data.url
    );
    if let Some(final_url) = &data.final_url {
        let _ = writeln!(
            out,
            " {}: {}",
            explain::message(locale, Message::RedirectedTo),
            final_url.yellow()
        );
    }
    let _ = writeln!(
        out,
        " {:<8}{}\n",
        format!("{}:", explain::message(locale, Message::Status)),
        status_colored(data.status)
    );

    if config.show_headers {
        let _ = writeln!(
            out,
            "{}",
            explain::message(locale, Message::RetrievedSection).bold()
        );
        for header in &data.headers {
            let _ = writeln!(out, " {}: {}", header.name.cyan(), header.value);
        }
        out.push('\n');
    }

    for section in &data.sections {
        render_section(&mut out, locale, section);
    }

    let _ = writeln!(
        out,
        "{}",
        explain::section_title(locale, Category::CompatibilityReference).bold()
    );
    if data.compatibility.nothing_enabled() {
        let _ = writeln!(out, " {}", explain::message(locale, Message::NothingEnabled).yellow());
    }
    for entry in &data.compatibility.entries {
        if data.brief {
            let _ = writeln!(out, " {}", entry.header);
        } else {
            let _ = writeln!(out, " {}: {}", entry.header, entry.reference.dimmed());
        }
    }
    out.push('\n');

    let _ = writeln!(out, "{}", explain::message(locale, Message::SummarySection).bold());
    let counts = [
        (Message::MissingCount, data.summary.missing),
        (Message::FingerprintCount, data.summary.fingerprint),
        (Message::InsecureCount, data.summary.deprecated_insecure),
        (Message::EmptyCount, data.summary.empty),
    ];
    for (label, count) in counts {
        let label = format!("{}:", explain::message(locale, label));
        let count = if count == 0 {
            count.to_string().green()
        } else {
            count.to_string().red()
        };
        let _ = writeln!(out, "  {:<32}{}", label, count);
    }
    out.push('\n');
    out
}

fn render_section(out: &mut String, locale: Locale, section: &ReportSection) {
    let _ = writeln!(out, "{}", section.title.bold());
    if let Some(intro) = &section.intro {
        let _ = writeln!(out, " {}", intro.dimmed());
    }
    if section.is_clear() {
        let _ = writeln!(out, " {}", explain::message(locale, Message::AllOk).green());
    }
    for entry in &section.entries {
        match &entry.evidence {
            Some(evidence) => {
                let _ = writeln!(out, " {} {}", entry.title.red().bold(), evidence);
            }
            None => {
                let _ = writeln!(out, " {}", entry.title.red().bold());
            }
        }
        if let Some(detail) = &entry.detail {
            let _ = writeln!(out, "   {}", detail.text);
            let _ = writeln!(
                out,
                "   {}: {}",
                explain::message(locale, Message::Reference),
                detail.reference.dimmed()
            );
        }
    }
    out.push('\n');
}

fn status_colored(status: u16) -> ColoredString {
    match status {
        200..=299 => status.to_string().green(),
        300..=399 => status.to_string().yellow(),
        _ => status.to_string().red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisContext, Analyzer, HeaderStore};
    use crate::reports::ReportEngine;

    fn data(brief: bool) -> ReportData {
        let ctx = AnalysisContext::new("https://example.com", 200, brief, Locale::En);
        let store = HeaderStore::build_from(
            200,
            vec![("X-Powered-By", "Express"), ("X-Frame-Options", "DENY")],
        );
        let report = Analyzer::default().run(&ctx, &store);
        ReportEngine::new().create_report_data(&ctx, &store, &report)
    }

    #[test]
    fn test_render_full() {
        let out = render(&data(false), &ReportConfig::default());
        assert!(out.contains("X-Powered-By"));
        assert!(out.contains("Express"));
        assert!(out.contains("Nothing to report, all seems OK!"));
        assert!(out.contains("https://caniuse.com/?search=X-Frame-Options"));
        assert!(out.contains("Ref:"));
    }

    #[test]
    fn test_render_brief_with_headers() {
        let out = render(&data(true), &ReportConfig { show_headers: true });
        assert!(out.contains("[HTTP Response Headers]"));
        assert!(!out.contains("Ref:"));
        assert!(!out.contains("caniuse.com"));
        assert!(out.contains("Missing headers:"));
    }
}
