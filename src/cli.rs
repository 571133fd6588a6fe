// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigParameter, DEFAULT_USER_AGENT};
use crate::explain::Locale;
use crate::reports::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(
        short = 'u',
        long = "url",
        help = "URL to analyze, including the scheme ('http:' or 'https:')"
    )]
    pub url: String,

    #[arg(
        short = 'b',
        long = "brief",
        help = "Brief analysis, without references or details"
    )]
    pub brief: bool,

    #[arg(
        short = 'r',
        long = "retrieved",
        help = "Show the retrieved HTTP response headers"
    )]
    pub retrieved: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        help = "Save the analysis to a file in the given format"
    )]
    pub output: Option<ReportFormat>,

    #[arg(
        long = "output-dir",
        default_value = ".",
        help = "Directory for saved reports"
    )]
    pub output_dir: PathBuf,

    #[arg(
        short = 'l',
        long = "lang",
        value_enum,
        default_value_t = Locale::En,
        help = "Language of the explanations"
    )]
    pub lang: Locale,

    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = 10,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(long = "user-agent", help = "Override the User-Agent header")]
    pub user_agent: Option<String>,

    #[arg(long = "catalog", help = "JSON file replacing the built-in rule lists")]
    pub catalog: Option<PathBuf>,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn to_config(&self) -> ConfigParameter {
        let mut config = ConfigParameter::new();
        config.set_timeout(self.timeout);
        config.set_brief(self.brief);
        config.set_show_headers(self.retrieved);
        config.set_color(!self.no_color);
        config.set_locale(self.lang);
        config.set_user_agent(
            self.user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );
        config.set_output_format(self.output);
        config.set_output_dir(self.output_dir.clone());
        config.set_catalog_path(self.catalog.clone());
        config
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_minimal_arguments() {
        let cli = Cli::try_parse_from(["hdrprobe", "-u", "https://example.com"]).unwrap();
        let config = cli.to_config();

        assert_eq!(cli.url, "https://example.com");
        assert_eq!(config.timeout(), 10);
        assert!(!config.brief());
        assert!(config.color());
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.output_format(), None);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "hdrprobe",
            "--url",
            "http://example.com",
            "-b",
            "-r",
            "-o",
            "html",
            "--output-dir",
            "reports",
            "-l",
            "es",
            "-t",
            "5",
            "--user-agent",
            "auditor/1.0",
            "--catalog",
            "rules.json",
            "--no-color",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = cli.to_config();

        assert!(config.brief());
        assert!(config.show_headers());
        assert!(!config.color());
        assert_eq!(config.output_format(), Some(ReportFormat::Html));
        assert_eq!(config.output_dir(), std::path::Path::new("reports"));
        assert_eq!(config.locale(), Locale::Es);
        assert_eq!(config.timeout(), 5);
        assert_eq!(config.user_agent(), "auditor/1.0");
        assert_eq!(
            config.catalog_path(),
            Some(std::path::Path::new("rules.json"))
        );
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[rstest]
    #[case(&["hdrprobe"])]
    #[case(&["hdrprobe", "-u", "https://example.com", "-o", "pdf"])]
    #[case(&["hdrprobe", "-u", "https://example.com", "-l", "de"])]
    fn test_rejected_arguments(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let cli = Cli::try_parse_from([
            "hdrprobe",
            "-u",
            "https://example.com",
            "--log-level",
            "chatty",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }
}
