// File: config_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::config::{ConfigParameter, DEFAULT_USER_AGENT};
    use crate::explain::Locale;
    use crate::reports::ReportFormat;
    use rstest::*;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_config_parameter_default() {
        let config = ConfigParameter::default();

        assert_eq!(config.timeout(), 10);
        assert_eq!(config.brief(), false);
        assert_eq!(config.show_headers(), false);
        assert_eq!(config.color(), true);
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.output_format(), None);
        assert_eq!(config.output_dir(), Path::new("."));
        assert_eq!(config.catalog_path(), None);
    }

    #[test]
    fn test_config_parameter_new_matches_default() {
        let config = ConfigParameter::new();
        let default = ConfigParameter::default();

        assert_eq!(config.timeout(), default.timeout());
        assert_eq!(config.user_agent(), default.user_agent());
        assert_eq!(config.output_dir(), default.output_dir());
    }

    #[rstest]
    #[case(1)]
    #[case(30)]
    #[case(120)]
    fn test_set_timeout(#[case] timeout: u64) {
        let mut config = ConfigParameter::new();
        config.set_timeout(timeout);
        assert_eq!(config.timeout(), timeout);
    }

    #[rstest]
    #[case(ReportFormat::Txt)]
    #[case(ReportFormat::Md)]
    #[case(ReportFormat::Html)]
    #[case(ReportFormat::Json)]
    fn test_set_output_format(#[case] format: ReportFormat) {
        let mut config = ConfigParameter::new();
        config.set_output_format(Some(format));
        assert_eq!(config.output_format(), Some(format));
    }

    #[test]
    fn test_setters() {
        let mut config = ConfigParameter::new();
        config.set_brief(true);
        config.set_show_headers(true);
        config.set_color(false);
        config.set_locale(Locale::Es);
        config.set_user_agent("auditor/1.0".to_string());
        config.set_output_dir(PathBuf::from("reports"));
        config.set_catalog_path(Some(PathBuf::from("catalog.json")));

        assert_eq!(config.brief(), true);
        assert_eq!(config.show_headers(), true);
        assert_eq!(config.color(), false);
        assert_eq!(config.locale(), Locale::Es);
        assert_eq!(config.user_agent(), "auditor/1.0");
        assert_eq!(config.output_dir(), Path::new("reports"));
        assert_eq!(config.catalog_path(), Some(Path::new("catalog.json")));
    }

    #[test]
    fn test_default_user_agent_names_tool() {
        assert!(DEFAULT_USER_AGENT.contains("hdrprobe/"));
    }
}
