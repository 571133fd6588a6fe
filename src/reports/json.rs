// File: json.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::Result;

use super::{ReportConfig, ReportData, ReportGenerator};

pub struct JsonGenerator;

impl JsonGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonGenerator {
    fn generate(&self, data: &ReportData, config: &ReportConfig) -> Result<String> {
        let mut value = serde_json::to_value(data)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))?;
        if !config.show_headers {
            if let Some(object) = value.as_object_mut() {
                object.remove("headers");
            }
        }
        let json = serde_json::to_string_pretty(&value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))?;
        Ok(json)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::Locale;
    use crate::reports::tests::sample;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_structure() {
        let data = sample(false, Locale::En);
        let json = JsonGenerator::new()
            .generate(&data, &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["missing"], 14);
        assert_eq!(value["sections"][2]["category"], "deprecated_insecure");
        assert_eq!(value["sections"][2]["entries"][0]["rule"]["rule"], "http_scheme");
        assert_eq!(value["locale"], "en");
        assert!(value.get("headers").is_none());
    }

    #[test]
    fn test_json_with_headers() {
        let data = sample(false, Locale::En);
        let json = JsonGenerator::new()
            .generate(&data, &ReportConfig { show_headers: true })
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["headers"].as_array().map(Vec::len), Some(4));
    }
}
