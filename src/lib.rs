// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::new_without_default)]
#![allow(clippy::unnecessary_map_or)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod explain;
pub mod http;
pub mod httpinner;
pub mod printer;
pub mod reports;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_imports() {
        let _ = config::ConfigParameter::default();
        let _ = analysis::Analyzer::default();
        let _ = analysis::RuleCatalog::default();
        let _ = reports::ReportEngine::new();
        let _ = explain::Locale::default();
    }
}
