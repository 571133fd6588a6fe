// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use simple_logger::SimpleLogger;
use std::time::{Duration, Instant};

use hdrprobe::analysis::{AnalysisContext, Analyzer, RuleCatalog, DEFAULT_CATALOG};
use hdrprobe::cli::Cli;
use hdrprobe::http::Http;
use hdrprobe::printer::{print_elapsed, print_error, print_report, print_report_saved};
use hdrprobe::reports::{ReportConfig, ReportEngine};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(format!("Requesting {}", url));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn run(cli: Cli) -> Result<()> {
    SimpleLogger::new()
        .with_level(cli.log_level())
        .init()
        .context("Failed to initialize logger")?;

    let config = cli.to_config();
    if !config.color() {
        colored::control::set_override(false);
    }
    debug!("Configuration: {:?}", config);

    let catalog: RuleCatalog = match config.catalog_path() {
        Some(path) => RuleCatalog::from_file(path)
            .with_context(|| format!("Cannot use rule catalog {}", path.display()))?,
        None => DEFAULT_CATALOG.clone(),
    };

    let start = Instant::now();
    let http = Http::new(config.clone())?;
    let pb = spinner(&cli.url);
    let fetched = http.fetch(&cli.url).await;
    pb.finish_and_clear();
    let inner = fetched?;

    let store = inner.header_store();
    let mut ctx = AnalysisContext::new(
        inner.url(),
        inner.status(),
        config.brief(),
        config.locale(),
    );
    if inner.redirected() {
        debug!("{} redirected to {}", inner.url(), inner.final_url());
        ctx = ctx.with_final_url(inner.final_url());
    }
    let report = Analyzer::new(&catalog).run(&ctx, &store);

    let engine = ReportEngine::new();
    let data = engine.create_report_data(&ctx, &store, &report);
    let report_config = ReportConfig {
        show_headers: config.show_headers(),
    };

    match config.output_format() {
        Some(format) => {
            std::fs::create_dir_all(config.output_dir()).with_context(|| {
                format!("Cannot create {}", config.output_dir().display())
            })?;
            let path = engine.output_path(config.output_dir(), ctx.url(), ctx.timestamp(), format);
            engine.generate_report(format, &data, &report_config, Some(&path))?;
            print_report_saved(config.locale(), &path);
        }
        None => print_report(&data, &report_config),
    }

    print_elapsed(config.locale(), start.elapsed());
    Ok(())
}
