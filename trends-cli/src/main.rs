//! Threat Trends Generator
//!
//! Aggregates daily news JSON files into a metrics snapshot and writes it to
//! the stats directory as `trends.json` plus a dated archive copy.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trends_news::NewsLoader;
use trends_services::{sample_items, EngineConfig, MetricsEngine, SnapshotStore};

use crate::cli::Args;

fn main() -> ExitCode {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,threat_trends=debug")),
        )
        .init();

    let args = Args::parse();

    info!("=== Threat Trends Generator ===");
    info!(
        "Days to analyze: {}, news dir: {}, stats dir: {}",
        args.days,
        args.news_dir.display(),
        args.stats_dir.display()
    );

    finish(run(&args))
}

/// Log the outcome once and map it to the process exit code
fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => {
            info!("=== Trends generation complete ===");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Trends generation failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let short_window_days = if args.short_days > args.days {
        warn!(
            "Short window of {} days exceeds the {}-day window, using {}",
            args.short_days, args.days, args.days
        );
        args.days
    } else {
        args.short_days
    };

    let config = EngineConfig {
        window_days: args.days,
        short_window_days,
        ..EngineConfig::default()
    };
    let engine = MetricsEngine::new(config).context("Invalid engine configuration")?;
    let store = SnapshotStore::new(&args.stats_dir);
    let now = args.reference_instant();

    if args.sample {
        info!("Generating sample data...");
        let items = sample_items(now.date_naive(), args.days);
        let snapshot = engine.compute(&items, now);
        store
            .save_sample(&snapshot)
            .context("Failed to write sample snapshot")?;
        return Ok(());
    }

    let loaded = NewsLoader::new(&args.news_dir)
        .load()
        .with_context(|| format!("Failed to load news from {}", args.news_dir.display()))?;

    if !loaded.report.skipped_files.is_empty() || loaded.report.items_skipped > 0 {
        warn!(
            "Skipped {} malformed files and {} invalid items",
            loaded.report.skipped_files.len(),
            loaded.report.items_skipped
        );
    }

    let items = loaded.into_items();
    let snapshot = engine.compute(&items, now);
    if snapshot.is_empty() {
        warn!("No news items found in the window. Generating empty metrics.");
    }

    let saved = store
        .save(&snapshot)
        .context("Failed to write trends snapshot")?;
    match saved.archive {
        Some(archive) => info!(
            "Wrote {} and {}",
            saved.latest.display(),
            archive.display()
        ),
        None => info!("Wrote {}", saved.latest.display()),
    }

    Ok(())
}
