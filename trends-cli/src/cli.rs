//! Command line arguments

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use trends_services::MAX_WINDOW_DAYS;

/// Threat Trends - aggregate daily news files into dashboard metrics
#[derive(Parser, Debug)]
#[command(name = "threat-trends", version, about, long_about = None)]
pub struct Args {
    /// Number of days to analyze
    #[arg(
        long,
        env = "TRENDS_DAYS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS))
    )]
    pub days: u32,

    /// Length of the short trend window in days
    #[arg(
        long,
        env = "TRENDS_SHORT_DAYS",
        default_value_t = 7,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS))
    )]
    pub short_days: u32,

    /// Generate sample data for preview instead of reading the news directory
    #[arg(long)]
    pub sample: bool,

    /// Directory holding YYYY-MM-DD.json news files
    #[arg(long, env = "TRENDS_NEWS_DIR", default_value = "news")]
    pub news_dir: PathBuf,

    /// Directory the snapshots are written to
    #[arg(long, env = "TRENDS_STATS_DIR", default_value = "stats")]
    pub stats_dir: PathBuf,

    /// Compute as of this date (YYYY-MM-DD) instead of now, for reproducible runs
    #[arg(long, env = "TRENDS_AS_OF", value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,
}

impl Args {
    /// Instant the engine computes against: midnight UTC of `--as-of`, or now
    pub fn reference_instant(&self) -> DateTime<Utc> {
        match self.as_of {
            Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
            None => Utc::now(),
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {:?}: {}", s, e))
}
