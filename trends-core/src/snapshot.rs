//! Metrics snapshot produced by one run of the engine
//!
//! A snapshot is built once and never mutated. Every collection in it is
//! ordered deterministically so that identical inputs serialize to
//! identical bytes.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{NewsItem, TrendsResult, Urgency};

/// Maximum number of characters kept from an article summary
pub const TOP_ARTICLE_SUMMARY_CHARS: usize = 200;

/// A named counter in a ranked list (sources, keywords)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCount {
    pub name: String,
    pub count: usize,
}

impl RankedCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Number of items on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// An article selected for the top articles list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopArticle {
    pub title: String,
    pub link: String,
    pub source: String,
    pub slug: String,
    /// Summary truncated to [`TOP_ARTICLE_SUMMARY_CHARS`] characters
    pub summary: String,
    pub urgency: Urgency,
    pub date: NaiveDate,
    pub tags: Vec<String>,
}

impl From<&NewsItem> for TopArticle {
    fn from(item: &NewsItem) -> Self {
        Self {
            title: item.title.clone(),
            link: item.link.clone(),
            source: item.source.clone(),
            slug: item.slug.clone(),
            summary: item.summary.chars().take(TOP_ARTICLE_SUMMARY_CHARS).collect(),
            urgency: item.urgency,
            date: item.date,
            tags: item.tags.clone(),
        }
    }
}

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    /// Items in the short window
    pub total_7d: usize,
    /// Items in the long window
    pub total_30d: usize,
    /// Most frequent tag in the long window
    pub top_tag: Option<String>,
}

/// Aggregate statistics for one run
///
/// The `_7d` and `_30d` fields cover the configured short and long windows,
/// which default to 7 and 30 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Instant the snapshot was computed against
    pub generated_at: DateTime<Utc>,
    /// Last day covered by every window
    pub reference_date: NaiveDate,
    /// Length of the long window in days
    pub window_days: u32,
    /// Length of the short window in days
    pub short_window_days: u32,
    pub tag_counts_7d: BTreeMap<String, usize>,
    pub tag_counts_30d: BTreeMap<String, usize>,
    /// Urgency distribution over the long window
    pub urgency_counts: BTreeMap<Urgency, usize>,
    /// Urgency distribution over the short window
    pub urgency_counts_7d: BTreeMap<Urgency, usize>,
    pub top_sources: Vec<RankedCount>,
    pub top_keywords: Vec<RankedCount>,
    /// One entry per day of the long window, oldest first
    pub daily_counts: Vec<DailyCount>,
    pub top_articles: Vec<TopArticle>,
    pub kpis: Kpis,
}

impl MetricsSnapshot {
    /// Whether the long window held no items at all
    pub fn is_empty(&self) -> bool {
        self.kpis.total_30d == 0
    }

    /// Pretty-printed JSON with a trailing newline
    pub fn to_json_pretty(&self) -> TrendsResult<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
