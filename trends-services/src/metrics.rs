//! Metrics Engine
//!
//! Computes tag, urgency, source and keyword frequencies, the daily item
//! series and the top article list over two trailing windows. The engine is
//! a pure function of its items, config and reference instant: it reads no
//! clock and touches no files.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use itertools::Itertools;
use tracing::{debug, info};

use trends_core::{
    DailyCount, Kpis, MetricsSnapshot, NewsItem, RankedCount, TopArticle, TrendsResult, Urgency,
};
use trends_news::extract_keywords;

use crate::config::EngineConfig;

/// Trailing range of whole days ending at a reference date (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    /// Window of `days` days whose last day is `end`
    ///
    /// The start saturates at the earliest representable date.
    pub fn ending_at(end: NaiveDate, days: u32) -> Self {
        let span = u64::from(days.max(1)) - 1;
        Self {
            start: end.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN),
            end,
        }
    }

    /// Whether a date falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the window, oldest first
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let len = (self.end - self.start).num_days() + 1;
        (0..len).map(move |offset| start + Duration::days(offset))
    }
}

/// Aggregates news items into a [`MetricsSnapshot`]
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    config: EngineConfig,
}

impl MetricsEngine {
    /// Create a new engine, validating the config
    pub fn new(config: EngineConfig) -> TrendsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the snapshot for `items` as of `now`
    ///
    /// Both windows end on the UTC date of `now`. Items dated after that day
    /// fall outside every window.
    pub fn compute(&self, items: &[NewsItem], now: DateTime<Utc>) -> MetricsSnapshot {
        let reference_date = now.date_naive();
        let long = Window::ending_at(reference_date, self.config.window_days);
        let short = Window::ending_at(reference_date, self.config.short_window_days);

        // Each window filters the full item list on its own
        let long_items: Vec<&NewsItem> = items.iter().filter(|i| long.contains(i.date)).collect();
        let short_items: Vec<&NewsItem> = items.iter().filter(|i| short.contains(i.date)).collect();

        debug!(
            "Window {}..={}: {} items, short window from {}: {} items, {} outside",
            long.start,
            long.end,
            long_items.len(),
            short.start,
            short_items.len(),
            items.len() - long_items.len()
        );

        let tag_counts_30d = tag_counts(&long_items);
        let top_tag = ranked(&tag_counts_30d, 1).into_iter().next().map(|r| r.name);

        let snapshot = MetricsSnapshot {
            generated_at: now,
            reference_date,
            window_days: self.config.window_days,
            short_window_days: self.config.short_window_days,
            tag_counts_7d: tag_counts(&short_items),
            urgency_counts: urgency_counts(&long_items),
            urgency_counts_7d: urgency_counts(&short_items),
            top_sources: ranked(&source_counts(&long_items), self.config.top_sources_limit),
            top_keywords: ranked(&self.keyword_counts(&long_items), self.config.top_keywords_limit),
            daily_counts: daily_counts(&long_items, &long),
            top_articles: top_articles(&long_items, self.config.top_articles_limit),
            kpis: Kpis {
                total_7d: short_items.len(),
                total_30d: long_items.len(),
                top_tag,
            },
            tag_counts_30d,
        };

        info!(
            "Computed metrics: {} items in window, {} in short window, {} keywords, {} top articles",
            snapshot.kpis.total_30d,
            snapshot.kpis.total_7d,
            snapshot.top_keywords.len(),
            snapshot.top_articles.len()
        );

        snapshot
    }

    fn keyword_counts(&self, items: &[&NewsItem]) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for item in items {
            let text = format!("{} {}", item.title, item.summary);
            for keyword in extract_keywords(&text, &self.config.keywords) {
                *counts.entry(keyword).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// Count tags; an item adds one to each of its (distinct) tags
fn tag_counts(items: &[&NewsItem]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        for tag in &item.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

fn urgency_counts(items: &[&NewsItem]) -> BTreeMap<Urgency, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.urgency).or_insert(0) += 1;
    }
    counts
}

fn source_counts(items: &[&NewsItem]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.source.clone()).or_insert(0) += 1;
    }
    counts
}

/// Highest counts first, ties broken alphabetically, truncated to `limit`
fn ranked<'a, I>(counts: I, limit: usize) -> Vec<RankedCount>
where
    I: IntoIterator<Item = (&'a String, &'a usize)>,
{
    counts
        .into_iter()
        .sorted_by(|(a_name, a_count), (b_name, b_count)| {
            b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
        })
        .take(limit)
        .map(|(name, count)| RankedCount::new(name.as_str(), *count))
        .collect()
}

/// One entry per day of the window, zero-filled
fn daily_counts(items: &[&NewsItem], window: &Window) -> Vec<DailyCount> {
    let mut by_day: HashMap<NaiveDate, usize> = HashMap::new();
    for item in items {
        *by_day.entry(item.date).or_insert(0) += 1;
    }

    window
        .days()
        .map(|date| DailyCount {
            date,
            count: by_day.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Most urgent first, then newest; equal keys keep input order
fn top_articles(items: &[&NewsItem], limit: usize) -> Vec<TopArticle> {
    items
        .iter()
        .sorted_by(|a, b| {
            b.urgency
                .rank()
                .cmp(&a.urgency.rank())
                .then_with(|| b.date.cmp(&a.date))
        })
        .take(limit)
        .map(|item| TopArticle::from(*item))
        .collect()
}
