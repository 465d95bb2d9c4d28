//! Core types for the threat trends pipeline
//!
//! This crate defines the shared data structures used across the pipeline,
//! including validated news items, urgency levels and the metrics snapshot
//! produced on every run.

pub mod error;
pub mod news;
pub mod snapshot;
pub mod urgency;

pub use error::{TrendsError, TrendsResult};
pub use news::{NewsFile, NewsItem};
pub use snapshot::{DailyCount, Kpis, MetricsSnapshot, RankedCount, TopArticle};
pub use urgency::Urgency;
