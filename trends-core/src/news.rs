//! News data structures for threat trend aggregation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Urgency;

/// A validated threat news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Article title (never empty)
    pub title: String,
    /// Article URL
    pub link: String,
    /// Brief summary/excerpt
    #[serde(default)]
    pub summary: String,
    /// Category labels, distinct within one item
    #[serde(default)]
    pub tags: Vec<String>,
    /// Reported urgency
    #[serde(default)]
    pub urgency: Urgency,
    /// Identifier (explicit, or derived from a hash of the link)
    pub slug: String,
    /// Publishing domain (explicit, or derived from the link)
    pub source: String,
    /// Effective date of the article
    pub date: NaiveDate,
}

/// One dated input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsFile {
    /// Date the file covers
    pub date: NaiveDate,
    /// Items that passed validation, in file order
    pub items: Vec<NewsItem>,
}
