//! Synthetic news feed for previews
//!
//! Produces a deterministic set of items spread over a window so that the
//! sample snapshot goes through the same engine as real data and is
//! reproducible for a given reference date.

use chrono::{Duration, NaiveDate};

use trends_core::{NewsItem, Urgency};
use trends_news::{derive_slug, extract_domain};

use crate::config::MAX_WINDOW_DAYS;

struct SampleArticle {
    title: &'static str,
    summary: &'static str,
    base_url: &'static str,
    tags: &'static [&'static str],
    urgency: Urgency,
}

const SAMPLE_ARTICLES: &[SampleArticle] = &[
    SampleArticle {
        title: "Critical Windows Vulnerability Exploited in Wild",
        summary: "A critical vulnerability in Windows is being actively exploited to gain remote code execution.",
        base_url: "https://thehackernews.com/sample",
        tags: &["vulnerability", "windows", "exploit"],
        urgency: Urgency::High,
    },
    SampleArticle {
        title: "Ransomware Gang Targets Healthcare Providers",
        summary: "Hospitals report encrypted systems and data theft after a coordinated ransomware campaign.",
        base_url: "https://www.bleepingcomputer.com/sample",
        tags: &["ransomware", "healthcare"],
        urgency: Urgency::High,
    },
    SampleArticle {
        title: "Phishing Campaign Impersonates Cloud Login Pages",
        summary: "Attackers harvest credentials with convincing cloud login pages sent through email.",
        base_url: "https://www.securityweek.com/sample",
        tags: &["phishing", "credentials"],
        urgency: Urgency::Medium,
    },
    SampleArticle {
        title: "Malware Loader Spreads Through Fake Browser Updates",
        summary: "A malware loader delivers infostealers to users who install fake browser updates.",
        base_url: "https://thehackernews.com/sample",
        tags: &["malware", "infostealer"],
        urgency: Urgency::Medium,
    },
    SampleArticle {
        title: "Data Breach Exposes Customer Records at Retailer",
        summary: "A misconfigured database exposed customer records including addresses and order history.",
        base_url: "https://www.darkreading.com/sample",
        tags: &["breach", "data"],
        urgency: Urgency::Low,
    },
    SampleArticle {
        title: "Security Patch Roundup for Network Appliances",
        summary: "Vendors ship security patches for firewall and VPN appliances ahead of exploitation.",
        base_url: "https://www.securityweek.com/sample",
        tags: &["vulnerability", "patch"],
        urgency: Urgency::Low,
    },
];

/// Generate sample items for the `days` days ending at `reference_date`
///
/// Each day carries between one and three items, cycling through a fixed
/// set of articles, oldest day first. `days` is capped at
/// [`MAX_WINDOW_DAYS`] and days before the earliest representable date are
/// skipped.
pub fn sample_items(reference_date: NaiveDate, days: u32) -> Vec<NewsItem> {
    let mut items = Vec::new();

    for offset in (0..i64::from(days.min(MAX_WINDOW_DAYS))).rev() {
        let Some(date) = reference_date.checked_sub_signed(Duration::days(offset)) else {
            continue;
        };
        let per_day = 1 + (offset % 3) as usize;

        for k in 0..per_day {
            let article = &SAMPLE_ARTICLES[(offset as usize * 3 + k) % SAMPLE_ARTICLES.len()];
            let link = format!("{}/{}-{}", article.base_url, date.format("%Y-%m-%d"), k);

            items.push(NewsItem {
                title: article.title.to_string(),
                summary: article.summary.to_string(),
                tags: article.tags.iter().map(|t| t.to_string()).collect(),
                urgency: article.urgency,
                slug: derive_slug(&link),
                source: extract_domain(&link),
                date,
                link,
            });
        }
    }

    items
}
