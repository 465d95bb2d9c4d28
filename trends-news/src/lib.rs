//! News ingestion for threat trend aggregation
//!
//! This crate turns a directory of dated JSON files into validated
//! [`trends_core::NewsItem`] values:
//! - loader: directory enumeration, per-file parsing, per-item validation
//! - domain: source and slug derivation from article links
//! - keywords: tokenizer and stopword filtering for keyword frequency

pub mod domain;
pub mod error;
pub mod keywords;
pub mod loader;

pub use domain::{derive_slug, extract_domain};
pub use error::NewsError;
pub use keywords::{extract_keywords, KeywordConfig, DEFAULT_STOPWORDS};
pub use loader::{parse_news_file, LoadReport, LoadedNews, NewsLoader, ParsedFile, SkippedFile};
