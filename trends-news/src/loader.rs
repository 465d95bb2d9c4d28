//! News directory loader
//!
//! Enumerates `YYYY-MM-DD.json` files in a directory and converts each into
//! a [`NewsFile`] of validated items. A malformed file or item is skipped
//! with a warning and recorded in the [`LoadReport`]; only a directory that
//! cannot be enumerated fails the load.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use trends_core::{NewsFile, NewsItem, Urgency};

use crate::domain::{derive_slug, extract_domain};
use crate::error::NewsError;

/// A file that was skipped during loading
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Summary of one directory load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Files whose name matched the date pattern
    pub files_seen: usize,
    /// Files parsed successfully
    pub files_loaded: usize,
    /// Files skipped because they could not be read or parsed
    pub skipped_files: Vec<SkippedFile>,
    /// Items that passed validation
    pub items_loaded: usize,
    /// Items dropped by validation
    pub items_skipped: usize,
}

/// Result of loading a news directory
#[derive(Debug, Clone, Default)]
pub struct LoadedNews {
    /// Parsed files in ascending file name order
    pub files: Vec<NewsFile>,
    pub report: LoadReport,
}

impl LoadedNews {
    /// Iterate over every loaded item in file order
    pub fn items(&self) -> impl Iterator<Item = &NewsItem> {
        self.files.iter().flat_map(|file| file.items.iter())
    }

    /// Flatten into the item list, preserving file order
    pub fn into_items(self) -> Vec<NewsItem> {
        self.files.into_iter().flat_map(|file| file.items).collect()
    }
}

/// A successfully parsed file plus the number of items it dropped
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub file: NewsFile,
    pub skipped_items: usize,
}

/// Loader for a directory of dated news files
#[derive(Debug, Clone)]
pub struct NewsLoader {
    news_dir: PathBuf,
}

impl NewsLoader {
    /// Create a loader for the given directory
    pub fn new(news_dir: impl Into<PathBuf>) -> Self {
        Self {
            news_dir: news_dir.into(),
        }
    }

    /// Directory this loader reads from
    pub fn news_dir(&self) -> &Path {
        &self.news_dir
    }

    /// Load every dated file in the directory
    ///
    /// Fails only when the directory itself cannot be enumerated.
    #[instrument(skip(self), fields(dir = %self.news_dir.display()))]
    pub fn load(&self) -> Result<LoadedNews, NewsError> {
        let directory_error = |source| NewsError::Directory {
            path: self.news_dir.clone(),
            source,
        };

        let mut candidates: Vec<(PathBuf, NaiveDate)> = Vec::new();
        for entry in std::fs::read_dir(&self.news_dir).map_err(directory_error)? {
            let path = entry.map_err(directory_error)?.path();
            match file_date(&path) {
                Some(date) => candidates.push((path, date)),
                None => debug!("Ignoring {}: not a dated news file", path.display()),
            }
        }

        // File names sort chronologically, which fixes the input order
        candidates.sort();

        let mut loaded = LoadedNews::default();
        loaded.report.files_seen = candidates.len();

        for (path, date) in candidates {
            match read_news_file(&path, date) {
                Ok(parsed) => {
                    debug!(
                        "Loaded {} items from {} ({} skipped)",
                        parsed.file.items.len(),
                        path.display(),
                        parsed.skipped_items
                    );
                    loaded.report.files_loaded += 1;
                    loaded.report.items_loaded += parsed.file.items.len();
                    loaded.report.items_skipped += parsed.skipped_items;
                    loaded.files.push(parsed.file);
                }
                Err(e) => {
                    warn!("Skipping news file {}: {}", path.display(), e);
                    loaded.report.skipped_files.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Loaded {} items from {} of {} news files",
            loaded.report.items_loaded, loaded.report.files_loaded, loaded.report.files_seen
        );
        Ok(loaded)
    }
}

/// Extract the date encoded in a `YYYY-MM-DD.json` file name
fn file_date(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_str()?;
    let pattern = regex::Regex::new(r"^(\d{4}-\d{2}-\d{2})\.json$").ok()?;
    let caps = pattern.captures(name)?;
    NaiveDate::parse_from_str(caps.get(1)?.as_str(), "%Y-%m-%d").ok()
}

fn read_news_file(path: &Path, fallback_date: NaiveDate) -> Result<ParsedFile, NewsError> {
    let contents = std::fs::read_to_string(path).map_err(|source| NewsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_news_file(path, &contents, fallback_date)
}

/// Raw file body before validation
#[derive(Debug, Deserialize)]
struct RawNewsFile {
    #[serde(default)]
    date: Option<String>,
    items: Vec<Value>,
}

/// Raw item before validation
#[derive(Debug, Deserialize)]
struct RawNewsItem {
    title: Option<String>,
    link: Option<String>,
    summary: Option<String>,
    tags: Option<Vec<String>>,
    urgency: Option<Value>,
    slug: Option<String>,
    source: Option<String>,
    date: Option<String>,
}

/// Parse the contents of one news file
///
/// `fallback_date` is the date encoded in the file name; it is used when the
/// body has no `date` key. Items that fail validation are dropped and
/// counted in [`ParsedFile::skipped_items`].
pub fn parse_news_file(
    path: &Path,
    contents: &str,
    fallback_date: NaiveDate,
) -> Result<ParsedFile, NewsError> {
    let value: Value = serde_json::from_str(contents).map_err(|e| NewsError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let schema_error = |message: String| NewsError::Schema {
        path: path.to_path_buf(),
        message,
    };

    if !value.is_object() {
        return Err(schema_error("root is not a JSON object".to_string()));
    }

    let raw: RawNewsFile =
        serde_json::from_value(value).map_err(|e| schema_error(e.to_string()))?;

    let date = match raw.date.as_deref() {
        Some(s) => parse_date(s).ok_or_else(|| schema_error(format!("invalid date {:?}", s)))?,
        None => fallback_date,
    };

    let mut items = Vec::with_capacity(raw.items.len());
    let mut skipped_items = 0;

    for (index, value) in raw.items.into_iter().enumerate() {
        match normalize_item(value, date) {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!("Skipping item {} in {}: {}", index, path.display(), e);
                skipped_items += 1;
            }
        }
    }

    Ok(ParsedFile {
        file: NewsFile { date, items },
        skipped_items,
    })
}

/// Validate a raw item and fill in derived fields
fn normalize_item(value: Value, file_date: NaiveDate) -> Result<NewsItem, NewsError> {
    if !value.is_object() {
        return Err(NewsError::InvalidItem("item is not a JSON object".to_string()));
    }

    let raw: RawNewsItem =
        serde_json::from_value(value).map_err(|e| NewsError::InvalidItem(e.to_string()))?;

    let title = non_empty(raw.title)
        .ok_or_else(|| NewsError::InvalidItem("missing title".to_string()))?;
    let link = non_empty(raw.link)
        .ok_or_else(|| NewsError::InvalidItem(format!("missing link for {:?}", title)))?;

    let date = match raw.date.as_deref() {
        Some(s) => parse_date(s)
            .ok_or_else(|| NewsError::InvalidItem(format!("invalid date {:?} for {:?}", s, title)))?,
        None => file_date,
    };

    let urgency = match raw.urgency {
        Some(Value::String(label)) => Urgency::coerce(Some(&label)),
        Some(Value::Null) | None => Urgency::Unknown,
        Some(other) => {
            debug!("Non-string urgency {} for {:?}", other, title);
            Urgency::Unknown
        }
    };

    let mut tags: Vec<String> = Vec::new();
    for tag in raw.tags.unwrap_or_default() {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    let source = non_empty(raw.source).unwrap_or_else(|| extract_domain(&link));
    let slug = non_empty(raw.slug).unwrap_or_else(|| derive_slug(&link));

    Ok(NewsItem {
        title,
        summary: raw.summary.map(|s| s.trim().to_string()).unwrap_or_default(),
        tags,
        urgency,
        slug,
        source,
        date,
        link,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a calendar date, or the UTC date of a timestamp
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.date());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_file_date_pattern() {
        assert_eq!(file_date(Path::new("news/2025-01-27.json")), Some(day(27)));
        assert_eq!(file_date(Path::new("news/2025-13-01.json")), None);
        assert_eq!(file_date(Path::new("news/latest.json")), None);
        assert_eq!(file_date(Path::new("news/2025-01-27.json.bak")), None);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2025-01-26"), Some(day(26)));
        assert_eq!(parse_date("2025-01-26T23:10:00Z"), Some(day(26)));
        assert_eq!(parse_date("2025-01-26T08:00:00.123"), Some(day(26)));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_parse_date_uses_utc_day_of_offset_timestamps() {
        assert_eq!(parse_date("2025-01-26T23:10:00-05:00"), Some(day(27)));
        assert_eq!(parse_date("2025-01-27T01:30:00+03:00"), Some(day(26)));
        assert_eq!(parse_date("2025-01-26T12:00:00+02:00"), Some(day(26)));
    }

    #[test]
    fn test_normalize_derives_source_and_date() {
        let item = normalize_item(
            json!({
                "title": "  Critical flaw  ",
                "link": "https://www.example.com/a/b",
                "tags": ["cve", " cve ", "", "windows"],
                "urgency": "high"
            }),
            day(27),
        )
        .unwrap();

        assert_eq!(item.title, "Critical flaw");
        assert_eq!(item.source, "example.com");
        assert_eq!(item.date, day(27));
        assert_eq!(item.urgency, Urgency::High);
        assert_eq!(item.tags, vec!["cve", "windows"]);
        assert_eq!(item.slug, derive_slug("https://www.example.com/a/b"));
    }

    #[test]
    fn test_normalize_keeps_explicit_fields() {
        let item = normalize_item(
            json!({
                "title": "Phishing wave",
                "link": "https://example.com/p",
                "source": "Security Week",
                "slug": "phishing-wave",
                "date": "2025-01-20",
                "urgency": 7
            }),
            day(27),
        )
        .unwrap();

        assert_eq!(item.source, "Security Week");
        assert_eq!(item.slug, "phishing-wave");
        assert_eq!(item.date, day(20));
        assert_eq!(item.urgency, Urgency::Unknown);
    }

    #[test]
    fn test_normalize_rejects_invalid_items() {
        assert!(normalize_item(json!({"link": "https://example.com"}), day(1)).is_err());
        assert!(normalize_item(json!({"title": "  ", "link": "https://example.com"}), day(1)).is_err());
        assert!(normalize_item(json!({"title": "No link"}), day(1)).is_err());
        assert!(normalize_item(json!({"title": "T", "link": "L", "tags": "malware"}), day(1)).is_err());
        assert!(normalize_item(json!({"title": "T", "link": "L", "date": "soon"}), day(1)).is_err());
        assert!(normalize_item(json!("just a string"), day(1)).is_err());
    }

    #[test]
    fn test_parse_news_file_errors() {
        let path = Path::new("2025-01-27.json");

        let err = parse_news_file(path, "{ invalid json }", day(27)).unwrap_err();
        assert!(matches!(err, NewsError::Parse { .. }));

        let err = parse_news_file(path, "[]", day(27)).unwrap_err();
        assert!(matches!(err, NewsError::Schema { .. }));

        let err = parse_news_file(path, r#"{"date": "2025-01-27"}"#, day(27)).unwrap_err();
        assert!(matches!(err, NewsError::Schema { .. }));

        let err = parse_news_file(path, r#"{"date": "nope", "items": []}"#, day(27)).unwrap_err();
        assert!(matches!(err, NewsError::Schema { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_parse_news_file_skips_bad_items() {
        let body = json!({
            "items": [
                {"title": "Good", "link": "https://example.com/good"},
                {"summary": "no title"},
                42
            ]
        })
        .to_string();

        let parsed = parse_news_file(Path::new("2025-01-25.json"), &body, day(25)).unwrap();
        assert_eq!(parsed.file.date, day(25));
        assert_eq!(parsed.file.items.len(), 1);
        assert_eq!(parsed.skipped_items, 2);
        assert_eq!(parsed.file.items[0].date, day(25));
    }
}
