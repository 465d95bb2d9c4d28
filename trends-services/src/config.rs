//! Engine configuration

use trends_core::{TrendsError, TrendsResult};
use trends_news::KeywordConfig;

/// Longest window the engine accepts, in days
pub const MAX_WINDOW_DAYS: u32 = 3650;

/// Configuration for the metrics engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Length of the long window in days (daily series, sources, keywords, articles)
    pub window_days: u32,
    /// Length of the short window in days
    pub short_window_days: u32,
    /// Maximum entries in `top_sources`
    pub top_sources_limit: usize,
    /// Maximum entries in `top_keywords`
    pub top_keywords_limit: usize,
    /// Maximum entries in `top_articles`
    pub top_articles_limit: usize,
    /// Keyword tokenizer settings
    pub keywords: KeywordConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            short_window_days: 7,
            top_sources_limit: 10,
            top_keywords_limit: 20,
            top_articles_limit: 10,
            keywords: KeywordConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Default config with a custom long window
    pub fn with_window_days(window_days: u32) -> Self {
        Self {
            window_days,
            ..Self::default()
        }
    }

    /// Check window lengths
    pub fn validate(&self) -> TrendsResult<()> {
        if self.window_days == 0 {
            return Err(TrendsError::config("window_days must be at least 1"));
        }
        if self.window_days > MAX_WINDOW_DAYS {
            return Err(TrendsError::config(format!(
                "window_days must be at most {} (got {})",
                MAX_WINDOW_DAYS, self.window_days
            )));
        }
        if self.short_window_days == 0 {
            return Err(TrendsError::config("short_window_days must be at least 1"));
        }
        if self.short_window_days > self.window_days {
            return Err(TrendsError::config(format!(
                "short window ({} days) is longer than the window ({} days)",
                self.short_window_days, self.window_days
            )));
        }
        Ok(())
    }
}
