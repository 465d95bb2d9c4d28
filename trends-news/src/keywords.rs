//! Keyword extraction for trend analysis
//!
//! Text is lowercased, split on every non-alphanumeric character and
//! filtered by length, numeric-only tokens and a stopword set. The filter
//! settings are an explicit [`KeywordConfig`] value owned by the caller.

use std::collections::HashSet;

/// Common English function words excluded from keyword counts
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go",
    "me", "when", "make", "can", "like", "time", "no", "just", "him", "know",
    "take", "people", "into", "year", "your", "good", "some", "could", "them",
    "see", "other", "than", "then", "now", "look", "only", "come", "its", "over",
    "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these",
    "give", "day", "most", "us", "is", "was", "are", "been", "has", "had",
    "were", "said", "did", "having", "may", "should", "am", "being", "more",
];

/// Default minimum token length in characters
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 3;

/// Settings for keyword extraction
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    /// Tokens shorter than this many characters are dropped
    pub min_len: usize,
    /// Lowercase tokens that never count as keywords
    pub stopwords: HashSet<String>,
    /// Drop tokens made only of digits (years, CVE sequence numbers)
    pub drop_numeric: bool,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_KEYWORD_LEN,
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            drop_numeric: true,
        }
    }
}

impl KeywordConfig {
    /// Whether a lowercase token survives the filters
    pub fn accepts(&self, token: &str) -> bool {
        if token.chars().count() < self.min_len {
            return false;
        }
        if self.drop_numeric && token.chars().all(|c| c.is_numeric()) {
            return false;
        }
        !self.stopwords.contains(token)
    }
}

/// Extract keywords from text, in order of appearance
pub fn extract_keywords(text: &str, config: &KeywordConfig) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .filter(|token| config.accepts(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_basic() {
        let config = KeywordConfig::default();
        let keywords = extract_keywords(
            "Critical vulnerability in Windows Server allows remote code execution",
            &config,
        );

        assert!(keywords.contains(&"critical".to_string()));
        assert!(keywords.contains(&"vulnerability".to_string()));
        assert!(keywords.contains(&"windows".to_string()));
        assert!(keywords.contains(&"server".to_string()));
        assert!(!keywords.contains(&"in".to_string()));
    }

    #[test]
    fn test_extract_keywords_case_insensitive() {
        let keywords = extract_keywords("MALWARE Attack Targets USERS", &KeywordConfig::default());
        assert_eq!(keywords, vec!["malware", "attack", "targets", "users"]);
    }

    #[test]
    fn test_extract_keywords_min_length() {
        let text = "A big SQL injection in web app";
        let keywords = extract_keywords(text, &KeywordConfig::default());
        assert_eq!(keywords, vec!["big", "sql", "injection", "web", "app"]);

        let config = KeywordConfig {
            min_len: 4,
            ..KeywordConfig::default()
        };
        assert_eq!(extract_keywords(text, &config), vec!["injection"]);
    }

    #[test]
    fn test_extract_keywords_stopwords() {
        let keywords = extract_keywords(
            "The vulnerability was found in the system and it allows remote access",
            &KeywordConfig::default(),
        );
        for stopword in ["the", "was", "in", "and", "it"] {
            assert!(!keywords.contains(&stopword.to_string()));
        }
        assert!(keywords.contains(&"found".to_string()));
        assert!(keywords.contains(&"system".to_string()));
    }

    #[test]
    fn test_splits_on_punctuation_and_drops_numbers() {
        let keywords = extract_keywords(
            "CVE-2025-21298: zero-day in OLE, patched (again)",
            &KeywordConfig::default(),
        );
        assert_eq!(keywords, vec!["cve", "zero", "ole", "patched", "again"]);
    }

    #[test]
    fn test_keeps_alphanumeric_tokens() {
        let keywords = extract_keywords("log4j and 3cx compromised", &KeywordConfig::default());
        assert_eq!(keywords, vec!["log4j", "3cx", "compromised"]);
    }
}
