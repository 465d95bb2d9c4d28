//! Source and slug derivation from article links

use sha2::{Digest, Sha256};

/// Source name used when a link yields no host at all
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Number of hex characters kept for derived slugs
const SLUG_HEX_LEN: usize = 16;

/// Extract the publishing domain from a URL, without any `www.` prefix
///
/// Links that do not parse as absolute URLs fall back to the text before the
/// first path separator, so `"example.com/post"` still yields `"example.com"`.
pub fn extract_domain(link: &str) -> String {
    let link = link.trim();

    let host = match url::Url::parse(link) {
        Ok(parsed) => parsed.host_str().map(str::to_string),
        Err(_) => None,
    };

    let host = host.unwrap_or_else(|| {
        let without_scheme = link.split_once("://").map(|(_, rest)| rest).unwrap_or(link);
        without_scheme
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default()
            .to_string()
    });

    let host = host.to_lowercase();
    let domain = host.strip_prefix("www.").unwrap_or(&host);

    if domain.is_empty() {
        UNKNOWN_SOURCE.to_string()
    } else {
        domain.to_string()
    }
}

/// Derive a stable slug from an article link (hash of URL)
pub fn derive_slug(link: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(link.trim().as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..SLUG_HEX_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain_strips_www() {
        assert_eq!(extract_domain("https://www.example.com/a/b"), "example.com");
        assert_eq!(
            extract_domain("https://www.thehackernews.com/2025/article"),
            "thehackernews.com"
        );
    }

    #[test]
    fn test_extract_domain_plain_hosts() {
        assert_eq!(extract_domain("http://example.com/path"), "example.com");
        assert_eq!(extract_domain("https://securityweek.com:8443/x?y=1"), "securityweek.com");
        assert_eq!(extract_domain("HTTPS://WWW.BleepingComputer.com/news"), "bleepingcomputer.com");
    }

    #[test]
    fn test_extract_domain_fallbacks() {
        assert_eq!(extract_domain("not-a-valid-url"), "not-a-valid-url");
        assert_eq!(extract_domain("www.darkreading.com/attacks"), "darkreading.com");
        assert_eq!(extract_domain(""), UNKNOWN_SOURCE);
        assert_eq!(extract_domain("/relative/path"), UNKNOWN_SOURCE);
    }

    #[test]
    fn test_derive_slug_is_stable() {
        let a = derive_slug("https://example.com/a");
        let b = derive_slug("https://example.com/a");
        let c = derive_slug("https://example.com/b");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
