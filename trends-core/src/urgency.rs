//! Urgency levels reported for threat news items

use serde::{Deserialize, Serialize};

/// Urgency of a reported article
///
/// Values outside the recognized set are bucketed as `Unknown`, which is
/// counted on its own and ranks below `Low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl Urgency {
    /// Ordering weight used when ranking articles (higher is more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Urgency::High => 3,
            Urgency::Medium => 2,
            Urgency::Low => 1,
            Urgency::Unknown => 0,
        }
    }

    /// Parse a recognized urgency label, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Urgency::High),
            "medium" => Some(Urgency::Medium),
            "low" => Some(Urgency::Low),
            _ => None,
        }
    }

    /// Coerce an optional raw label into the recognized set
    pub fn coerce(raw: Option<&str>) -> Self {
        raw.and_then(Urgency::parse).unwrap_or_default()
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
            Urgency::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
