//! Canonical keyword-suggestion data types.
//!
//! These are the shapes exchanged between the generation engine, the
//! history store, and the HTTP surface. The remote service returns a
//! loosely-typed JSON payload; these types describe what the local
//! engine produces and what well-formed payloads look like.

use serde::{Deserialize, Serialize};

/// Coarse keyword difficulty label. Synthetic, not measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competition {
    Easy,
    Medium,
    Hard,
}

/// Coarse search-intent label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Commercial,
    Local,
    Informational,
}

/// Category-weighting selector: which keyword lists get populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordFocus {
    #[default]
    Mixed,
    Local,
    Commercial,
    Informational,
    ShortTail,
}

impl KeywordFocus {
    /// Parse a form value, defaulting to `Mixed` for anything unrecognized.
    pub fn parse(value: &str) -> Self {
        match value {
            "local" => Self::Local,
            "commercial" => Self::Commercial,
            "informational" => Self::Informational,
            "short-tail" => Self::ShortTail,
            _ => Self::Mixed,
        }
    }
}

/// One generated keyword with its synthetic metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    /// Bare integer string, or thousands with a trailing "k" (e.g. "2.4k").
    pub search_volume: String,
    pub competition: Competition,
    pub intent: Intent,
}

/// One implementation tip with a concrete keyword example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipEntry {
    pub tip: String,
    pub keyword_example: String,
    pub placement: String,
}

/// Immutable output of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KeywordResultSet {
    pub primary_keywords: Vec<KeywordEntry>,
    pub long_tail_keywords: Vec<KeywordEntry>,
    pub local_keywords: Vec<KeywordEntry>,
    pub content_ideas: Vec<KeywordEntry>,
    pub seo_tips: Vec<TipEntry>,
}

/// The inputs of one generation call, as recorded in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub business: String,
    pub industry: String,
    #[serde(default)]
    pub location: String,
    pub keyword_type: KeywordFocus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_serde_kebab_case() {
        let json = serde_json::to_string(&KeywordFocus::ShortTail).unwrap();
        assert_eq!(json, "\"short-tail\"");
        let parsed: KeywordFocus = serde_json::from_str("\"informational\"").unwrap();
        assert_eq!(parsed, KeywordFocus::Informational);
    }

    #[test]
    fn test_focus_parse_unknown_defaults_to_mixed() {
        assert_eq!(KeywordFocus::parse("short-tail"), KeywordFocus::ShortTail);
        assert_eq!(KeywordFocus::parse("whatever"), KeywordFocus::Mixed);
    }

    #[test]
    fn test_competition_lowercase() {
        let entry = KeywordEntry {
            keyword: "pet grooming".into(),
            search_volume: "1.2k".into(),
            competition: Competition::Hard,
            intent: Intent::Commercial,
        };
        let v = serde_json::to_value(&entry).unwrap();
        assert_eq!(v["competition"], "hard");
        assert_eq!(v["intent"], "commercial");
    }
}
