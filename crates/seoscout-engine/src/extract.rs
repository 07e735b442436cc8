//! Business-term extraction — salient words from a free-text description.

use once_cell::sync::Lazy;
use regex::Regex;

/// Common English function words that carry no keyword value.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "can", "their", "there", "they", "them", "these", "those",
    "this", "that", "all", "your", "most",
];

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]+").unwrap());

/// Extract up to 5 salient lowercase tokens from a business description.
///
/// Punctuation runs become spaces, tokens of length <= 2 and stop-words
/// are dropped, and the first 5 survivors are kept in first-occurrence
/// order. Repeated words are not deduplicated. Empty, whitespace-only,
/// or all-stop-word input yields an empty list.
pub fn extract_key_terms(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");
    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
        .take(5)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_pet_grooming() {
        let words = extract_key_terms("Professional pet grooming services for dogs and cats");
        assert_eq!(words, vec!["professional", "pet", "grooming", "services", "dogs"]);
    }

    #[test]
    fn test_stop_words_and_short_tokens_dropped() {
        let words = extract_key_terms("We do the best IT work for all of them");
        assert!(!words.contains(&"for".to_string()));
        assert!(!words.contains(&"all".to_string()));
        // "it" and "do" are too short
        assert!(words.iter().all(|w| w.len() > 2));
    }

    #[test]
    fn test_caps_at_five_tokens() {
        let words = extract_key_terms("alpha bravo charlie delta echo foxtrot golf");
        assert_eq!(words.len(), 5);
        assert_eq!(words[0], "alpha");
        assert_eq!(words[4], "echo");
    }

    #[test]
    fn test_punctuation_becomes_spaces() {
        let words = extract_key_terms("dog-walking,boarding&grooming!");
        assert_eq!(words, vec!["dog", "walking", "boarding", "grooming"]);
    }

    #[test]
    fn test_empty_and_stop_word_only_input() {
        assert!(extract_key_terms("").is_empty());
        assert!(extract_key_terms("   ").is_empty());
        assert!(extract_key_terms("the and for with").is_empty());
    }

    #[test]
    fn test_duplicates_kept() {
        let words = extract_key_terms("grooming grooming grooming");
        assert_eq!(words, vec!["grooming", "grooming", "grooming"]);
    }
}
