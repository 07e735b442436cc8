//! Category-constrained keyword synthesis.
//!
//! Combines extracted business words with the industry bundle into four
//! deduplicated keyword lists. Candidate order is fixed; each list keeps
//! its own seen-set and is truncated to 6 after generation, so the
//! earliest-generated candidates win. Volumes and some competition tiers
//! are drawn from the injected RNG.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use seoscout_core::{Competition, Intent, KeywordEntry, KeywordFocus};

use crate::catalog::IndustryBundle;

/// Max entries per generated list.
const LIST_CAP: usize = 6;

const COMMERCIAL_PHRASES: &[&str] = &["hire", "book", "find", "cost of", "price of"];
const CONTENT_PREFIXES: &[&str] =
    &["how to choose", "what is", "benefits of", "tips for", "guide to"];
const INFO_SUFFIXES: &[&str] = &["explained", "for beginners", "mistakes to avoid"];

/// The four generated keyword lists.
#[derive(Debug, Clone, Default)]
pub struct KeywordSets {
    pub primary: Vec<KeywordEntry>,
    pub long_tail: Vec<KeywordEntry>,
    pub local: Vec<KeywordEntry>,
    pub content: Vec<KeywordEntry>,
}

/// Format a volume draw: thousands get one decimal and a "k" suffix.
fn random_volume(rng: &mut impl Rng, min: u32, max: u32) -> String {
    let volume = rng.random_range(min..=max);
    if volume >= 1000 {
        format!("{:.1}k", f64::from(volume) / 1000.0)
    } else {
        volume.to_string()
    }
}

/// Uniform draw over the three competition tiers.
fn random_competition(rng: &mut impl Rng) -> Competition {
    *[Competition::Easy, Competition::Medium, Competition::Hard]
        .choose(rng)
        .unwrap()
}

/// Append a candidate unless this list already holds the exact string.
fn push_unique(
    list: &mut Vec<KeywordEntry>,
    seen: &mut HashSet<String>,
    keyword: String,
    search_volume: String,
    competition: Competition,
    intent: Intent,
) {
    if seen.insert(keyword.clone()) {
        list.push(KeywordEntry {
            keyword,
            search_volume,
            competition,
            intent,
        });
    }
}

/// Synthesize the four keyword lists for one generation call.
///
/// `words` is the extractor output; empty fields degrade through the
/// fallback chain first business word -> first industry term.
pub fn synthesize(
    words: &[String],
    bundle: &IndustryBundle,
    location: &str,
    focus: KeywordFocus,
    rng: &mut impl Rng,
) -> KeywordSets {
    let location_part = if location.is_empty() {
        String::new()
    } else {
        format!(" {location}")
    };
    let near_me_part = if location.is_empty() {
        " near me".to_string()
    } else {
        format!(" {location}")
    };

    let first_word = words.first().map(String::as_str);
    let first_term = bundle.terms.first().copied().unwrap_or_default();
    let first_service = bundle.services.first().copied().unwrap_or_default();
    // Fallback chain: first business word, else first industry term.
    let anchor = first_word.unwrap_or(first_term);

    let mut sets = KeywordSets::default();

    // Primary keywords: always generated, regardless of focus.
    let mut seen = HashSet::new();
    for word in words {
        let volume = random_volume(rng, 800, 3000);
        push_unique(
            &mut sets.primary,
            &mut seen,
            format!("{word} services"),
            volume,
            Competition::Medium,
            Intent::Commercial,
        );
    }
    for service in bundle.services.iter().take(4) {
        let keyword = format!("{service} {anchor}");
        // A "grooming grooming" style doubling is noise, skip it.
        if let Some(word) = first_word {
            if keyword == format!("{word} {word}") {
                continue;
            }
        }
        let volume = random_volume(rng, 500, 2500);
        let competition = random_competition(rng);
        push_unique(
            &mut sets.primary,
            &mut seen,
            keyword,
            volume,
            competition,
            Intent::Commercial,
        );
    }
    for term in bundle.terms.iter().take(2) {
        let volume = random_volume(rng, 1000, 4000);
        push_unique(
            &mut sets.primary,
            &mut seen,
            (*term).to_string(),
            volume,
            Competition::Hard,
            Intent::Commercial,
        );
    }
    sets.primary.truncate(LIST_CAP);

    // Long-tail keywords: every focus except short-tail.
    if focus != KeywordFocus::ShortTail {
        let mut seen = HashSet::new();
        for adjective in bundle.adjectives.iter().take(3) {
            let keyword = format!("{adjective} {anchor} {first_service}{location_part}")
                .trim()
                .to_string();
            let volume = random_volume(rng, 100, 800);
            push_unique(
                &mut sets.long_tail,
                &mut seen,
                keyword,
                volume,
                Competition::Easy,
                Intent::Commercial,
            );
        }
        for (i, word) in words.iter().take(3).enumerate() {
            if let Some(service) = bundle.services.get(i) {
                let volume = random_volume(rng, 200, 600);
                push_unique(
                    &mut sets.long_tail,
                    &mut seen,
                    format!("best {word} {service} for {first_term}"),
                    volume,
                    Competition::Easy,
                    Intent::Commercial,
                );
            }
        }
        if matches!(focus, KeywordFocus::Commercial | KeywordFocus::Mixed) {
            for phrase in COMMERCIAL_PHRASES.iter().take(2) {
                let volume = random_volume(rng, 150, 500);
                push_unique(
                    &mut sets.long_tail,
                    &mut seen,
                    format!("{phrase} {anchor} {first_service}"),
                    volume,
                    Competition::Easy,
                    Intent::Commercial,
                );
            }
        }
        sets.long_tail.truncate(LIST_CAP);
    }

    // Local keywords: every focus except informational.
    if focus != KeywordFocus::Informational {
        let mut seen = HashSet::new();
        for word in words.iter().take(3) {
            let volume = random_volume(rng, 300, 1200);
            push_unique(
                &mut sets.local,
                &mut seen,
                format!("{word}{near_me_part}"),
                volume,
                Competition::Medium,
                Intent::Local,
            );
        }
        if !location.is_empty() {
            for service in bundle.services.iter().take(3) {
                let volume = random_volume(rng, 150, 800);
                push_unique(
                    &mut sets.local,
                    &mut seen,
                    format!("{service} in {location}"),
                    volume,
                    Competition::Easy,
                    Intent::Local,
                );
            }
            for word in words.iter().take(2) {
                let volume = random_volume(rng, 200, 600);
                push_unique(
                    &mut sets.local,
                    &mut seen,
                    format!("{location} {word} {first_service}"),
                    volume,
                    Competition::Easy,
                    Intent::Local,
                );
            }
        }
        sets.local.truncate(LIST_CAP);
    }

    // Content ideas: informational or mixed focus only.
    if matches!(focus, KeywordFocus::Informational | KeywordFocus::Mixed) {
        let mut seen = HashSet::new();
        for (i, prefix) in CONTENT_PREFIXES.iter().take(4).enumerate() {
            if let (Some(word), Some(service)) = (first_word, bundle.services.get(i)) {
                let volume = random_volume(rng, 100, 500);
                push_unique(
                    &mut sets.content,
                    &mut seen,
                    format!("{prefix} {word} {service}"),
                    volume,
                    Competition::Easy,
                    Intent::Informational,
                );
            }
        }
        for suffix in INFO_SUFFIXES.iter().take(2) {
            if let Some(word) = first_word {
                let volume = random_volume(rng, 80, 400);
                push_unique(
                    &mut sets.content,
                    &mut seen,
                    format!("{word} {first_service} {suffix}"),
                    volume,
                    Competition::Easy,
                    Intent::Informational,
                );
            }
        }
        sets.content.truncate(LIST_CAP);
    }

    sets
}
