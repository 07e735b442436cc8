//! Synthetic backlink generation. Illustrative reporting data only.

use chrono::{DateTime, TimeZone, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

use seoscout_core::SearchParams;

use crate::types::{BacklinkEntry, FollowType};

const DOMAINS: &[&str] = &[
    "example.com",
    "businessdirectory.com",
    "yelp.com",
    "facebook.com",
    "linkedin.com",
    "instagram.com",
    "localbusiness.com",
    "industry-news.com",
];

/// Generate 5-20 mock backlinks for a new history entry, sorted by
/// descending authority. Anchor texts are seeded from the business name
/// and location; firstSeen falls between 2023-01-01 and now.
pub fn generate_backlinks(params: &SearchParams, rng: &mut impl Rng) -> Vec<BacklinkEntry> {
    let now = Utc::now();
    let anchors = anchor_candidates(params);
    let count = rng.random_range(5..=20);

    let mut backlinks: Vec<BacklinkEntry> = (0..count)
        .map(|i| {
            let domain = *DOMAINS.choose(rng).unwrap();
            BacklinkEntry {
                url: format!("https://{domain}/page-{}", i + 1),
                domain: domain.to_string(),
                anchor_text: anchors.choose(rng).cloned().unwrap_or_default(),
                authority: rng.random_range(1..=100),
                follow_type: if rng.random_bool(0.7) {
                    FollowType::Follow
                } else {
                    FollowType::Nofollow
                },
                first_seen: random_date_since_epoch(rng, now),
                last_checked: now,
            }
        })
        .collect();

    backlinks.sort_by(|a, b| b.authority.cmp(&a.authority));
    backlinks
}

fn anchor_candidates(params: &SearchParams) -> Vec<String> {
    let words: Vec<&str> = params.business.split_whitespace().collect();
    let first = words.first().copied().unwrap_or_default();

    vec![
        words.iter().take(3).copied().collect::<Vec<_>>().join(" "),
        format!("{first} services"),
        "click here".to_string(),
        "read more".to_string(),
        if params.location.is_empty() {
            "local business".to_string()
        } else {
            format!("{first} in {}", params.location)
        },
    ]
}

/// Uniform instant between the fixed 2023-01-01 epoch and `now`.
fn random_date_since_epoch(rng: &mut impl Rng, now: DateTime<Utc>) -> DateTime<Utc> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let span = (now - start).num_seconds().max(1);
    start + chrono::Duration::seconds(rng.random_range(0..span))
}
