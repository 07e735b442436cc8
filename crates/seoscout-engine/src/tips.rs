//! Implementation-tip generation — five fixed templates, no randomness.

use seoscout_core::TipEntry;

use crate::catalog::IndustryBundle;

/// Generate the fixed five-tip list for a business.
///
/// Missing business words degrade through the same fallback chain as the
/// synthesizer (first business word -> first industry term), so the
/// examples always read as real keywords.
pub fn generate_tips(words: &[String], bundle: &IndustryBundle, location: &str) -> Vec<TipEntry> {
    let first_term = bundle.terms.first().copied().unwrap_or_default();
    let first_service = bundle.services.first().copied().unwrap_or_default();
    let first_adjective = bundle.adjectives.first().copied().unwrap_or_default();
    let anchor = words.first().map(String::as_str).unwrap_or(first_term);
    let place = if location.is_empty() { "near you" } else { location };

    vec![
        TipEntry {
            tip: "Include your primary keyword in the page title and H1 tag".to_string(),
            keyword_example: format!("{anchor} {first_service}"),
            placement: "title tag and H1".to_string(),
        },
        TipEntry {
            tip: "Use location-based keywords in your meta description".to_string(),
            keyword_example: format!("{anchor} {place}"),
            placement: "meta description".to_string(),
        },
        TipEntry {
            tip: "Create service pages for each keyword category".to_string(),
            keyword_example: format!("{first_adjective} {first_service}"),
            placement: "service pages".to_string(),
        },
        TipEntry {
            tip: "Include keywords in your URL structure".to_string(),
            keyword_example: format!("/{anchor}-{first_service}"),
            placement: "URL slug".to_string(),
        },
        TipEntry {
            tip: "Use long-tail keywords in your blog content".to_string(),
            keyword_example: format!("how to choose {anchor} {first_service}"),
            placement: "blog articles".to_string(),
        },
    ]
}
