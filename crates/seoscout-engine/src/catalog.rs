//! Industry knowledge catalog — curated service/adjective/term bundles.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fixed bundle of industry vocabulary used by the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryBundle {
    pub services: &'static [&'static str],
    pub adjectives: &'static [&'static str],
    pub terms: &'static [&'static str],
}

/// Generic bundle for unknown or missing industries.
pub const DEFAULT_BUNDLE: IndustryBundle = IndustryBundle {
    services: &["service", "consultation", "solution", "support", "maintenance"],
    adjectives: &["professional", "experienced", "reliable", "quality", "affordable"],
    terms: &["business", "service", "company", "professional", "expert"],
};

static INDUSTRY_MAP: Lazy<HashMap<&'static str, IndustryBundle>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("pet-care", IndustryBundle {
        services: &["grooming", "boarding", "training", "walking", "sitting", "veterinary"],
        adjectives: &["professional", "certified", "experienced", "affordable", "premium"],
        terms: &["pet care", "animal care", "dog", "cat", "puppy", "kitten"],
    });
    m.insert("healthcare", IndustryBundle {
        services: &["treatment", "consultation", "diagnosis", "therapy", "care", "checkup"],
        adjectives: &["medical", "clinical", "professional", "certified", "experienced"],
        terms: &["health", "wellness", "medical", "doctor", "physician", "clinic"],
    });
    m.insert("fitness", IndustryBundle {
        services: &["training", "coaching", "workout", "exercise", "nutrition", "wellness"],
        adjectives: &["personal", "professional", "certified", "experienced", "custom"],
        terms: &["fitness", "gym", "health", "weight loss", "muscle building", "cardio"],
    });
    m.insert("food-restaurant", IndustryBundle {
        services: &["dining", "catering", "delivery", "takeout", "reservation", "menu"],
        adjectives: &["fresh", "authentic", "delicious", "gourmet", "family"],
        terms: &["restaurant", "food", "cuisine", "dining", "meal", "dish"],
    });
    m.insert("beauty", IndustryBundle {
        services: &["makeup", "skincare", "hair", "nails", "spa", "facial"],
        adjectives: &["professional", "luxury", "organic", "premium", "natural"],
        terms: &["beauty", "cosmetics", "salon", "spa", "treatment", "style"],
    });
    m.insert("technology", IndustryBundle {
        services: &["development", "consulting", "support", "maintenance", "training", "integration"],
        adjectives: &["professional", "enterprise", "custom", "innovative", "reliable"],
        terms: &["software", "technology", "IT", "digital", "computer", "system"],
    });
    m.insert("real-estate", IndustryBundle {
        services: &["buying", "selling", "renting", "management", "investment", "appraisal"],
        adjectives: &["professional", "experienced", "trusted", "local", "expert"],
        terms: &["real estate", "property", "home", "house", "agent", "broker"],
    });
    m.insert("education", IndustryBundle {
        services: &["tutoring", "training", "courses", "certification", "workshop", "coaching"],
        adjectives: &["professional", "certified", "experienced", "qualified", "expert"],
        terms: &["education", "learning", "training", "course", "teacher", "instructor"],
    });
    m.insert("automotive", IndustryBundle {
        services: &["repair", "maintenance", "service", "inspection", "parts", "installation"],
        adjectives: &["professional", "certified", "experienced", "reliable", "quality"],
        terms: &["automotive", "car", "vehicle", "auto", "mechanic", "garage"],
    });
    m.insert("home-garden", IndustryBundle {
        services: &["landscaping", "maintenance", "design", "installation", "repair", "cleaning"],
        adjectives: &["professional", "experienced", "reliable", "quality", "affordable"],
        terms: &["home", "garden", "landscape", "yard", "outdoor", "maintenance"],
    });
    m
});

/// Look up the vocabulary bundle for an industry identifier.
///
/// Unknown or empty identifiers fall back to [`DEFAULT_BUNDLE`]. Never fails.
pub fn lookup(industry: &str) -> &'static IndustryBundle {
    INDUSTRY_MAP.get(industry).unwrap_or(&DEFAULT_BUNDLE)
}
