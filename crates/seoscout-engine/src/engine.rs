//! Local generation engine — the no-fail fallback path.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use seoscout_core::{KeywordFocus, KeywordResultSet};

use crate::{catalog, extract, synthesize, tips};

/// Orchestrates extraction, catalog lookup, synthesis, and tips into the
/// canonical result shape. Never fails for any string inputs.
#[derive(Debug, Clone)]
pub struct LocalEngine {
    delay: Duration,
}

impl LocalEngine {
    /// Engine with the default cosmetic processing delay.
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(100),
        }
    }

    /// Engine with an explicit delay. Use `Duration::ZERO` in tests.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Generate a full keyword result set locally.
    pub async fn generate(
        &self,
        business: &str,
        industry: &str,
        location: &str,
        focus: KeywordFocus,
    ) -> KeywordResultSet {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Self::generate_with_rng(business, industry, location, focus, &mut rand::rng())
    }

    /// Synchronous core, with an injected RNG for deterministic tests.
    pub fn generate_with_rng(
        business: &str,
        industry: &str,
        location: &str,
        focus: KeywordFocus,
        rng: &mut impl Rng,
    ) -> KeywordResultSet {
        let words = extract::extract_key_terms(business);
        let bundle = catalog::lookup(industry);
        debug!(
            "Local generation: {} business words, industry={}, focus={:?}",
            words.len(),
            industry,
            focus
        );

        let sets = synthesize::synthesize(&words, bundle, location, focus, rng);
        let seo_tips = tips::generate_tips(&words, bundle, location);

        KeywordResultSet {
            primary_keywords: sets.primary,
            long_tail_keywords: sets.long_tail,
            local_keywords: sets.local,
            content_ideas: sets.content,
            seo_tips,
        }
    }
}

impl Default for LocalEngine {
    fn default() -> Self {
        Self::new()
    }
}
