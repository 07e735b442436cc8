//! SeoScout Engine — deterministic local keyword generation.
//!
//! The fallback path when the remote generation service is unreachable or
//! returns garbage: business-term extraction, industry knowledge lookup,
//! category-constrained keyword synthesis, and implementation tips.

pub mod catalog;
pub mod engine;
pub mod extract;
pub mod synthesize;
pub mod tips;

pub use catalog::{lookup, IndustryBundle};
pub use engine::LocalEngine;
pub use extract::extract_key_terms;
pub use synthesize::{synthesize, KeywordSets};
pub use tips::generate_tips;
