//! SeoScout Remote — remote generation client and local fallback.
//!
//! The remote service is best-effort: any non-Ok outcome (network
//! failure, non-2xx status, error payload, unparsable body) falls back
//! to the deterministic local engine, never to a user-facing failure.

pub mod client;
pub mod generator;

pub use client::{create_prompt, RemoteClient, RemoteOutcome};
pub use generator::{GenerationSource, KeywordGenerator};
