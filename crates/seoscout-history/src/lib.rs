//! SeoScout History — search-history store and SEO metrics aggregation.
//!
//! Append-only history of generation calls with derived metrics and mock
//! backlink data, mirrored to a pluggable persistence backend.

pub mod backend;
pub mod backlinks;
pub mod metrics;
pub mod store;
pub mod types;

pub use backend::{HistoryBackend, JsonFileBackend, MemoryBackend};
pub use metrics::{compute_metrics, score_class};
pub use store::SearchHistoryStore;
pub use types::{
    BacklinkEntry, ChartSeries, CompetitionBreakdown, ExportSnapshot, FollowType, HistoryEntry,
    SearchStats, SeoMetrics,
};
