//! History-entry and metrics data types.
//!
//! Field names serialize in camelCase to match the export format the
//! original browser tool produced, so old snapshots stay importable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seoscout_core::SearchParams;

/// One recorded generation call. Immutable after creation; dropped only
/// by an explicit clear or capacity eviction (oldest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub search_params: SearchParams,
    /// Results as actually returned; the remote service may deviate from
    /// the canonical shape, so this stays loosely typed.
    pub results: serde_json::Value,
    pub backlinks: Vec<BacklinkEntry>,
    pub seo_metrics: SeoMetrics,
}

/// Whether a synthetic backlink passes authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowType {
    Follow,
    Nofollow,
}

/// Synthetic inbound-link record, generated once per history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklinkEntry {
    pub url: String,
    pub domain: String,
    pub anchor_text: String,
    /// Domain authority, 1-100.
    pub authority: u32,
    pub follow_type: FollowType,
    pub first_seen: DateTime<Utc>,
    pub last_checked: DateTime<Utc>,
}

/// Per-tier keyword counts. Always sums to the metrics' totalKeywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionBreakdown {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

/// Aggregated statistics over one result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetrics {
    pub total_keywords: usize,
    pub total_volume: u64,
    pub average_volume: u64,
    pub competition_breakdown: CompetitionBreakdown,
    /// Heuristic 0-100 composite of difficulty mix and aggregate volume.
    pub seo_score: u32,
}

/// Cross-entry statistics for the history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub total_searches: usize,
    pub unique_businesses: usize,
    pub most_used_industry: Option<String>,
    pub average_keywords_per_search: u64,
    pub first_search_date: Option<DateTime<Utc>>,
    pub latest_search_date: Option<DateTime<Utc>>,
}

/// Daily search counts for charting, contiguous between first and last day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

/// Downloadable history snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub export_date: DateTime<Utc>,
    pub total_searches: usize,
    pub searches: Vec<HistoryEntry>,
}
