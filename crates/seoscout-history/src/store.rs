//! The search-history store: append, query, aggregate, export.

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use seoscout_core::SearchParams;

use crate::backend::HistoryBackend;
use crate::backlinks::generate_backlinks;
use crate::metrics::compute_metrics;
use crate::types::{ChartSeries, ExportSnapshot, HistoryEntry, SearchStats};

/// Ordered history of generation calls, capped at a maximum count.
///
/// `add_search` is the only mutator besides `clear` and `import_snapshot`.
/// The mutex serializes the whole load-mutate-persist cycle so concurrent
/// writers cannot lose updates. Persistence failures are logged, never
/// propagated: the in-memory state is authoritative for the session.
pub struct SearchHistoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
    backend: Box<dyn HistoryBackend>,
    max_items: usize,
}

impl SearchHistoryStore {
    /// Open a store over a backend, loading whatever it already holds.
    pub fn open(backend: Box<dyn HistoryBackend>, max_items: usize) -> Self {
        let entries = backend.load().unwrap_or_else(|e| {
            warn!("Failed to load search history: {}", e);
            Vec::new()
        });
        info!("Search history loaded: {} entries", entries.len());
        Self {
            entries: Mutex::new(entries),
            backend,
            max_items,
        }
    }

    /// Record a generation call. Returns the new entry's id.
    pub fn add_search(&self, params: SearchParams, results: serde_json::Value) -> String {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            backlinks: generate_backlinks(&params, &mut rand::rng()),
            seo_metrics: compute_metrics(&results),
            search_params: params,
            results,
        };
        let id = entry.id.clone();

        let mut entries = self.entries.lock();
        entries.push(entry);
        // Capacity bound: oldest entries are dropped first.
        if entries.len() > self.max_items {
            let excess = entries.len() - self.max_items;
            entries.drain(..excess);
        }
        self.persist(&entries);
        id
    }

    /// All entries, most recent first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        let mut entries = self.entries.lock().clone();
        entries.reverse();
        entries
    }

    /// The most recent `limit` entries.
    pub fn recent_searches(&self, limit: usize) -> Vec<HistoryEntry> {
        let mut entries = self.history();
        entries.truncate(limit);
        entries
    }

    /// Find one entry by id.
    pub fn search_by_id(&self, id: &str) -> Option<HistoryEntry> {
        self.entries.lock().iter().find(|e| e.id == id).cloned()
    }

    /// Case-insensitive substring match on the business description.
    pub fn searches_by_business(&self, business: &str) -> Vec<HistoryEntry> {
        let needle = business.to_lowercase();
        self.entries
            .lock()
            .iter()
            .filter(|e| e.search_params.business.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Cross-entry statistics for the history view.
    pub fn stats(&self) -> SearchStats {
        let entries = self.entries.lock();

        let unique_businesses = entries
            .iter()
            .map(|e| e.search_params.business.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();

        SearchStats {
            total_searches: entries.len(),
            unique_businesses,
            most_used_industry: most_used_industry(&entries),
            average_keywords_per_search: average_keywords(&entries),
            first_search_date: entries.first().map(|e| e.timestamp),
            latest_search_date: entries.last().map(|e| e.timestamp),
        }
    }

    /// Daily search counts, with gap days between the first and last
    /// bucket filled with zero for a contiguous series.
    pub fn chart_series(&self) -> ChartSeries {
        use std::collections::BTreeMap;

        let entries = self.entries.lock();
        let mut by_day: BTreeMap<chrono::NaiveDate, usize> = BTreeMap::new();
        for entry in entries.iter() {
            *by_day.entry(entry.timestamp.date_naive()).or_insert(0) += 1;
        }

        let mut labels = Vec::new();
        let mut data = Vec::new();
        if let (Some(&first), Some(&last)) =
            (by_day.keys().next(), by_day.keys().next_back())
        {
            let mut day = first;
            while day <= last {
                labels.push(day.format("%Y-%m-%d").to_string());
                data.push(by_day.get(&day).copied().unwrap_or(0));
                day = match day.succ_opt() {
                    Some(next) => next,
                    None => break,
                };
            }
        }

        ChartSeries { labels, data }
    }

    /// Empty the store. Returns false if the persisted copy could not be
    /// removed; the in-memory state is left untouched in that case.
    pub fn clear(&self) -> bool {
        let mut entries = self.entries.lock();
        if let Err(e) = self.backend.clear() {
            warn!("Failed to clear search history: {}", e);
            return false;
        }
        entries.clear();
        true
    }

    /// Full snapshot in storage order, ready for serialization.
    pub fn export_snapshot(&self) -> ExportSnapshot {
        let entries = self.entries.lock();
        ExportSnapshot {
            export_date: Utc::now(),
            total_searches: entries.len(),
            searches: entries.clone(),
        }
    }

    /// Replace the store's contents with a previously exported snapshot.
    /// Returns the number of entries imported.
    pub fn import_snapshot(&self, snapshot: ExportSnapshot) -> usize {
        let mut entries = self.entries.lock();
        *entries = snapshot.searches;
        if entries.len() > self.max_items {
            let excess = entries.len() - self.max_items;
            entries.drain(..excess);
        }
        self.persist(&entries);
        entries.len()
    }

    fn persist(&self, entries: &[HistoryEntry]) {
        if let Err(e) = self.backend.save(entries) {
            warn!("Failed to persist search history: {}", e);
        }
    }
}

/// First industry to reach the maximum count, in insertion order.
fn most_used_industry(entries: &[HistoryEntry]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        let industry = entry.search_params.industry.as_str();
        match counts.iter_mut().find(|(name, _)| *name == industry) {
            Some((_, n)) => *n += 1,
            None => counts.push((industry, 1)),
        }
    }
    // Ties break toward the industry seen first.
    let mut best: Option<(&str, usize)> = None;
    for &(name, n) in &counts {
        if best.map_or(true, |(_, bn)| n > bn) {
            best = Some((name, n));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Rounded mean keyword count over the four category arrays.
fn average_keywords(entries: &[HistoryEntry]) -> u64 {
    if entries.is_empty() {
        return 0;
    }
    let total: usize = entries
        .iter()
        .map(|e| {
            [
                "primary_keywords",
                "long_tail_keywords",
                "local_keywords",
                "content_ideas",
            ]
            .iter()
            .filter_map(|key| e.results.get(key).and_then(|v| v.as_array()))
            .map(Vec::len)
            .sum::<usize>()
        })
        .sum();
    (total as f64 / entries.len() as f64).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use seoscout_core::KeywordFocus;
    use serde_json::json;

    fn store() -> SearchHistoryStore {
        SearchHistoryStore::open(Box::new(MemoryBackend::new()), 100)
    }

    fn params(business: &str, industry: &str) -> SearchParams {
        SearchParams {
            business: business.to_string(),
            industry: industry.to_string(),
            location: String::new(),
            keyword_type: KeywordFocus::Mixed,
        }
    }

    fn results(n: usize) -> serde_json::Value {
        let keywords: Vec<_> = (0..n)
            .map(|i| {
                json!({"keyword": format!("kw{i}"), "search_volume": "100", "competition": "easy", "intent": "commercial"})
            })
            .collect();
        json!({ "primary_keywords": keywords })
    }

    #[test]
    fn test_add_and_lookup() {
        let store = store();
        let id = store.add_search(params("Test", "test"), results(2));
        let entry = store.search_by_id(&id).unwrap();
        assert_eq!(entry.search_params.business, "Test");
        assert_eq!(entry.seo_metrics.total_keywords, 2);
        assert!(store.search_by_id("missing").is_none());
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let store = store();
        let first = store.add_search(params("One", "a"), results(1));
        let second = store.add_search(params("Two", "a"), results(1));
        let history = store.history();
        assert_eq!(history[0].id, second);
        assert_eq!(history[1].id, first);
    }

    #[test]
    fn test_recent_searches_newest_first_up_to_limit() {
        let store = store();
        let ids: Vec<_> = (0..4)
            .map(|i| store.add_search(params(&format!("biz {i}"), "a"), results(1)))
            .collect();

        let recent = store.recent_searches(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, ids[3]);
        assert_eq!(recent[1].id, ids[2]);

        // A limit past the stored count just returns everything.
        assert_eq!(store.recent_searches(10).len(), 4);
        assert!(store.recent_searches(0).is_empty());
    }

    #[test]
    fn test_history_is_idempotent() {
        let store = store();
        store.add_search(params("One", "a"), results(1));
        assert_eq!(store.history(), store.history());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let store = SearchHistoryStore::open(Box::new(MemoryBackend::new()), 3);
        let ids: Vec<_> = (0..5)
            .map(|i| store.add_search(params(&format!("biz {i}"), "a"), results(1)))
            .collect();
        let history = store.history();
        assert_eq!(history.len(), 3);
        // Newest three survive.
        assert_eq!(history[0].id, ids[4]);
        assert_eq!(history[2].id, ids[2]);
    }

    #[test]
    fn test_search_by_business_case_insensitive() {
        let store = store();
        store.add_search(params("Pet Grooming Co", "pet-care"), results(1));
        store.add_search(params("Taco Stand", "food-restaurant"), results(1));
        let hits = store.searches_by_business("grooming");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].search_params.business, "Pet Grooming Co");
    }

    #[test]
    fn test_stats() {
        let store = store();
        store.add_search(params("A", "fitness"), results(2));
        store.add_search(params("B", "pet-care"), results(4));
        store.add_search(params("A", "fitness"), results(3));

        let stats = store.stats();
        assert_eq!(stats.total_searches, 3);
        assert_eq!(stats.unique_businesses, 2);
        assert_eq!(stats.most_used_industry.as_deref(), Some("fitness"));
        assert_eq!(stats.average_keywords_per_search, 3);
        assert!(stats.first_search_date.unwrap() <= stats.latest_search_date.unwrap());
    }

    #[test]
    fn test_stats_empty() {
        let stats = store().stats();
        assert_eq!(stats.total_searches, 0);
        assert_eq!(stats.average_keywords_per_search, 0);
        assert!(stats.most_used_industry.is_none());
        assert!(stats.first_search_date.is_none());
    }

    #[test]
    fn test_most_used_industry_tie_goes_to_first_seen() {
        let store = store();
        store.add_search(params("A", "beauty"), results(1));
        store.add_search(params("B", "fitness"), results(1));
        assert_eq!(store.stats().most_used_industry.as_deref(), Some("beauty"));
    }

    #[test]
    fn test_chart_series_fills_gap_days() {
        let store = store();
        let mut snapshot = {
            store.add_search(params("A", "a"), results(1));
            store.add_search(params("B", "a"), results(1));
            store.export_snapshot()
        };
        // Spread the two entries three days apart.
        snapshot.searches[0].timestamp = "2024-05-01T10:00:00Z".parse().unwrap();
        snapshot.searches[1].timestamp = "2024-05-04T10:00:00Z".parse().unwrap();
        store.import_snapshot(snapshot);

        let series = store.chart_series();
        assert_eq!(
            series.labels,
            vec!["2024-05-01", "2024-05-02", "2024-05-03", "2024-05-04"]
        );
        assert_eq!(series.data, vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_chart_series_empty() {
        let series = store().chart_series();
        assert!(series.labels.is_empty());
        assert!(series.data.is_empty());
    }

    #[test]
    fn test_export_import_round_trip() {
        let store = store();
        store.add_search(params("A", "a"), results(1));
        store.add_search(params("B", "b"), results(2));
        let snapshot = store.export_snapshot();
        assert_eq!(snapshot.total_searches, 2);

        let other = SearchHistoryStore::open(Box::new(MemoryBackend::new()), 100);
        let imported = other.import_snapshot(snapshot.clone());
        assert_eq!(imported, 2);
        let ids: Vec<_> = other.history().iter().map(|e| e.id.clone()).collect();
        let original: Vec<_> = store.history().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, original);
    }

    #[test]
    fn test_clear() {
        let store = store();
        store.add_search(params("A", "a"), results(1));
        assert!(store.clear());
        assert!(store.history().is_empty());
        assert_eq!(store.stats().total_searches, 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = store();
        let mut ids = std::collections::HashSet::new();
        for i in 0..50 {
            assert!(ids.insert(store.add_search(params(&format!("b{i}"), "a"), results(1))));
        }
    }

    #[test]
    fn test_backlinks_attached_and_sorted() {
        let store = store();
        let id = store.add_search(params("Pet grooming in Austin", "pet-care"), results(1));
        let entry = store.search_by_id(&id).unwrap();
        assert!((5..=20).contains(&entry.backlinks.len()));
        for pair in entry.backlinks.windows(2) {
            assert!(pair[0].authority >= pair[1].authority);
        }
    }
}
