//! SEO metrics aggregation over a loosely-typed result set.

use serde_json::Value;

use crate::types::{CompetitionBreakdown, SeoMetrics};

/// The four keyword-category keys a result set may carry.
const CATEGORY_KEYS: &[&str] = &[
    "primary_keywords",
    "long_tail_keywords",
    "local_keywords",
    "content_ideas",
];

/// Parse a `search_volume` value: bare integer strings, comma-grouped
/// digits, or a trailing "k" meaning thousands. Anything unparsable is 0.
fn parse_volume(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => {
            let cleaned = s.trim().replace(',', "");
            if let Some(thousands) = cleaned.strip_suffix('k') {
                thousands
                    .parse::<f64>()
                    .map(|v| (v * 1000.0).round() as u64)
                    .unwrap_or(0)
            } else {
                cleaned.parse::<u64>().unwrap_or(0)
            }
        }
        _ => 0,
    }
}

/// Compute per-entry metrics: totals, averages, competition breakdown,
/// and the composite score. Missing categories are tolerated.
pub fn compute_metrics(results: &Value) -> SeoMetrics {
    let mut total_volume = 0u64;
    let mut total_keywords = 0usize;
    let mut breakdown = CompetitionBreakdown::default();

    for key in CATEGORY_KEYS {
        let Some(entries) = results.get(key).and_then(Value::as_array) else {
            continue;
        };
        for entry in entries {
            total_keywords += 1;
            total_volume += entry.get("search_volume").map(parse_volume).unwrap_or(0);
            match entry.get("competition").and_then(Value::as_str) {
                Some("easy") => breakdown.easy += 1,
                Some("medium") => breakdown.medium += 1,
                Some("hard") => breakdown.hard += 1,
                _ => {}
            }
        }
    }

    let average_volume = if total_keywords > 0 {
        (total_volume as f64 / total_keywords as f64).round() as u64
    } else {
        0
    };

    SeoMetrics {
        total_keywords,
        total_volume,
        average_volume,
        competition_breakdown: breakdown,
        seo_score: seo_score(total_keywords, &breakdown, total_volume),
    }
}

/// Composite 0-100 score: 60% difficulty mix, 40% normalized volume.
fn seo_score(total: usize, breakdown: &CompetitionBreakdown, volume: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    let difficulty_score = (breakdown.easy as f64 * 0.8
        + breakdown.medium as f64 * 0.5
        + breakdown.hard as f64 * 0.2)
        / total as f64;
    let volume_score = (volume as f64 / 10_000.0).min(1.0);
    ((difficulty_score * 0.6 + volume_score * 0.4) * 100.0).round() as u32
}

/// Display bucket for a score: excellent / good / fair / poor.
pub fn score_class(score: u32) -> &'static str {
    if score >= 80 {
        "excellent"
    } else if score >= 60 {
        "good"
    } else if score >= 40 {
        "fair"
    } else {
        "poor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_volume_forms() {
        assert_eq!(parse_volume(&json!("1000")), 1000);
        assert_eq!(parse_volume(&json!("1.5k")), 1500);
        assert_eq!(parse_volume(&json!("2,400")), 2400);
        assert_eq!(parse_volume(&json!(750)), 750);
        assert_eq!(parse_volume(&json!("n/a")), 0);
        assert_eq!(parse_volume(&json!(null)), 0);
    }

    #[test]
    fn test_metrics_scenario() {
        let results = json!({
            "primary_keywords": [
                {"keyword": "test1", "search_volume": "1000", "competition": "easy", "intent": "commercial"},
                {"keyword": "test2", "search_volume": "500", "competition": "medium", "intent": "commercial"},
            ]
        });
        let m = compute_metrics(&results);
        assert_eq!(m.total_keywords, 2);
        assert_eq!(m.total_volume, 1500);
        assert_eq!(m.average_volume, 750);
        assert_eq!(m.competition_breakdown.easy, 1);
        assert_eq!(m.competition_breakdown.medium, 1);
        assert_eq!(m.competition_breakdown.hard, 0);
    }

    #[test]
    fn test_breakdown_sums_to_total_for_canonical_results() {
        let results = json!({
            "primary_keywords": [
                {"keyword": "a", "search_volume": "100", "competition": "easy"},
                {"keyword": "b", "search_volume": "200", "competition": "hard"},
            ],
            "local_keywords": [
                {"keyword": "c", "search_volume": "300", "competition": "medium"},
            ],
        });
        let m = compute_metrics(&results);
        let b = m.competition_breakdown;
        assert_eq!(b.easy + b.medium + b.hard, m.total_keywords);
    }

    #[test]
    fn test_empty_results() {
        let m = compute_metrics(&json!({}));
        assert_eq!(m.total_keywords, 0);
        assert_eq!(m.seo_score, 0);
        assert_eq!(m.average_volume, 0);
    }

    #[test]
    fn test_seo_score_all_easy_high_volume_maxes_near_88() {
        // difficulty 0.8, volume capped at 1.0 -> 0.6*0.8 + 0.4 = 0.88
        let results = json!({
            "primary_keywords": [
                {"keyword": "a", "search_volume": "20k", "competition": "easy"},
            ]
        });
        assert_eq!(compute_metrics(&results).seo_score, 88);
    }

    #[test]
    fn test_score_class_buckets() {
        assert_eq!(score_class(85), "excellent");
        assert_eq!(score_class(80), "excellent");
        assert_eq!(score_class(70), "good");
        assert_eq!(score_class(60), "good");
        assert_eq!(score_class(50), "fair");
        assert_eq!(score_class(40), "fair");
        assert_eq!(score_class(30), "poor");
        assert_eq!(score_class(0), "poor");
    }
}
