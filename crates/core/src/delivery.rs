//! Delivery progress derived from a project's features.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::validation::VALID_FEATURE_STATUSES;

/// Story-point totals and feature counts per status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryProgress {
    pub total_points: i64,
    pub completed_points: i64,
    /// `completed / total × 100`, or 0 when there are no points.
    pub completion_pct: f64,
    pub feature_count: i64,
    /// Every known status is present, with zero when unused.
    pub status_counts: BTreeMap<String, i64>,
}

impl DeliveryProgress {
    /// Fold `(status, story_points, completed_points)` triples.
    pub fn from_features<'a>(features: impl IntoIterator<Item = (&'a str, i32, i32)>) -> Self {
        let mut status_counts: BTreeMap<String, i64> = VALID_FEATURE_STATUSES
            .iter()
            .map(|s| (s.to_string(), 0))
            .collect();
        let mut total_points = 0i64;
        let mut completed_points = 0i64;
        let mut feature_count = 0i64;

        for (status, points, completed) in features {
            total_points += i64::from(points);
            completed_points += i64::from(completed);
            feature_count += 1;
            *status_counts.entry(status.to_string()).or_insert(0) += 1;
        }

        let completion_pct = if total_points > 0 {
            completed_points as f64 / total_points as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_points,
            completed_points,
            completion_pct,
            feature_count,
            status_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_project_has_zero_progress() {
        let progress = DeliveryProgress::from_features(Vec::new());
        assert_eq!(progress.total_points, 0);
        assert_eq!(progress.completion_pct, 0.0);
        assert_eq!(progress.status_counts.len(), VALID_FEATURE_STATUSES.len());
        assert!(progress.status_counts.values().all(|c| *c == 0));
    }

    #[test]
    fn counts_points_and_statuses() {
        let progress = DeliveryProgress::from_features(vec![
            ("done", 8, 8),
            ("in-progress", 5, 2),
            ("backlog", 3, 0),
            ("done", 4, 4),
        ]);
        assert_eq!(progress.total_points, 20);
        assert_eq!(progress.completed_points, 14);
        assert!((progress.completion_pct - 70.0).abs() < 1e-9);
        assert_eq!(progress.feature_count, 4);
        assert_eq!(progress.status_counts["done"], 2);
        assert_eq!(progress.status_counts["cancelled"], 0);
    }
}
