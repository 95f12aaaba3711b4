//! Aggregation of risk rankings into descriptive statistics.
//!
//! Input is an ordered collection where each element is either a completed
//! [`RiskRanking`] or `None` for a deviation that has not been assessed
//! yet. Aggregation never fails: insufficient data produces absent fields,
//! not zeros, so "no assessed entries" stays distinguishable from "zero
//! risk" downstream.
//!
//! Percentages always divide by the assessed count, never the total, so
//! unassessed entries cannot dilute the distribution.

use serde::{Deserialize, Serialize};

use crate::risk_score::{RiskLevel, RiskRanking};

// ---------------------------------------------------------------------------
// RiskStatistics
// ---------------------------------------------------------------------------

/// Counts and score aggregates over one collection of entries. Score
/// aggregates are absent when nothing is assessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskStatistics {
    pub total_entries: u64,
    pub assessed_entries: u64,
    pub unassessed_entries: u64,
    pub low_risk_count: u64,
    pub medium_risk_count: u64,
    pub high_risk_count: u64,
    pub average_risk_score: Option<f64>,
    pub max_risk_score: Option<u32>,
    pub min_risk_score: Option<u32>,
}

impl RiskStatistics {
    /// Fold a collection of optional rankings in a single pass.
    pub fn from_rankings(rankings: &[Option<RiskRanking>]) -> Self {
        let mut assessed_entries = 0u64;
        let mut low_risk_count = 0u64;
        let mut medium_risk_count = 0u64;
        let mut high_risk_count = 0u64;
        let mut score_sum = 0u64;
        let mut max_risk_score: Option<u32> = None;
        let mut min_risk_score: Option<u32> = None;

        for ranking in rankings.iter().flatten() {
            assessed_entries += 1;
            match ranking.risk_level {
                RiskLevel::Low => low_risk_count += 1,
                RiskLevel::Medium => medium_risk_count += 1,
                RiskLevel::High => high_risk_count += 1,
            }
            score_sum += ranking.risk_score as u64;
            max_risk_score = Some(match max_risk_score {
                Some(current) => current.max(ranking.risk_score),
                None => ranking.risk_score,
            });
            min_risk_score = Some(match min_risk_score {
                Some(current) => current.min(ranking.risk_score),
                None => ranking.risk_score,
            });
        }

        let total_entries = rankings.len() as u64;
        let average_risk_score = if assessed_entries > 0 {
            Some(score_sum as f64 / assessed_entries as f64)
        } else {
            None
        };

        Self {
            total_entries,
            assessed_entries,
            unassessed_entries: total_entries - assessed_entries,
            low_risk_count,
            medium_risk_count,
            high_risk_count,
            average_risk_score,
            max_risk_score,
            min_risk_score,
        }
    }
}

// ---------------------------------------------------------------------------
// RiskDistribution
// ---------------------------------------------------------------------------

/// Percentage of assessed entries per level. Absent as a whole when
/// nothing is assessed; otherwise the three fields sum to 100 modulo
/// floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl RiskDistribution {
    /// Derive the distribution from already-computed statistics. The
    /// denominator is the assessed count, never the total.
    pub fn from_statistics(statistics: &RiskStatistics) -> Option<Self> {
        if statistics.assessed_entries == 0 {
            return None;
        }
        let assessed = statistics.assessed_entries as f64;
        Some(Self {
            low: statistics.low_risk_count as f64 / assessed * 100.0,
            medium: statistics.medium_risk_count as f64 / assessed * 100.0,
            high: statistics.high_risk_count as f64 / assessed * 100.0,
        })
    }

    /// Convenience over [`RiskStatistics::from_rankings`].
    pub fn from_rankings(rankings: &[Option<RiskRanking>]) -> Option<Self> {
        Self::from_statistics(&RiskStatistics::from_rankings(rankings))
    }
}

// ---------------------------------------------------------------------------
// ScorePercentiles
// ---------------------------------------------------------------------------

/// Rank-based percentiles over the assessed risk scores, computed with
/// linear interpolation on the ascending-sorted score array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePercentiles {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

impl ScorePercentiles {
    /// Compute percentiles from scores in any order; absent for an empty
    /// input. A single score maps every percentile onto itself.
    pub fn from_scores(scores: &[u32]) -> Option<Self> {
        let mut sorted = scores.to_vec();
        sorted.sort_unstable();
        Self::from_sorted(&sorted)
    }

    /// `sorted` must already be in ascending order.
    pub(crate) fn from_sorted(sorted: &[u32]) -> Option<Self> {
        if sorted.is_empty() {
            return None;
        }
        Some(Self {
            p25: percentile(sorted, 25.0),
            p50: percentile(sorted, 50.0),
            p75: percentile(sorted, 75.0),
            p90: percentile(sorted, 90.0),
            p95: percentile(sorted, 95.0),
        })
    }
}

/// Linear-interpolation rank over an ascending-sorted, non-empty array:
/// `rank = p/100 × (n−1)`, interpolating between the two neighbouring
/// ranks.
fn percentile(sorted: &[u32], p: f64) -> f64 {
    let n = sorted.len();
    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;
    let lower_value = sorted[lower] as f64;
    let upper_value = sorted[upper.min(n - 1)] as f64;
    lower_value + frac * (upper_value - lower_value)
}

// ---------------------------------------------------------------------------
// Combined aggregation
// ---------------------------------------------------------------------------

/// Statistics, distribution, and percentiles over one collection, computed
/// together so the assessed-score extraction happens once. Distribution
/// and percentiles are absent together, exactly when nothing is assessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAggregation {
    pub statistics: RiskStatistics,
    pub distribution: Option<RiskDistribution>,
    pub percentiles: Option<ScorePercentiles>,
}

impl RiskAggregation {
    /// Single pass over the input plus one sort of the assessed scores.
    pub fn from_rankings(rankings: &[Option<RiskRanking>]) -> Self {
        let statistics = RiskStatistics::from_rankings(rankings);
        let distribution = RiskDistribution::from_statistics(&statistics);

        let mut assessed_scores: Vec<u32> = rankings
            .iter()
            .flatten()
            .map(|ranking| ranking.risk_score)
            .collect();
        assessed_scores.sort_unstable();
        let percentiles = ScorePercentiles::from_sorted(&assessed_scores);

        Self {
            statistics,
            distribution,
            percentiles,
        }
    }
}
