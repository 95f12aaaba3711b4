//! Three-factor risk scoring and classification.
//!
//! The risk score of a deviation is the plain product
//! `severity × likelihood × detectability`, always an integer in 1..=125.
//! Classification into the three-level taxonomy uses fixed bands:
//! 1..=20 low, 21..=60 medium, 61..=125 high. The bands are constants of
//! the model, not runtime configuration.
//!
//! This module is one of two independent classification systems; the
//! severity×likelihood matrix in [`crate::risk_matrix`] has its own score
//! range and its own bands and shares no thresholds with this one.

use serde::{Deserialize, Serialize};

use crate::error::{RiskEngineError, ScoreKind};
use crate::risk_factor::validate_risk_factors;

/// Inclusive lower bound of the three-factor risk score.
pub const RISK_SCORE_MIN: u32 = 1;
/// Inclusive upper bound of the three-factor risk score.
pub const RISK_SCORE_MAX: u32 = 125;

/// Highest score still classified low.
pub const LOW_RISK_MAX_SCORE: u32 = 20;
/// Highest score still classified medium.
pub const MEDIUM_RISK_MAX_SCORE: u32 = 60;

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// The three-way risk taxonomy shared by both classification systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All levels in ascending order of concern.
    pub const fn all() -> &'static [RiskLevel] {
        &[Self::Low, Self::Medium, Self::High]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Acceptable with existing safeguards; monitor during routine review",
            Self::Medium => "Reduce where practicable; mitigation should be planned",
            Self::High => "Intolerable; immediate mitigation required before operation",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One band of the three-factor classification ladder, with its exact
/// score edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevelDefinition {
    pub level: RiskLevel,
    pub label: String,
    pub description: String,
    pub min_score: u32,
    pub max_score: u32,
}

/// The three classification bands in ascending order. Band edges are the
/// authoritative 1–20 / 21–60 / 61–125 ladder.
pub fn risk_level_definitions() -> Vec<RiskLevelDefinition> {
    RiskLevel::all()
        .iter()
        .map(|&level| {
            let (min_score, max_score) = match level {
                RiskLevel::Low => (RISK_SCORE_MIN, LOW_RISK_MAX_SCORE),
                RiskLevel::Medium => (LOW_RISK_MAX_SCORE + 1, MEDIUM_RISK_MAX_SCORE),
                RiskLevel::High => (MEDIUM_RISK_MAX_SCORE + 1, RISK_SCORE_MAX),
            };
            RiskLevelDefinition {
                level,
                label: level.label().to_string(),
                description: level.description().to_string(),
                min_score,
                max_score,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// True iff `value` is an integer in 1..=125.
pub const fn is_valid_risk_score(value: i64) -> bool {
    value >= RISK_SCORE_MIN as i64 && value <= RISK_SCORE_MAX as i64
}

/// Compute the three-factor risk score. Validates every factor first
/// (severity, then likelihood, then detectability) and returns the exact
/// product on success. No rounding, no clamping; this is the sole
/// arithmetic operation in the three-factor model.
pub fn calculate_risk_score(
    severity: i64,
    likelihood: i64,
    detectability: i64,
) -> Result<u32, RiskEngineError> {
    validate_risk_factors(severity, likelihood, detectability)?;
    Ok(severity as u32 * likelihood as u32 * detectability as u32)
}

/// Classify a risk score into the three-level taxonomy.
pub fn determine_risk_level(score: i64) -> Result<RiskLevel, RiskEngineError> {
    if !is_valid_risk_score(score) {
        return Err(RiskEngineError::InvalidScore {
            kind: ScoreKind::Risk,
            value: score,
        });
    }
    let score = score as u32;
    if score <= LOW_RISK_MAX_SCORE {
        Ok(RiskLevel::Low)
    } else if score <= MEDIUM_RISK_MAX_SCORE {
        Ok(RiskLevel::Medium)
    } else {
        Ok(RiskLevel::High)
    }
}

// ---------------------------------------------------------------------------
// RiskRanking
// ---------------------------------------------------------------------------

/// A complete per-deviation risk assessment. Produced by
/// [`calculate_risk_ranking`]; `risk_score` and `risk_level` are always
/// consistent with the three factors for every engine-produced value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRanking {
    pub severity: u8,
    pub likelihood: u8,
    pub detectability: u8,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
}

/// A ranking together with the display label of its level, for callers
/// that render the result directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub ranking: RiskRanking,
    pub risk_level_label: String,
}

/// Score and classify in one step.
pub fn calculate_risk_ranking(
    severity: i64,
    likelihood: i64,
    detectability: i64,
) -> Result<RiskRanking, RiskEngineError> {
    let risk_score = calculate_risk_score(severity, likelihood, detectability)?;
    let risk_level = determine_risk_level(risk_score as i64)?;
    Ok(RiskRanking {
        severity: severity as u8,
        likelihood: likelihood as u8,
        detectability: detectability as u8,
        risk_score,
        risk_level,
    })
}

/// [`calculate_risk_ranking`] plus the human-readable level label.
pub fn calculate_risk(
    severity: i64,
    likelihood: i64,
    detectability: i64,
) -> Result<RiskAssessment, RiskEngineError> {
    let ranking = calculate_risk_ranking(severity, likelihood, detectability)?;
    Ok(RiskAssessment {
        risk_level_label: ranking.risk_level.label().to_string(),
        ranking,
    })
}
