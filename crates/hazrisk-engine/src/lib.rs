#![forbid(unsafe_code)]

//! Deterministic risk scoring and aggregation for HazOps studies.
//!
//! The engine is a pure, synchronous function library over fixed small
//! domains: it turns the three 1..=5 risk factors into a score and
//! classification, maintains the independent severity×likelihood matrix
//! classification, and folds collections of rankings into statistics,
//! distributions, and percentiles. It holds no state, performs no I/O,
//! and is safe to call concurrently from any number of workers.
//!
//! Two classification systems coexist deliberately and share no
//! thresholds:
//! - three-factor: `severity × likelihood × detectability` in 1..=125,
//!   bands 1–20 / 21–60 / 61–125 ([`risk_score`]);
//! - two-factor: `severity × likelihood` in 1..=25, bands 1–4 / 5–14 /
//!   15–25 ([`risk_matrix`]).

pub mod analysis_entry;
pub mod error;
pub mod risk_factor;
pub mod risk_matrix;
pub mod risk_report;
pub mod risk_score;
pub mod risk_statistics;

pub use error::{RiskEngineError, ScoreKind};
pub use risk_factor::{
    DetectabilityLevel, FactorScaleEntry, LikelihoodLevel, RiskFactorKind, SeverityLevel,
    validate_risk_factors,
};
pub use risk_matrix::{RiskMatrix, RiskMatrixCell, generate_risk_matrix};
pub use risk_score::{
    RiskAssessment, RiskLevel, RiskRanking, calculate_risk, calculate_risk_ranking,
    calculate_risk_score, determine_risk_level,
};
pub use risk_statistics::{RiskAggregation, RiskDistribution, RiskStatistics, ScorePercentiles};
