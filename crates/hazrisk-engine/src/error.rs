//! Engine error surface.
//!
//! Exactly two error kinds exist: a risk factor outside the 1..=5 domain,
//! and a computed score outside its range. Both are raised synchronously at
//! the point of first detection and are never retried internally; callers
//! translate them into their own validation responses. Aggregation never
//! raises; it returns absent fields instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::risk_factor::RiskFactorKind;

/// Stable code for a factor outside the 1..=5 domain.
pub const ERROR_INVALID_FACTOR: &str = "HR-RISK-1001";
/// Stable code for a score outside its range.
pub const ERROR_INVALID_SCORE: &str = "HR-RISK-1002";

/// Which score range a value was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    /// Three-factor risk score, severity × likelihood × detectability.
    Risk,
    /// Two-factor base score, severity × likelihood.
    Base,
}

impl ScoreKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Risk => "risk score",
            Self::Base => "base risk score",
        }
    }

    /// Inclusive lower bound of the valid range.
    pub const fn min_value(self) -> i64 {
        1
    }

    /// Inclusive upper bound of the valid range.
    pub const fn max_value(self) -> i64 {
        match self {
            Self::Risk => 125,
            Self::Base => 25,
        }
    }
}

impl std::fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskEngineError {
    #[error("invalid {factor} level `{value}`: must be an integer from 1 to 5")]
    InvalidFactor { factor: RiskFactorKind, value: i64 },
    #[error(
        "invalid {kind} `{value}`: must be an integer from {} to {}",
        .kind.min_value(),
        .kind.max_value()
    )]
    InvalidScore { kind: ScoreKind, value: i64 },
}

impl RiskEngineError {
    /// Stable machine-readable code, safe to persist and compare across
    /// releases.
    pub const fn stable_code(&self) -> &'static str {
        match self {
            Self::InvalidFactor { .. } => ERROR_INVALID_FACTOR,
            Self::InvalidScore { .. } => ERROR_INVALID_SCORE,
        }
    }
}
