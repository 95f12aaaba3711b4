//! Two-factor severity×likelihood risk matrix.
//!
//! An intentionally separate classification system from
//! [`crate::risk_score`]: it ignores detectability, works on the base score
//! `severity × likelihood` in 1..=25, and uses its own coarser bands:
//! 1..=4 low, 5..=14 medium, 15..=25 high.
//!
//! Lookups go through a literal 5×5 table rather than recomputing the
//! threshold ladder. The table exists for O(1) access, not to encode
//! different semantics: for every cell it must agree with
//! [`determine_risk_level_from_base_score`], and the agreement is enforced
//! by an exhaustive test rather than by deriving one from the other.

use serde::{Deserialize, Serialize};

use crate::error::{RiskEngineError, ScoreKind};
use crate::risk_factor::{
    LikelihoodLevel, RiskFactorKind, SeverityLevel, is_valid_likelihood_level,
    is_valid_severity_level,
};
use crate::risk_score::RiskLevel;

/// Inclusive lower bound of the two-factor base score.
pub const BASE_SCORE_MIN: u32 = 1;
/// Inclusive upper bound of the two-factor base score.
pub const BASE_SCORE_MAX: u32 = 25;

/// Highest base score still classified low.
pub const LOW_BASE_MAX_SCORE: u32 = 4;
/// Highest base score still classified medium.
pub const MEDIUM_BASE_MAX_SCORE: u32 = 14;

/// Total number of cells in the matrix.
pub const MATRIX_CELL_COUNT: usize = 25;

/// Literal classification table, indexed `[severity - 1][likelihood - 1]`.
/// Must agree with [`determine_risk_level_from_base_score`] on every cell.
const MATRIX_TABLE: [[RiskLevel; 5]; 5] = {
    use RiskLevel::{High as H, Low as L, Medium as M};
    [
        [L, L, L, L, M], // severity 1: base scores 1, 2, 3, 4, 5
        [L, L, M, M, M], // severity 2: base scores 2, 4, 6, 8, 10
        [L, M, M, M, H], // severity 3: base scores 3, 6, 9, 12, 15
        [L, M, M, H, H], // severity 4: base scores 4, 8, 12, 16, 20
        [M, M, H, H, H], // severity 5: base scores 5, 10, 15, 20, 25
    ]
};

// ---------------------------------------------------------------------------
// Base-score classification
// ---------------------------------------------------------------------------

/// True iff `value` is an integer in 1..=25.
pub const fn is_valid_base_risk_score(value: i64) -> bool {
    value >= BASE_SCORE_MIN as i64 && value <= BASE_SCORE_MAX as i64
}

/// Compute the two-factor base score. Validates severity then likelihood
/// and returns the exact product on success.
pub fn calculate_base_risk_score(severity: i64, likelihood: i64) -> Result<u32, RiskEngineError> {
    if !is_valid_severity_level(severity) {
        return Err(RiskEngineError::InvalidFactor {
            factor: RiskFactorKind::Severity,
            value: severity,
        });
    }
    if !is_valid_likelihood_level(likelihood) {
        return Err(RiskEngineError::InvalidFactor {
            factor: RiskFactorKind::Likelihood,
            value: likelihood,
        });
    }
    Ok(severity as u32 * likelihood as u32)
}

/// Classify a base score with the two-factor band ladder.
pub fn determine_risk_level_from_base_score(base_score: i64) -> Result<RiskLevel, RiskEngineError> {
    if !is_valid_base_risk_score(base_score) {
        return Err(RiskEngineError::InvalidScore {
            kind: ScoreKind::Base,
            value: base_score,
        });
    }
    let base_score = base_score as u32;
    if base_score <= LOW_BASE_MAX_SCORE {
        Ok(RiskLevel::Low)
    } else if base_score <= MEDIUM_BASE_MAX_SCORE {
        Ok(RiskLevel::Medium)
    } else {
        Ok(RiskLevel::High)
    }
}

/// O(1) table lookup of the level for a severity/likelihood pair.
pub fn risk_level_from_matrix(severity: i64, likelihood: i64) -> Result<RiskLevel, RiskEngineError> {
    if !is_valid_severity_level(severity) {
        return Err(RiskEngineError::InvalidFactor {
            factor: RiskFactorKind::Severity,
            value: severity,
        });
    }
    if !is_valid_likelihood_level(likelihood) {
        return Err(RiskEngineError::InvalidFactor {
            factor: RiskFactorKind::Likelihood,
            value: likelihood,
        });
    }
    Ok(MATRIX_TABLE[(severity - 1) as usize][(likelihood - 1) as usize])
}

// ---------------------------------------------------------------------------
// Matrix structures
// ---------------------------------------------------------------------------

/// One cell of the matrix: a severity/likelihood pair with its derived
/// classification. Recomputable at any time from its two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrixCell {
    pub severity: u8,
    pub likelihood: u8,
    pub risk_level: RiskLevel,
    pub base_score: u32,
}

/// One row of the matrix: a fixed severity with its 5 cells in ascending
/// likelihood order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrixRow {
    pub severity: u8,
    pub severity_label: String,
    pub cells: Vec<RiskMatrixCell>,
}

/// Column header: a likelihood value with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrixColumnHeader {
    pub likelihood: u8,
    pub label: String,
}

/// Per-level cell counts; always totals 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrixSummary {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl RiskMatrixSummary {
    pub const fn total(&self) -> u32 {
        self.low + self.medium + self.high
    }
}

/// The full 5×5 matrix: rows in descending severity order (5 first),
/// column headers in ascending likelihood order, and per-level counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrix {
    pub rows: Vec<RiskMatrixRow>,
    pub column_headers: Vec<RiskMatrixColumnHeader>,
    pub summary: RiskMatrixSummary,
}

// ---------------------------------------------------------------------------
// Matrix generation
// ---------------------------------------------------------------------------

/// Build the cell for one severity/likelihood pair.
pub fn generate_risk_matrix_cell(
    severity: i64,
    likelihood: i64,
) -> Result<RiskMatrixCell, RiskEngineError> {
    let base_score = calculate_base_risk_score(severity, likelihood)?;
    let risk_level = risk_level_from_matrix(severity, likelihood)?;
    Ok(RiskMatrixCell {
        severity: severity as u8,
        likelihood: likelihood as u8,
        risk_level,
        base_score,
    })
}

/// Build the 5-cell row for one severity, cells ascending by likelihood.
pub fn generate_risk_matrix_row(severity: i64) -> Result<RiskMatrixRow, RiskEngineError> {
    let severity_level =
        SeverityLevel::from_value(severity).ok_or(RiskEngineError::InvalidFactor {
            factor: RiskFactorKind::Severity,
            value: severity,
        })?;
    let cells = LikelihoodLevel::all()
        .iter()
        .map(|likelihood| generate_risk_matrix_cell(severity, likelihood.value() as i64))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RiskMatrixRow {
        severity: severity_level.value(),
        severity_label: severity_level.label().to_string(),
        cells,
    })
}

/// Build the complete matrix: 5 rows in descending severity order, 5
/// column headers in ascending likelihood order, and the per-level
/// summary over all 25 cells.
pub fn generate_risk_matrix() -> RiskMatrix {
    let rows: Vec<RiskMatrixRow> = SeverityLevel::all()
        .iter()
        .rev()
        .map(|severity| {
            generate_risk_matrix_row(severity.value() as i64)
                .expect("severity values from the closed scale are always valid")
        })
        .collect();

    let column_headers = LikelihoodLevel::all()
        .iter()
        .map(|likelihood| RiskMatrixColumnHeader {
            likelihood: likelihood.value(),
            label: likelihood.label().to_string(),
        })
        .collect();

    let mut summary = RiskMatrixSummary {
        low: 0,
        medium: 0,
        high: 0,
    };
    for row in &rows {
        for cell in &row.cells {
            match cell.risk_level {
                RiskLevel::Low => summary.low += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::High => summary.high += 1,
            }
        }
    }

    RiskMatrix {
        rows,
        column_headers,
        summary,
    }
}

/// Null-safe cell lookup: absent for out-of-range inputs instead of
/// failing.
pub fn risk_matrix_cell(severity: i64, likelihood: i64) -> Option<RiskMatrixCell> {
    generate_risk_matrix_cell(severity, likelihood).ok()
}

/// All cells classified at `level`, scanning the 25 combinations in
/// ascending severity-then-likelihood order.
pub fn risk_matrix_cells_by_level(level: RiskLevel) -> Vec<RiskMatrixCell> {
    let mut cells = Vec::new();
    for severity in SeverityLevel::all() {
        for likelihood in LikelihoodLevel::all() {
            let cell = generate_risk_matrix_cell(severity.value() as i64, likelihood.value() as i64)
                .expect("severity and likelihood values from the closed scales are always valid");
            if cell.risk_level == level {
                cells.push(cell);
            }
        }
    }
    cells
}
