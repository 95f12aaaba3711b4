//! The three qualitative risk factors and their fixed 1..=5 scales.
//!
//! Every deviation in a HazOps study is rated on three independent factors:
//! severity of the consequence, likelihood of the initiating cause, and
//! detectability of the deviation before consequences develop. Each factor
//! is a closed five-point scale; anything outside the integer domain 1..=5
//! is rejected at the boundary, never coerced.
//!
//! Raw wire values arrive as `i64` so that negative and out-of-range inputs
//! are representable and rejectable; fractional inputs cannot be expressed
//! in the type at all.

use serde::{Deserialize, Serialize};

use crate::error::RiskEngineError;

/// Inclusive lower bound of every factor scale.
pub const FACTOR_LEVEL_MIN: i64 = 1;
/// Inclusive upper bound of every factor scale.
pub const FACTOR_LEVEL_MAX: i64 = 5;

/// Which of the three factors a value belongs to. Used by validation errors
/// to name the offending factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    Severity,
    Likelihood,
    Detectability,
}

impl RiskFactorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Likelihood => "likelihood",
            Self::Detectability => "detectability",
        }
    }
}

impl std::fmt::Display for RiskFactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a factor scale: numeric value plus its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScaleEntry {
    pub value: u8,
    pub label: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// SeverityLevel
// ---------------------------------------------------------------------------

/// Consequence severity, 1 (negligible) to 5 (catastrophic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Negligible = 1,
    Minor = 2,
    Moderate = 3,
    Major = 4,
    Catastrophic = 5,
}

impl SeverityLevel {
    /// All levels in ascending order.
    pub const fn all() -> &'static [SeverityLevel] {
        &[
            Self::Negligible,
            Self::Minor,
            Self::Moderate,
            Self::Major,
            Self::Catastrophic,
        ]
    }

    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Negligible),
            2 => Some(Self::Minor),
            3 => Some(Self::Moderate),
            4 => Some(Self::Major),
            5 => Some(Self::Catastrophic),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Negligible => "Negligible",
            Self::Minor => "Minor",
            Self::Moderate => "Moderate",
            Self::Major => "Major",
            Self::Catastrophic => "Catastrophic",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Negligible => "No injury; negligible process impact",
            Self::Minor => "Minor injury or first-aid case; brief process upset",
            Self::Moderate => "Lost-time injury; partial shutdown of the affected unit",
            Self::Major => "Severe injury or single fatality; extended unit shutdown",
            Self::Catastrophic => "Multiple fatalities; site-wide or off-site consequences",
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LikelihoodLevel
// ---------------------------------------------------------------------------

/// Likelihood of the initiating cause, 1 (rare) to 5 (almost certain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikelihoodLevel {
    Rare = 1,
    Unlikely = 2,
    Possible = 3,
    Likely = 4,
    AlmostCertain = 5,
}

impl LikelihoodLevel {
    /// All levels in ascending order.
    pub const fn all() -> &'static [LikelihoodLevel] {
        &[
            Self::Rare,
            Self::Unlikely,
            Self::Possible,
            Self::Likely,
            Self::AlmostCertain,
        ]
    }

    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Rare),
            2 => Some(Self::Unlikely),
            3 => Some(Self::Possible),
            4 => Some(Self::Likely),
            5 => Some(Self::AlmostCertain),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rare => "Rare",
            Self::Unlikely => "Unlikely",
            Self::Possible => "Possible",
            Self::Likely => "Likely",
            Self::AlmostCertain => "Almost Certain",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Rare => "Not expected within the plant lifetime",
            Self::Unlikely => "Could occur once within the plant lifetime",
            Self::Possible => "Expected to occur once in several years",
            Self::Likely => "Expected to occur about once a year",
            Self::AlmostCertain => "Expected to occur several times a year",
        }
    }
}

impl std::fmt::Display for LikelihoodLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// DetectabilityLevel
// ---------------------------------------------------------------------------

/// Detectability of the deviation before consequences develop, 1 (detected
/// almost immediately) to 5 (no practical means of detection). Higher is
/// worse, which is why it multiplies into the risk score rather than
/// dividing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectabilityLevel {
    VeryHigh = 1,
    High = 2,
    Moderate = 3,
    Low = 4,
    Remote = 5,
}

impl DetectabilityLevel {
    /// All levels in ascending order.
    pub const fn all() -> &'static [DetectabilityLevel] {
        &[
            Self::VeryHigh,
            Self::High,
            Self::Moderate,
            Self::Low,
            Self::Remote,
        ]
    }

    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::VeryHigh),
            2 => Some(Self::High),
            3 => Some(Self::Moderate),
            4 => Some(Self::Low),
            5 => Some(Self::Remote),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::Remote => "Remote",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::VeryHigh => "Detected almost immediately by continuous monitoring",
            Self::High => "Detected by routine alarms or operator rounds",
            Self::Moderate => "Detected by periodic checks before consequences develop",
            Self::Low => "Unlikely to be detected before consequences develop",
            Self::Remote => "No practical means of detection before consequences develop",
        }
    }
}

impl std::fmt::Display for DetectabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Raw-value validation
// ---------------------------------------------------------------------------

/// True iff `value` is a valid severity level (an integer 1..=5).
pub const fn is_valid_severity_level(value: i64) -> bool {
    SeverityLevel::from_value(value).is_some()
}

/// True iff `value` is a valid likelihood level (an integer 1..=5).
pub const fn is_valid_likelihood_level(value: i64) -> bool {
    LikelihoodLevel::from_value(value).is_some()
}

/// True iff `value` is a valid detectability level (an integer 1..=5).
pub const fn is_valid_detectability_level(value: i64) -> bool {
    DetectabilityLevel::from_value(value).is_some()
}

/// Validate all three factors in a fixed order: severity, then likelihood,
/// then detectability. The first failure wins, so at most one factor is
/// reported per call.
pub fn validate_risk_factors(
    severity: i64,
    likelihood: i64,
    detectability: i64,
) -> Result<(), RiskEngineError> {
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
    if !is_valid_detectability_level(detectability) {
        return Err(RiskEngineError::InvalidFactor {
            factor: RiskFactorKind::Detectability,
            value: detectability,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Scale metadata accessors
// ---------------------------------------------------------------------------

/// The full severity scale in ascending order.
pub fn severity_levels() -> Vec<FactorScaleEntry> {
    SeverityLevel::all()
        .iter()
        .map(|level| FactorScaleEntry {
            value: level.value(),
            label: level.label().to_string(),
            description: level.description().to_string(),
        })
        .collect()
}

/// The full likelihood scale in ascending order.
pub fn likelihood_levels() -> Vec<FactorScaleEntry> {
    LikelihoodLevel::all()
        .iter()
        .map(|level| FactorScaleEntry {
            value: level.value(),
            label: level.label().to_string(),
            description: level.description().to_string(),
        })
        .collect()
}

/// The full detectability scale in ascending order.
pub fn detectability_levels() -> Vec<FactorScaleEntry> {
    DetectabilityLevel::all()
        .iter()
        .map(|level| FactorScaleEntry {
            value: level.value(),
            label: level.label().to_string(),
            description: level.description().to_string(),
        })
        .collect()
}

/// Label for a raw severity value; absent outside 1..=5.
pub fn severity_label(value: i64) -> Option<&'static str> {
    SeverityLevel::from_value(value).map(SeverityLevel::label)
}

/// Description for a raw severity value; absent outside 1..=5.
pub fn severity_description(value: i64) -> Option<&'static str> {
    SeverityLevel::from_value(value).map(SeverityLevel::description)
}

/// Label for a raw likelihood value; absent outside 1..=5.
pub fn likelihood_label(value: i64) -> Option<&'static str> {
    LikelihoodLevel::from_value(value).map(LikelihoodLevel::label)
}

/// Description for a raw likelihood value; absent outside 1..=5.
pub fn likelihood_description(value: i64) -> Option<&'static str> {
    LikelihoodLevel::from_value(value).map(LikelihoodLevel::description)
}

/// Label for a raw detectability value; absent outside 1..=5.
pub fn detectability_label(value: i64) -> Option<&'static str> {
    DetectabilityLevel::from_value(value).map(DetectabilityLevel::label)
}

/// Description for a raw detectability value; absent outside 1..=5.
pub fn detectability_description(value: i64) -> Option<&'static str> {
    DetectabilityLevel::from_value(value).map(DetectabilityLevel::description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scale_has_five_ascending_values() {
        for (index, level) in SeverityLevel::all().iter().enumerate() {
            assert_eq!(level.value() as usize, index + 1);
        }
        for (index, level) in LikelihoodLevel::all().iter().enumerate() {
            assert_eq!(level.value() as usize, index + 1);
        }
        for (index, level) in DetectabilityLevel::all().iter().enumerate() {
            assert_eq!(level.value() as usize, index + 1);
        }
        assert_eq!(severity_levels().len(), 5);
        assert_eq!(likelihood_levels().len(), 5);
        assert_eq!(detectability_levels().len(), 5);
    }

    #[test]
    fn validity_is_exactly_the_integer_domain_one_to_five() {
        for value in 1..=5 {
            assert!(is_valid_severity_level(value));
            assert!(is_valid_likelihood_level(value));
            assert!(is_valid_detectability_level(value));
        }
        for value in [i64::MIN, -1, 0, 6, 100, i64::MAX] {
            assert!(!is_valid_severity_level(value));
            assert!(!is_valid_likelihood_level(value));
            assert!(!is_valid_detectability_level(value));
        }
    }

    #[test]
    fn validation_reports_severity_before_likelihood_before_detectability() {
        let err = validate_risk_factors(0, 0, 0).unwrap_err();
        assert_eq!(
            err,
            RiskEngineError::InvalidFactor {
                factor: RiskFactorKind::Severity,
                value: 0,
            }
        );

        let err = validate_risk_factors(3, 6, 0).unwrap_err();
        assert_eq!(
            err,
            RiskEngineError::InvalidFactor {
                factor: RiskFactorKind::Likelihood,
                value: 6,
            }
        );

        let err = validate_risk_factors(3, 3, -2).unwrap_err();
        assert_eq!(
            err,
            RiskEngineError::InvalidFactor {
                factor: RiskFactorKind::Detectability,
                value: -2,
            }
        );

        assert!(validate_risk_factors(1, 5, 3).is_ok());
    }

    #[test]
    fn metadata_lookups_are_absent_outside_the_domain() {
        assert_eq!(severity_label(3), Some("Moderate"));
        assert_eq!(likelihood_label(5), Some("Almost Certain"));
        assert_eq!(detectability_label(1), Some("Very High"));
        assert!(severity_description(2).is_some());
        assert!(detectability_description(5).is_some());

        for value in [0, 6, -1] {
            assert_eq!(severity_label(value), None);
            assert_eq!(severity_description(value), None);
            assert_eq!(likelihood_label(value), None);
            assert_eq!(likelihood_description(value), None);
            assert_eq!(detectability_label(value), None);
            assert_eq!(detectability_description(value), None);
        }
    }

    #[test]
    fn scale_entries_carry_labels_and_descriptions() {
        for entry in severity_levels()
            .into_iter()
            .chain(likelihood_levels())
            .chain(detectability_levels())
        {
            assert!(!entry.label.is_empty());
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn levels_survive_serde_roundtrip() {
        let json = serde_json::to_string(&SeverityLevel::Catastrophic).expect("serialize");
        assert_eq!(json, "\"catastrophic\"");
        let back: SeverityLevel = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, SeverityLevel::Catastrophic);

        let json = serde_json::to_string(&LikelihoodLevel::AlmostCertain).expect("serialize");
        assert_eq!(json, "\"almost_certain\"");

        let json = serde_json::to_string(&DetectabilityLevel::VeryHigh).expect("serialize");
        assert_eq!(json, "\"very_high\"");
    }
}
