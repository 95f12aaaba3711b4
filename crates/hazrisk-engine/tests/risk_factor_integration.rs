#![forbid(unsafe_code)]

//! Integration tests for the factor scales.
//!
//! Covers: SeverityLevel, LikelihoodLevel, DetectabilityLevel, raw-value
//! predicates, scale metadata accessors, and per-value label lookups.

use hazrisk_engine::risk_factor::{
    detectability_label, detectability_levels, is_valid_detectability_level,
    is_valid_likelihood_level, is_valid_severity_level, likelihood_description, likelihood_label,
    likelihood_levels, severity_description, severity_label, severity_levels,
};
use hazrisk_engine::{DetectabilityLevel, LikelihoodLevel, SeverityLevel};

// ---------------------------------------------------------------------------
// Closed scales
// ---------------------------------------------------------------------------

#[test]
fn scales_are_closed_over_one_to_five() {
    assert_eq!(SeverityLevel::all().len(), 5);
    assert_eq!(LikelihoodLevel::all().len(), 5);
    assert_eq!(DetectabilityLevel::all().len(), 5);

    for raw in 1..=5 {
        assert!(SeverityLevel::from_value(raw).is_some());
        assert!(LikelihoodLevel::from_value(raw).is_some());
        assert!(DetectabilityLevel::from_value(raw).is_some());
    }
    for raw in [0, 6, -7, 42] {
        assert!(SeverityLevel::from_value(raw).is_none());
        assert!(LikelihoodLevel::from_value(raw).is_none());
        assert!(DetectabilityLevel::from_value(raw).is_none());
    }
}

#[test]
fn from_value_and_value_are_inverse() {
    for level in SeverityLevel::all() {
        assert_eq!(
            SeverityLevel::from_value(i64::from(level.value())),
            Some(*level)
        );
    }
    for level in LikelihoodLevel::all() {
        assert_eq!(
            LikelihoodLevel::from_value(i64::from(level.value())),
            Some(*level)
        );
    }
    for level in DetectabilityLevel::all() {
        assert_eq!(
            DetectabilityLevel::from_value(i64::from(level.value())),
            Some(*level)
        );
    }
}

#[test]
fn predicates_mirror_the_closed_scales() {
    for raw in -10..=10 {
        assert_eq!(is_valid_severity_level(raw), (1..=5).contains(&raw));
        assert_eq!(is_valid_likelihood_level(raw), (1..=5).contains(&raw));
        assert_eq!(is_valid_detectability_level(raw), (1..=5).contains(&raw));
    }
}

// ---------------------------------------------------------------------------
// Scale metadata
// ---------------------------------------------------------------------------

#[test]
fn metadata_accessors_list_ascending_values_with_text() {
    for entries in [severity_levels(), likelihood_levels(), detectability_levels()] {
        assert_eq!(entries.len(), 5);
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.value as usize, index + 1);
            assert!(!entry.label.is_empty());
            assert!(!entry.description.is_empty());
        }
    }
}

#[test]
fn per_value_lookups_agree_with_the_scales() {
    assert_eq!(severity_label(5), Some("Catastrophic"));
    assert_eq!(severity_description(1), Some("No injury; negligible process impact"));
    assert_eq!(likelihood_label(1), Some("Rare"));
    assert!(likelihood_description(3).is_some());
    assert_eq!(detectability_label(5), Some("Remote"));

    for raw in [0, 6, i64::MIN, i64::MAX] {
        assert_eq!(severity_label(raw), None);
        assert_eq!(likelihood_label(raw), None);
        assert_eq!(detectability_label(raw), None);
    }
}

#[test]
fn display_uses_the_scale_labels() {
    assert_eq!(SeverityLevel::Major.to_string(), "Major");
    assert_eq!(LikelihoodLevel::AlmostCertain.to_string(), "Almost Certain");
    assert_eq!(DetectabilityLevel::VeryHigh.to_string(), "Very High");
}
