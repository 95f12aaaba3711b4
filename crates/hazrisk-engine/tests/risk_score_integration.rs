#![forbid(unsafe_code)]

//! Integration tests for the three-factor scoring path.
//!
//! Covers: factor validation ordering, `calculate_risk_score`,
//! `determine_risk_level` band edges, `calculate_risk_ranking`,
//! `calculate_risk`, and the risk-level definition table.

use hazrisk_engine::risk_score::{
    LOW_RISK_MAX_SCORE, MEDIUM_RISK_MAX_SCORE, RISK_SCORE_MAX, RISK_SCORE_MIN,
    risk_level_definitions,
};
use hazrisk_engine::{
    RiskEngineError, RiskFactorKind, RiskLevel, calculate_risk, calculate_risk_ranking,
    calculate_risk_score, determine_risk_level, validate_risk_factors,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn expect_invalid_factor(result: Result<u32, RiskEngineError>, factor: RiskFactorKind, value: i64) {
    assert_eq!(
        result.unwrap_err(),
        RiskEngineError::InvalidFactor { factor, value }
    );
}

// ---------------------------------------------------------------------------
// Scoring over the full domain
// ---------------------------------------------------------------------------

#[test]
fn every_factor_combination_scores_to_its_product() {
    for severity in 1..=5i64 {
        for likelihood in 1..=5i64 {
            for detectability in 1..=5i64 {
                let score = calculate_risk_score(severity, likelihood, detectability)
                    .expect("all factors in domain");
                assert_eq!(i64::from(score), severity * likelihood * detectability);
                assert!(score >= RISK_SCORE_MIN && score <= RISK_SCORE_MAX);
            }
        }
    }
}

#[test]
fn first_invalid_factor_wins_in_declaration_order() {
    expect_invalid_factor(calculate_risk_score(0, 0, 0), RiskFactorKind::Severity, 0);
    expect_invalid_factor(calculate_risk_score(1, 6, 6), RiskFactorKind::Likelihood, 6);
    expect_invalid_factor(
        calculate_risk_score(1, 1, -4),
        RiskFactorKind::Detectability,
        -4,
    );
    assert!(validate_risk_factors(5, 5, 5).is_ok());
}

// ---------------------------------------------------------------------------
// Classification bands
// ---------------------------------------------------------------------------

#[test]
fn band_edges_match_the_published_definitions() {
    assert_eq!(determine_risk_level(20).unwrap(), RiskLevel::Low);
    assert_eq!(determine_risk_level(21).unwrap(), RiskLevel::Medium);
    assert_eq!(determine_risk_level(60).unwrap(), RiskLevel::Medium);
    assert_eq!(determine_risk_level(61).unwrap(), RiskLevel::High);

    let definitions = risk_level_definitions();
    assert_eq!(definitions.len(), 3);
    assert_eq!(definitions[0].max_score, LOW_RISK_MAX_SCORE);
    assert_eq!(definitions[1].min_score, LOW_RISK_MAX_SCORE + 1);
    assert_eq!(definitions[1].max_score, MEDIUM_RISK_MAX_SCORE);
    assert_eq!(definitions[2].min_score, MEDIUM_RISK_MAX_SCORE + 1);
    assert_eq!(definitions[2].max_score, RISK_SCORE_MAX);

    // Bands tile the score range with no gap and no overlap.
    for window in definitions.windows(2) {
        assert_eq!(window[0].max_score + 1, window[1].min_score);
    }
}

#[test]
fn scores_outside_the_range_fail_classification() {
    assert!(determine_risk_level(0).is_err());
    assert!(determine_risk_level(126).is_err());
}

// ---------------------------------------------------------------------------
// Ranking and assessment composition
// ---------------------------------------------------------------------------

#[test]
fn reference_rankings_from_the_model() {
    let lowest = calculate_risk_ranking(1, 1, 1).expect("valid");
    assert_eq!((lowest.risk_score, lowest.risk_level), (1, RiskLevel::Low));

    let middle = calculate_risk_ranking(3, 3, 3).expect("valid");
    assert_eq!((middle.risk_score, middle.risk_level), (27, RiskLevel::Medium));

    let highest = calculate_risk_ranking(5, 5, 5).expect("valid");
    assert_eq!((highest.risk_score, highest.risk_level), (125, RiskLevel::High));
}

#[test]
fn ranking_fields_stay_consistent_across_the_domain() {
    for severity in 1..=5i64 {
        for likelihood in 1..=5i64 {
            for detectability in 1..=5i64 {
                let ranking = calculate_risk_ranking(severity, likelihood, detectability)
                    .expect("all factors in domain");
                assert_eq!(
                    ranking.risk_score,
                    u32::from(ranking.severity)
                        * u32::from(ranking.likelihood)
                        * u32::from(ranking.detectability)
                );
                assert_eq!(
                    ranking.risk_level,
                    determine_risk_level(i64::from(ranking.risk_score)).expect("score in range")
                );
            }
        }
    }
}

#[test]
fn assessment_label_matches_the_level() {
    let assessment = calculate_risk(2, 2, 2).expect("valid");
    assert_eq!(assessment.ranking.risk_level, RiskLevel::Low);
    assert_eq!(assessment.risk_level_label, "Low");

    let assessment = calculate_risk(5, 4, 4).expect("valid");
    assert_eq!(assessment.ranking.risk_score, 80);
    assert_eq!(assessment.risk_level_label, "High");
}

#[test]
fn ranking_json_uses_snake_case_level_tags() {
    let ranking = calculate_risk_ranking(5, 3, 1).expect("valid");
    let json = serde_json::to_string(&ranking).expect("serialize");
    assert!(json.contains("\"risk_score\":15"));
    assert!(json.contains("\"risk_level\":\"low\""));
}
