#![no_main]

use hazrisk_engine::analysis_entry::{AnalysisEntry, GuideWord};
use hazrisk_engine::risk_report::{RiskReportRequest, build_risk_report};
use hazrisk_engine::risk_statistics::{RiskAggregation, ScorePercentiles};
use hazrisk_engine::{calculate_risk_ranking, determine_risk_level, validate_risk_factors};
use libfuzzer_sys::fuzz_target;

const MAX_ENTRIES: usize = 256;

fuzz_target!(|data: &[u8]| {
    run_aggregation_program(data);
});

fn run_aggregation_program(data: &[u8]) {
    // Raw-value paths must reject, never panic.
    if data.len() >= 3 {
        let severity = i64::from(data[0] as i8);
        let likelihood = i64::from(data[1] as i8);
        let detectability = i64::from(data[2] as i8);
        let _ = validate_risk_factors(severity, likelihood, detectability);
        let _ = determine_risk_level(severity * likelihood * detectability);
    }

    // Build a study from the input bytes: one byte per entry, high bit
    // selects assessed/unassessed, low bits pick the factors.
    let mut entries = Vec::new();
    for (index, &byte) in data.iter().take(MAX_ENTRIES).enumerate() {
        let ranking = if byte & 0x80 == 0 {
            let severity = i64::from(byte & 0x03) + 1;
            let likelihood = i64::from((byte >> 2) & 0x03) + 1;
            let detectability = i64::from((byte >> 4) & 0x03) + 1;
            Some(
                calculate_risk_ranking(severity, likelihood, detectability)
                    .expect("factors constructed inside the domain"),
            )
        } else {
            None
        };
        entries.push(AnalysisEntry {
            node_id: format!("node-{}", index % 7),
            guide_word: GuideWord::all()[index % GuideWord::all().len()],
            deviation: format!("deviation {index}"),
            ranking,
        });
    }

    let rankings: Vec<_> = entries.iter().map(|entry| entry.ranking).collect();
    let aggregation = RiskAggregation::from_rankings(&rankings);

    // Absence coupling holds for arbitrary inputs.
    assert_eq!(
        aggregation.distribution.is_some(),
        aggregation.percentiles.is_some()
    );
    if let Some(percentiles) = &aggregation.percentiles {
        assert!(percentiles.p25 <= percentiles.p95);
    }

    let scores: Vec<u32> = rankings.iter().flatten().map(|r| r.risk_score).collect();
    let _ = ScorePercentiles::from_scores(&scores);

    let request = RiskReportRequest {
        trace_id: "fuzz-trace".to_string(),
        project_id: "fuzz-project".to_string(),
        generated_at_utc: "2026-01-01T00:00:00Z".to_string(),
        entries,
    };
    let document = build_risk_report(&request);

    if let Ok(json) = serde_json::to_string(&document)
        && let Ok(decoded) =
            serde_json::from_str::<hazrisk_engine::risk_report::RiskReportDocument>(&json)
    {
        assert_eq!(document, decoded);
    }
}
