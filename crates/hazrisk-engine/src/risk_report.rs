//! Deterministic risk-report assembly for the reporting collaborator.
//!
//! Bundles what a project dashboard or generated report section needs
//! (aggregation results, the severity×likelihood matrix, and the
//! classification band definitions) into one self-describing document
//! with an append-only event trail. Same request, same document: the
//! report id is derived from the request content, and nothing here reads
//! a clock or any other ambient state.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::analysis_entry::{AnalysisEntry, rankings};
use crate::risk_matrix::{RiskMatrix, generate_risk_matrix};
use crate::risk_score::{RiskLevelDefinition, risk_level_definitions};
use crate::risk_statistics::RiskAggregation;

/// Component name carried by every event record.
pub const RISK_REPORT_COMPONENT: &str = "risk_report";
/// Schema version string.
pub const RISK_REPORT_SCHEMA_VERSION: &str = "hazrisk-engine.risk-report.v1";

const ERROR_INVALID_REQUEST: &str = "HR-REPORT-2001";
const ERROR_INVALID_TIMESTAMP: &str = "HR-REPORT-2002";

/// Request from the reporting layer: identity, provenance timestamp, and
/// the worksheet entries to summarize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReportRequest {
    pub trace_id: String,
    pub project_id: String,
    /// RFC3339 UTC timestamp supplied by the caller; the engine validates
    /// but never generates timestamps.
    pub generated_at_utc: String,
    pub entries: Vec<AnalysisEntry>,
}

/// One structured event emitted during report assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReportEvent {
    pub trace_id: String,
    pub project_id: String,
    pub component: String,
    pub event: String,
    pub outcome: String,
    pub error_code: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskReportError {
    #[error("invalid request field `{field}`: {detail}")]
    InvalidRequest { field: String, detail: String },
    #[error("invalid RFC3339 UTC timestamp `{value}`")]
    InvalidTimestamp { value: String },
}

impl RiskReportError {
    pub const fn stable_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => ERROR_INVALID_REQUEST,
            Self::InvalidTimestamp { .. } => ERROR_INVALID_TIMESTAMP,
        }
    }
}

/// The assembled report content. `aggregation` and `matrix` are absent
/// exactly when `outcome` is `"fail"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReportDocument {
    pub schema_version: String,
    pub report_id: String,
    pub project_id: String,
    pub generated_at_utc: String,
    pub outcome: String,
    pub error_code: Option<String>,
    pub aggregation: Option<RiskAggregation>,
    pub matrix: Option<RiskMatrix>,
    pub level_definitions: Vec<RiskLevelDefinition>,
    pub events: Vec<RiskReportEvent>,
}

/// Assemble the report. Always returns a document; an invalid request
/// yields `outcome: "fail"` with a stable error code and absent body
/// sections.
pub fn build_risk_report(request: &RiskReportRequest) -> RiskReportDocument {
    let report_id = build_report_id(request);
    let mut events = vec![make_event(request, "risk_report_started", "pass", None)];

    match validate_request(request) {
        Ok(()) => {
            let aggregation = RiskAggregation::from_rankings(&rankings(&request.entries));
            events.push(make_event(request, "entries_aggregated", "pass", None));
            events.push(make_event(request, "risk_report_completed", "pass", None));
            RiskReportDocument {
                schema_version: RISK_REPORT_SCHEMA_VERSION.to_string(),
                report_id,
                project_id: request.project_id.clone(),
                generated_at_utc: request.generated_at_utc.clone(),
                outcome: "complete".to_string(),
                error_code: None,
                aggregation: Some(aggregation),
                matrix: Some(generate_risk_matrix()),
                level_definitions: risk_level_definitions(),
                events,
            }
        }
        Err(error) => {
            let error_code = error.stable_code().to_string();
            events.push(make_event(
                request,
                "risk_report_completed",
                "fail",
                Some(error_code.clone()),
            ));
            RiskReportDocument {
                schema_version: RISK_REPORT_SCHEMA_VERSION.to_string(),
                report_id,
                project_id: request.project_id.clone(),
                generated_at_utc: request.generated_at_utc.clone(),
                outcome: "fail".to_string(),
                error_code: Some(error_code),
                aggregation: None,
                matrix: None,
                level_definitions: Vec::new(),
                events,
            }
        }
    }
}

fn validate_request(request: &RiskReportRequest) -> Result<(), RiskReportError> {
    if request.trace_id.trim().is_empty() {
        return Err(RiskReportError::InvalidRequest {
            field: "trace_id".to_string(),
            detail: "must not be empty".to_string(),
        });
    }
    if request.project_id.trim().is_empty() {
        return Err(RiskReportError::InvalidRequest {
            field: "project_id".to_string(),
            detail: "must not be empty".to_string(),
        });
    }
    if DateTime::parse_from_rfc3339(&request.generated_at_utc).is_err() {
        return Err(RiskReportError::InvalidTimestamp {
            value: request.generated_at_utc.clone(),
        });
    }
    Ok(())
}

fn build_report_id(request: &RiskReportRequest) -> String {
    let mut hasher = Sha256::new();
    hasher.update(request.trace_id.as_bytes());
    hasher.update(request.project_id.as_bytes());
    hasher.update(request.generated_at_utc.as_bytes());
    for entry in &request.entries {
        hasher.update(entry.node_id.as_bytes());
        hasher.update(entry.guide_word.as_str().as_bytes());
        hasher.update(entry.deviation.as_bytes());
        match &entry.ranking {
            Some(ranking) => {
                hasher.update([ranking.severity, ranking.likelihood, ranking.detectability]);
                hasher.update(ranking.risk_score.to_le_bytes());
            }
            None => hasher.update(b"unassessed"),
        }
    }
    let digest = hasher.finalize();
    format!("hzr-{digest:x}")
}

fn make_event(
    request: &RiskReportRequest,
    event: &str,
    outcome: &str,
    error_code: Option<String>,
) -> RiskReportEvent {
    RiskReportEvent {
        trace_id: request.trace_id.clone(),
        project_id: request.project_id.clone(),
        component: RISK_REPORT_COMPONENT.to_string(),
        event: event.to_string(),
        outcome: outcome.to_string(),
        error_code,
    }
}
