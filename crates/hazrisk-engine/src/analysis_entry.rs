//! Analysis entries as supplied by the study storage layer.
//!
//! A HazOps worksheet row is keyed by process node and guide word, carries
//! the deviation text, and may or may not have been risk-ranked yet. The
//! engine never queries storage; callers hand it ordered slices of these
//! entries.

use serde::{Deserialize, Serialize};

use crate::risk_score::RiskRanking;

/// The canonical HAZOP guide words, in worksheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideWord {
    No,
    More,
    Less,
    AsWellAs,
    PartOf,
    Reverse,
    OtherThan,
}

impl GuideWord {
    /// All guide words in worksheet order.
    pub const fn all() -> &'static [GuideWord] {
        &[
            Self::No,
            Self::More,
            Self::Less,
            Self::AsWellAs,
            Self::PartOf,
            Self::Reverse,
            Self::OtherThan,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::No => "no",
            Self::More => "more",
            Self::Less => "less",
            Self::AsWellAs => "as_well_as",
            Self::PartOf => "part_of",
            Self::Reverse => "reverse",
            Self::OtherThan => "other_than",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::No => "No / None",
            Self::More => "More",
            Self::Less => "Less",
            Self::AsWellAs => "As Well As",
            Self::PartOf => "Part Of",
            Self::Reverse => "Reverse",
            Self::OtherThan => "Other Than",
        }
    }
}

impl std::fmt::Display for GuideWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One worksheet row: a deviation at a process node under a guide word,
/// with its ranking once assessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisEntry {
    pub node_id: String,
    pub guide_word: GuideWord,
    pub deviation: String,
    pub ranking: Option<RiskRanking>,
}

impl AnalysisEntry {
    pub const fn is_assessed(&self) -> bool {
        self.ranking.is_some()
    }
}

/// Project the entries onto the aggregation input, preserving order. An
/// unassessed entry stays an explicit absence marker.
pub fn rankings(entries: &[AnalysisEntry]) -> Vec<Option<RiskRanking>> {
    entries.iter().map(|entry| entry.ranking).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk_score::calculate_risk_ranking;

    fn entry(node_id: &str, guide_word: GuideWord, ranked: bool) -> AnalysisEntry {
        AnalysisEntry {
            node_id: node_id.to_string(),
            guide_word,
            deviation: format!("{} flow at {node_id}", guide_word.label()),
            ranking: ranked.then(|| calculate_risk_ranking(3, 2, 2).expect("valid factors")),
        }
    }

    #[test]
    fn seven_guide_words_in_worksheet_order() {
        assert_eq!(GuideWord::all().len(), 7);
        assert_eq!(GuideWord::all()[0], GuideWord::No);
        assert_eq!(GuideWord::all()[6], GuideWord::OtherThan);
    }

    #[test]
    fn projection_preserves_order_and_absence() {
        let entries = vec![
            entry("node-1", GuideWord::No, true),
            entry("node-1", GuideWord::More, false),
            entry("node-2", GuideWord::Reverse, true),
        ];
        let projected = rankings(&entries);
        assert_eq!(projected.len(), 3);
        assert!(projected[0].is_some());
        assert!(projected[1].is_none());
        assert!(projected[2].is_some());
        assert!(entries[0].is_assessed());
        assert!(!entries[1].is_assessed());
    }

    #[test]
    fn guide_word_tags_are_stable() {
        assert_eq!(GuideWord::AsWellAs.as_str(), "as_well_as");
        assert_eq!(
            serde_json::to_string(&GuideWord::OtherThan).expect("serialize"),
            "\"other_than\""
        );
    }
}
