use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Returned by [`classify`] when no severity level contains the score.
/// Callers must check for it; it is not a clinical label.
pub const INVALID_SCORE: &str = "Invalid score";

/// Answer value recorded for a question the client skipped.
pub const UNANSWERED: i32 = -1;

/// Raw answer value -> point weight.
pub type ScoreMapping = BTreeMap<i32, i32>;

/// A labeled, inclusive score range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityLevel {
    pub label: String,
    pub range: [i32; 2],
}

impl SeverityLevel {
    pub fn contains(&self, score: i32) -> bool {
        let [low, high] = self.range;
        low <= score && score <= high
    }

    pub fn overlaps(&self, other: &SeverityLevel) -> bool {
        let [a_low, a_high] = self.range;
        let [b_low, b_high] = other.range;
        a_low <= b_high && b_low <= a_high
    }
}

/// How a questionnaire's answers are reduced to a score and severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringRule {
    /// Weighted sum, classified against the severity table.
    Sum,
    /// ASRS v1.1: Part A screen overrides the total-score band.
    AsrsScreen,
    /// MBI: emotional exhaustion, depersonalization and personal
    /// accomplishment subscales, each banded separately.
    MbiSubscales,
    /// MDQ: positive only when symptom count, clustering and impairment
    /// criteria all hold.
    MdqScreen,
}

/// Scoring configuration for one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringTable {
    pub rule: ScoringRule,
    pub score_mapping: ScoreMapping,
    pub severity_levels: Vec<SeverityLevel>,
}

/// Derived result for one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireScore {
    pub score: i32,
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subscales: Option<BTreeMap<String, i32>>,
}

/// Sum the mapped weight of every answer. Values missing from the mapping
/// weigh 0.
pub fn score(answers: &[i32], mapping: &ScoreMapping) -> i32 {
    answers
        .iter()
        .map(|answer| mapping.get(answer).copied().unwrap_or(0))
        .fold(0, i32::saturating_add)
}

/// Label of the first level whose range contains `score`, or
/// [`INVALID_SCORE`]. Overlapping ranges resolve to the earliest level.
pub fn classify(score: i32, levels: &[SeverityLevel]) -> String {
    levels
        .iter()
        .find(|level| level.contains(score))
        .map(|level| level.label.clone())
        .unwrap_or_else(|| INVALID_SCORE.to_string())
}

impl ScoringTable {
    pub fn evaluate(&self, answers: &[i32]) -> QuestionnaireScore {
        match self.rule {
            ScoringRule::Sum => {
                let total = score(answers, &self.score_mapping);
                QuestionnaireScore {
                    score: total,
                    severity: classify(total, &self.severity_levels),
                    subscales: None,
                }
            }
            ScoringRule::AsrsScreen => asrs_screen(answers, &self.severity_levels),
            ScoringRule::MbiSubscales => mbi_subscales(answers),
            ScoringRule::MdqScreen => mdq_screen(answers, &self.severity_levels),
        }
    }
}

pub const ASRS_SCREEN_POSITIVE: &str = "Highly Consistent with Adult ADHD (Screen Positive)";
pub const ASRS_SCREEN_NEGATIVE: &str = "Below Clinical Screening Threshold";

/// Lowest answer that lands in the shaded box for each Part A item.
const ASRS_PART_A_SHADED: [i32; 6] = [2, 2, 2, 3, 3, 3];
const ASRS_MAX_ANSWER: i32 = 4;

/// Saturating sum of the answered values.
fn answered_total(answers: &[i32]) -> i32 {
    answers
        .iter()
        .filter(|&&a| a != UNANSWERED)
        .fold(0, |acc: i32, &a| acc.saturating_add(a))
}

fn within_scale(answers: &[i32], max: i32) -> bool {
    answers
        .iter()
        .all(|&a| a == UNANSWERED || (0..=max).contains(&a))
}

fn asrs_screen(answers: &[i32], levels: &[SeverityLevel]) -> QuestionnaireScore {
    let total = answered_total(answers);

    if !within_scale(answers, ASRS_MAX_ANSWER) {
        return QuestionnaireScore {
            score: total,
            severity: INVALID_SCORE.to_string(),
            subscales: None,
        };
    }

    let shaded = answers
        .iter()
        .zip(ASRS_PART_A_SHADED)
        .filter(|(answer, min)| (*min..=ASRS_MAX_ANSWER).contains(*answer))
        .count();

    let severity = if shaded >= 4 {
        ASRS_SCREEN_POSITIVE.to_string()
    } else {
        match classify(total, levels) {
            label if label == INVALID_SCORE => ASRS_SCREEN_NEGATIVE.to_string(),
            label => label,
        }
    };

    QuestionnaireScore {
        score: total,
        severity,
        subscales: None,
    }
}

const MBI_MAX_ANSWER: i32 = 6;

fn mbi_subscales(answers: &[i32]) -> QuestionnaireScore {
    let end = answers.len();
    let part = |from: usize, to: usize| answered_total(&answers[from.min(end)..to.min(end)]);
    let ee = part(0, 7);
    let dp = part(7, 14);
    let pa = part(14, end);
    let total = ee.saturating_add(dp).saturating_add(pa);

    let ee_level = match ee {
        ..=16 => "Low",
        17..=26 => "Moderate",
        _ => "High",
    };
    let dp_level = match dp {
        ..=6 => "Low",
        7..=12 => "Moderate",
        _ => "High",
    };
    let pa_level = match pa {
        39.. => "High Accomplishment",
        32..=38 => "Moderate",
        _ => "Low Accomplishment",
    };

    let severity = if within_scale(answers, MBI_MAX_ANSWER) {
        format!("EE: {ee_level}, DP: {dp_level}, PA: {pa_level}")
    } else {
        INVALID_SCORE.to_string()
    };

    QuestionnaireScore {
        score: total,
        severity,
        subscales: Some(BTreeMap::from([
            ("EE".to_string(), ee),
            ("DP".to_string(), dp),
            ("PA".to_string(), pa),
        ])),
    }
}

const MDQ_SYMPTOM_ITEMS: usize = 13;
const MDQ_SYMPTOM_THRESHOLD: usize = 7;
const MDQ_CLUSTERING_ITEM: usize = 13;
const MDQ_IMPAIRMENT_ITEM: usize = 14;

fn mdq_screen(answers: &[i32], levels: &[SeverityLevel]) -> QuestionnaireScore {
    let symptoms = answers
        .iter()
        .take(MDQ_SYMPTOM_ITEMS)
        .filter(|&&a| a == 1)
        .count();
    let clustering = answers.get(MDQ_CLUSTERING_ITEM) == Some(&1);
    let impairment = answers.get(MDQ_IMPAIRMENT_ITEM).is_some_and(|&a| a >= 2);

    let positive = symptoms >= MDQ_SYMPTOM_THRESHOLD && clustering && impairment;
    let total = i32::from(positive);

    QuestionnaireScore {
        score: total,
        severity: classify(total, levels),
        subscales: None,
    }
}

/// Identity weights for answers `0..=max`.
pub(crate) fn linear_mapping(max: i32) -> ScoreMapping {
    (0..=max).map(|v| (v, v)).collect()
}

pub(crate) fn levels(table: &[(&str, i32, i32)]) -> Vec<SeverityLevel> {
    table
        .iter()
        .map(|&(label, low, high)| SeverityLevel {
            label: label.to_string(),
            range: [low, high],
        })
        .collect()
}
