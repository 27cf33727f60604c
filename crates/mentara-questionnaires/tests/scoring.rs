use std::collections::BTreeMap;

use mentara_questionnaires::scoring::{
    classify, score, ScoringRule, ScoringTable, SeverityLevel, ASRS_SCREEN_NEGATIVE,
    ASRS_SCREEN_POSITIVE, INVALID_SCORE,
};
use mentara_questionnaires::{get_questionnaire, QuestionnaireId, ScreeningConfig};

fn low_high() -> Vec<SeverityLevel> {
    vec![
        SeverityLevel {
            label: "Low".to_string(),
            range: [0, 9],
        },
        SeverityLevel {
            label: "High".to_string(),
            range: [10, 20],
        },
    ]
}

#[test]
fn score_sums_mapped_weights() {
    let mapping = BTreeMap::from([(0, 0), (1, 1)]);
    assert_eq!(score(&[1, 1, 0], &mapping), 2);
}

#[test]
fn score_defaults_unknown_values_to_zero() {
    assert_eq!(score(&[5], &BTreeMap::new()), 0);
    assert_eq!(score(&[-1, 3], &BTreeMap::from([(3, 7)])), 7);
}

#[test]
fn score_of_empty_answers_is_zero() {
    assert_eq!(score(&[], &BTreeMap::from([(1, 1)])), 0);
}

#[test]
fn classify_uses_inclusive_ranges() {
    let levels = low_high();
    assert_eq!(classify(10, &levels), "High");
    assert_eq!(classify(9, &levels), "Low");
    assert_eq!(classify(0, &levels), "Low");
    assert_eq!(classify(20, &levels), "High");
}

#[test]
fn classify_out_of_range_returns_sentinel() {
    let levels = low_high();
    assert_eq!(classify(25, &levels), INVALID_SCORE);
    assert_eq!(classify(-1, &levels), INVALID_SCORE);
    assert_eq!(classify(3, &[]), INVALID_SCORE);
}

#[test]
fn classify_first_match_wins_on_overlap() {
    let levels = vec![
        SeverityLevel {
            label: "A".to_string(),
            range: [0, 10],
        },
        SeverityLevel {
            label: "B".to_string(),
            range: [5, 15],
        },
    ];
    assert_eq!(classify(7, &levels), "A");
    assert_eq!(classify(12, &levels), "B");
}

#[test]
fn gad7_moderate() {
    let config = ScreeningConfig::builtin();
    let result = config
        .score_questionnaire(QuestionnaireId::Anxiety, &[1, 2, 3, 0, 1, 2, 3])
        .unwrap();
    assert_eq!(result.score, 12);
    assert_eq!(result.severity, "Moderate");
    assert!(result.subscales.is_none());
}

#[test]
fn unanswered_items_carry_no_weight() {
    let config = ScreeningConfig::builtin();
    let result = config
        .score_questionnaire(QuestionnaireId::Anxiety, &[-1, -1, 3, 3, 3, 3, -1])
        .unwrap();
    assert_eq!(result.score, 12);
}

#[test]
fn asrs_part_a_screen_overrides_total() {
    let asrs = get_questionnaire(QuestionnaireId::Adhd);
    // Part A: 2,2,2,3 shaded; total is low.
    let mut answers = vec![2, 2, 2, 3, 0, 0];
    answers.extend([0; 12]);
    let result = asrs.scoring().evaluate(&answers);
    assert_eq!(result.score, 9);
    assert_eq!(result.severity, ASRS_SCREEN_POSITIVE);
}

#[test]
fn asrs_negative_screen_uses_total_band() {
    let asrs = get_questionnaire(QuestionnaireId::Adhd);
    // Items 3-5 at 2 are not shaded, so only three Part A hits.
    let mut answers = vec![4, 4, 4, 2, 2, 2];
    answers.extend([4; 12]);
    let result = asrs.scoring().evaluate(&answers);
    assert_eq!(result.score, 66);
    assert_eq!(result.severity, "Very High");
}

#[test]
fn asrs_ignores_unanswered_in_total() {
    let asrs = get_questionnaire(QuestionnaireId::Adhd);
    let answers = vec![-1; 18];
    let result = asrs.scoring().evaluate(&answers);
    assert_eq!(result.score, 0);
    assert_eq!(result.severity, "Low");
}

#[test]
fn asrs_falls_back_to_negative_label_outside_bands() {
    let table = ScoringTable {
        rule: ScoringRule::AsrsScreen,
        score_mapping: BTreeMap::new(),
        severity_levels: vec![],
    };
    let result = table.evaluate(&[0; 18]);
    assert_eq!(result.severity, ASRS_SCREEN_NEGATIVE);
}

#[test]
fn asrs_out_of_scale_answers_are_invalid_not_overflowed() {
    let config = ScreeningConfig::builtin();
    let mut answers = vec![i32::MAX, 1];
    answers.extend([0; 16]);
    let result = config
        .score_questionnaire(QuestionnaireId::Adhd, &answers)
        .unwrap();
    assert_eq!(result.score, i32::MAX);
    assert_eq!(result.severity, INVALID_SCORE);
}

#[test]
fn asrs_negative_answers_are_invalid() {
    let asrs = get_questionnaire(QuestionnaireId::Adhd);
    let mut answers = vec![-5];
    answers.extend([0; 17]);
    assert_eq!(asrs.scoring().evaluate(&answers).severity, INVALID_SCORE);
}

#[test]
fn mbi_out_of_scale_answers_are_invalid_not_overflowed() {
    let config = ScreeningConfig::builtin();
    let mut answers = vec![i32::MAX, 1];
    answers.extend([0; 20]);
    let result = config
        .score_questionnaire(QuestionnaireId::Burnout, &answers)
        .unwrap();
    assert_eq!(result.score, i32::MAX);
    assert_eq!(result.severity, INVALID_SCORE);
    assert_eq!(result.subscales.unwrap()["EE"], i32::MAX);
}

#[test]
fn score_saturates_on_huge_weights() {
    let mapping = BTreeMap::from([(1, i32::MAX)]);
    assert_eq!(score(&[1, 1], &mapping), i32::MAX);
}

#[test]
fn mbi_reports_subscales() {
    let mbi = get_questionnaire(QuestionnaireId::Burnout);
    let mut answers = vec![4; 7]; // EE = 28
    answers.extend([1; 7]); // DP = 7
    answers.extend([5; 8]); // PA = 40
    let result = mbi.scoring().evaluate(&answers);

    assert_eq!(result.score, 75);
    assert_eq!(result.severity, "EE: High, DP: Moderate, PA: High Accomplishment");
    let subscales = result.subscales.unwrap();
    assert_eq!(subscales["EE"], 28);
    assert_eq!(subscales["DP"], 7);
    assert_eq!(subscales["PA"], 40);
}

#[test]
fn mbi_low_everything() {
    let mbi = get_questionnaire(QuestionnaireId::Burnout);
    let result = mbi.scoring().evaluate(&[-1; 22]);
    assert_eq!(result.score, 0);
    assert_eq!(result.severity, "EE: Low, DP: Low, PA: Low Accomplishment");
}

#[test]
fn mdq_positive_requires_all_three_criteria() {
    let mdq = get_questionnaire(QuestionnaireId::Bipolar);

    let mut answers = vec![1; 7];
    answers.extend([0; 6]);
    answers.extend([1, 2]);
    let positive = mdq.scoring().evaluate(&answers);
    assert_eq!(positive.score, 1);
    assert_eq!(
        positive.severity,
        "Positive Bipolar Screen (All 3 Criteria Met)"
    );

    // No clustering.
    answers[13] = 0;
    let negative = mdq.scoring().evaluate(&answers);
    assert_eq!(negative.score, 0);
    assert_eq!(negative.severity, "Negative Screen");

    // Clustering but only minor impairment.
    answers[13] = 1;
    answers[14] = 1;
    assert_eq!(mdq.scoring().evaluate(&answers).score, 0);

    // Six symptoms is not enough.
    answers[14] = 3;
    answers[0] = 0;
    assert_eq!(mdq.scoring().evaluate(&answers).score, 0);
}
