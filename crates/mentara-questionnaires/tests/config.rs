use mentara_questionnaires::config::{score_values, severity_levels};
use mentara_questionnaires::error::QuestionnaireError;
use mentara_questionnaires::scoring::SeverityLevel;
use mentara_questionnaires::{FlatAnswerVector, QuestionnaireId, ScreeningConfig, VECTOR_LEN};

#[test]
fn builtin_config_is_valid() {
    let config = ScreeningConfig::builtin();
    config.validate().unwrap();
    assert_eq!(config.layout.entries.len(), QuestionnaireId::ALL.len());
    assert_eq!(config.scoring.len(), QuestionnaireId::ALL.len());
}

#[test]
fn builtin_config_survives_json() {
    let config = ScreeningConfig::builtin();
    let json = serde_json::to_string(&config).unwrap();
    let parsed = ScreeningConfig::from_json(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn config_without_scoring_for_a_layout_entry_is_rejected() {
    let mut config = ScreeningConfig::builtin();
    config.scoring.remove(&QuestionnaireId::Panic);
    let json = serde_json::to_string(&config).unwrap();
    let err = ScreeningConfig::from_json(&json).unwrap_err();
    assert!(matches!(
        err,
        QuestionnaireError::MissingScoring(QuestionnaireId::Panic)
    ));
}

#[test]
fn config_with_a_different_vector_length_is_rejected() {
    let mut config = ScreeningConfig::builtin();
    config.layout.vector_len = 500;
    let json = serde_json::to_string(&config).unwrap();
    let err = ScreeningConfig::from_json(&json).unwrap_err();
    assert!(matches!(err, QuestionnaireError::InvalidLayout(_)));
    assert!(err.to_string().contains("500"));
}

#[test]
fn config_changing_a_question_count_is_rejected() {
    let mut config = ScreeningConfig::builtin();
    config
        .layout
        .entries
        .get_mut(&QuestionnaireId::SocialAnxiety)
        .unwrap()
        .question_count = 16;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, QuestionnaireError::InvalidLayout(_)));
}

#[test]
fn config_moving_offsets_is_accepted() {
    let mut config = ScreeningConfig::builtin();
    // Swap Panic (158, 7) and Anxiety (69, 7); both keep their lengths.
    config.layout.entries.get_mut(&QuestionnaireId::Panic).unwrap().offset = 69;
    config.layout.entries.get_mut(&QuestionnaireId::Anxiety).unwrap().offset = 158;
    config.validate().unwrap();

    let vector = config
        .map_answers(&[QuestionnaireId::Anxiety], &[vec![3; 7]])
        .unwrap();
    assert_eq!(&vector.as_slice()[158..165], &[3; 7]);
    assert_eq!(VECTOR_LEN, vector.len());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = ScreeningConfig::from_json("{ \"layout\": 3 }").unwrap_err();
    assert!(matches!(err, QuestionnaireError::Config(_)));
}

#[test]
fn overlapping_severity_ranges_are_accepted() {
    let mut config = ScreeningConfig::builtin();
    let table = config.scoring.get_mut(&QuestionnaireId::Anxiety).unwrap();
    table.severity_levels.push(SeverityLevel {
        label: "Shadowed".to_string(),
        range: [0, 21],
    });
    config.validate().unwrap();

    let result = config
        .score_questionnaire(QuestionnaireId::Anxiety, &[0; 7])
        .unwrap();
    assert_eq!(result.severity, "Minimal");
}

#[test]
fn score_vector_only_covers_submitted_questionnaires() {
    let config = ScreeningConfig::builtin();
    let vector = config
        .map_answers(
            &[QuestionnaireId::Anxiety, QuestionnaireId::Stress],
            &[vec![3; 7], vec![1; 10]],
        )
        .unwrap();

    let scores = config
        .score_vector(&vector, &[QuestionnaireId::Anxiety, QuestionnaireId::Stress])
        .unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[&QuestionnaireId::Anxiety].score, 21);
    assert_eq!(scores[&QuestionnaireId::Anxiety].severity, "Severe");
    assert_eq!(scores[&QuestionnaireId::Stress].score, 10);
    assert_eq!(scores[&QuestionnaireId::Stress].severity, "Low Stress");

    let levels = severity_levels(&scores);
    assert_eq!(levels[&QuestionnaireId::Anxiety], "Severe");
    let values = score_values(&scores);
    assert_eq!(values[&QuestionnaireId::Stress], 10);
}

#[test]
fn score_all_covers_every_questionnaire() {
    let config = ScreeningConfig::builtin();
    let scores = config
        .score_all(&FlatAnswerVector::zeroed(VECTOR_LEN))
        .unwrap();
    assert_eq!(scores.len(), QuestionnaireId::ALL.len());
    assert_eq!(scores[&QuestionnaireId::DrugUse].severity, "No Problems");
}

#[test]
fn score_vector_rejects_wrong_length() {
    let config = ScreeningConfig::builtin();
    let err = config
        .score_all(&FlatAnswerVector::zeroed(12))
        .unwrap_err();
    assert!(matches!(
        err,
        QuestionnaireError::VectorLength {
            expected: 201,
            actual: 12
        }
    ));
}
