use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// PHQ-15: Patient Health Questionnaire, depression and somatic symptoms.
/// 15 items rated 0–3. First block of the answer vector.
pub struct Phq15;

impl Questionnaire for Phq15 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Depression
    }

    fn short_name(&self) -> &str {
        "PHQ-15"
    }

    fn description(&self) -> &str {
        "Patient Health Questionnaire assessing depressive and somatic symptoms"
    }

    fn offset(&self) -> usize {
        0
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Days,
                &[
                    "Feeling down, depressed, or hopeless",
                    "Little interest or pleasure in doing things",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself or that you are a failure",
                    "Trouble concentrating on things",
                    "Moving or speaking slowly, or being fidgety/restless",
                    "Thoughts that you would be better off dead or hurting yourself",
                    "Stomach pain or digestive problems",
                    "Back pain",
                    "Pain in arms, legs, or joints",
                    "Headaches",
                    "Chest pain or shortness of breath",
                    "Dizziness or feeling faint",
                ],
            )
        });
        &QUESTIONS
    }

    fn scoring(&self) -> &ScoringTable {
        static SCORING: LazyLock<ScoringTable> = LazyLock::new(|| ScoringTable {
            rule: ScoringRule::Sum,
            score_mapping: linear_mapping(3),
            severity_levels: levels(&[
                ("None", 0, 0),
                ("Mild-Moderate", 1, 15),
                ("Moderate-Severe", 16, 25),
                ("Very Severe", 26, 120),
            ]),
        });
        &SCORING
    }
}
