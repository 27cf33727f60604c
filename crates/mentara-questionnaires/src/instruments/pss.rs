use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// PSS-10: Perceived Stress Scale. 10 items rated 0–4, total 0–40.
pub struct Pss;

impl Questionnaire for Pss {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Stress
    }

    fn short_name(&self) -> &str {
        "PSS"
    }

    fn description(&self) -> &str {
        "Perceived Stress Scale"
    }

    fn offset(&self) -> usize {
        174
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Frequency,
                &[
                    "Been upset because of something that happened unexpectedly?",
                    "Felt unable to control important things in your life?",
                    "Felt nervous and stressed?",
                    "Felt confident about ability to handle personal problems?",
                    "Felt things were going your way?",
                    "Found that you could not cope with all things to do?",
                    "Been able to control irritations in your life?",
                    "Felt that you were on top of things?",
                    "Been angered because of things outside your control?",
                    "Felt difficulties were piling up so high you could not overcome them?",
                ],
            )
        });
        &QUESTIONS
    }

    fn scoring(&self) -> &ScoringTable {
        static SCORING: LazyLock<ScoringTable> = LazyLock::new(|| ScoringTable {
            rule: ScoringRule::Sum,
            score_mapping: linear_mapping(4),
            severity_levels: levels(&[
                ("Low Stress", 0, 13),
                ("Moderate Stress", 14, 26),
                ("High Stress", 27, 40),
            ]),
        });
        &SCORING
    }
}
