use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// PDSS: Panic Disorder Severity Scale.
pub struct Pdss;

impl Questionnaire for Pdss {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Panic
    }

    fn short_name(&self) -> &str {
        "PDSS"
    }

    fn description(&self) -> &str {
        "Panic Disorder Severity Scale"
    }

    fn offset(&self) -> usize {
        158
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Frequency,
                &[
                    "Experienced panic attacks or sudden rushes of intense fear or discomfort?",
                    "How distressing were the panic attacks?",
                    "How afraid were you of having another panic attack?",
                    "Avoided situations or changed your lifestyle because of panic?",
                    "Avoided physical sensations like rapid heartbeat because of panic?",
                    "How much did panic attacks interfere with work or responsibilities?",
                    "How much did panic attacks interfere with social life?",
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
                ("Minimal", 0, 7),
                ("Mild", 8, 10),
                ("Moderate", 11, 15),
                ("Severe", 16, 28),
            ]),
        });
        &SCORING
    }
}
