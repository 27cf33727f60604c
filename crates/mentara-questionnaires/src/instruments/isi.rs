use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// ISI: Insomnia Severity Index. 7 items, 0–28.
pub struct Isi;

impl Questionnaire for Isi {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Insomnia
    }

    fn short_name(&self) -> &str {
        "ISI"
    }

    fn description(&self) -> &str {
        "Insomnia Severity Index"
    }

    fn offset(&self) -> usize {
        76
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Frequency,
                &[
                    "Difficulty falling asleep",
                    "Difficulty staying asleep",
                    "Problems waking up too early",
                    "How satisfied are you with your current sleep pattern?",
                    "How noticeable to others is your sleep problem?",
                    "How worried are you about your current sleep problem?",
                    "How much is your sleep problem interfering with daily functioning?",
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
                ("No Insomnia", 0, 7),
                ("Subthreshold Insomnia", 8, 14),
                ("Moderate Insomnia", 15, 21),
                ("Severe Insomnia", 22, 28),
            ]),
        });
        &SCORING
    }
}
