use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// GAD-7: Generalized Anxiety Disorder 7-item scale.
/// Items rated 0–3 over the last two weeks. Total 0–21.
pub struct Gad7;

impl Questionnaire for Gad7 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Anxiety
    }

    fn short_name(&self) -> &str {
        "GAD-7"
    }

    fn description(&self) -> &str {
        "Generalized Anxiety Disorder 7-item scale"
    }

    fn offset(&self) -> usize {
        69
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Days,
                &[
                    "Feeling nervous, anxious, or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it's hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid as if something awful might happen",
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
                ("Minimal", 0, 4),
                ("Mild", 5, 9),
                ("Moderate", 10, 14),
                ("Severe", 15, 21),
            ]),
        });
        &SCORING
    }
}
