use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// PHQ-9: Patient Health Questionnaire, depression module.
///
/// Stored separately from the PHQ-15 block as "Depression Secondary" so both
/// can be administered in the same session. Items rated 0–3, total 0–27.
pub struct Phq9;

impl Questionnaire for Phq9 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::DepressionSecondary
    }

    fn short_name(&self) -> &str {
        "PHQ-9"
    }

    fn description(&self) -> &str {
        "Patient Health Questionnaire assessing depressive symptoms"
    }

    fn offset(&self) -> usize {
        165
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Days,
                &[
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed, or hopeless",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself or that you are a failure",
                    "Trouble concentrating on things like reading or watching TV",
                    "Moving or speaking slowly, or being fidgety or restless",
                    "Thoughts that you would be better off dead or hurting yourself",
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
                ("Moderately Severe", 15, 19),
                ("Severe", 20, 27),
            ]),
        });
        &SCORING
    }
}
