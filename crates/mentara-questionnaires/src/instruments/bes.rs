use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// BES: Binge Eating Scale.
/// 16 items. Scores above 26 indicate severe binge eating.
pub struct Bes;

impl Questionnaire for Bes {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::BingeEating
    }

    fn short_name(&self) -> &str {
        "BES"
    }

    fn description(&self) -> &str {
        "Binge Eating Scale for eating disorder symptoms"
    }

    fn offset(&self) -> usize {
        43
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Frequency,
                &[
                    "Eat large amounts of food when not physically hungry",
                    "Eat much more rapidly than normal during binges",
                    "Eat until feeling uncomfortably full",
                    "Eat alone because embarrassed by how much eating",
                    "Feel disgusted, depressed, or guilty after overeating",
                    "Feel distressed about binge eating",
                    "Preoccupied with thoughts of food",
                    "Try to diet or restrict food to control weight",
                    "Feel out of control when eating",
                    "Eat to escape worries or troubles",
                    "Think about body shape and weight throughout the day",
                    "Feel that eating is the only pleasure in life",
                    "Hide food or eating from others",
                    "Feel afraid of not being able to stop eating",
                    "Feel that life is dominated by conflict about eating",
                    "Use vomiting, laxatives, or excessive exercise to control weight",
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
                ("Minimal/No Binge Eating", 0, 17),
                ("Mild to moderate binge eating", 18, 26),
                ("Severe binge eating", 27, 46),
            ]),
        });
        &SCORING
    }
}
