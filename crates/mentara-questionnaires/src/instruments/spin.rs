use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// SPIN: Social Phobia Inventory. Last block of the answer vector.
pub struct Spin;

impl Questionnaire for Spin {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::SocialAnxiety
    }

    fn short_name(&self) -> &str {
        "SPIN"
    }

    fn description(&self) -> &str {
        "Social Phobia Inventory"
    }

    fn offset(&self) -> usize {
        184
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Frequency,
                &[
                    "Afraid of people in authority",
                    "Bothered by blushing in front of people",
                    "Parties and social events scare you",
                    "Avoid talking to people you don't know",
                    "Being criticized scares you a lot",
                    "Avoid doing things or speaking to people for fear of embarrassment",
                    "Sweating in front of people causes distress",
                    "Avoid going to parties",
                    "Avoid activities in which you are the center of attention",
                    "Talking to strangers scares you",
                    "Avoid having to give speeches",
                    "Would do anything to avoid being criticized",
                    "Heart palpitations bother you when around people",
                    "Afraid of doing things when people might be watching",
                    "Being embarrassed or looking stupid is your worst fear",
                    "Avoid speaking to anyone in authority",
                    "Trembling or shaking in front of others is distressing",
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
                ("Below Threshold", 0, 33),
                ("Social anxiety specific (Potential Social Phobia)", 34, 42),
                ("Generalized Social Interaction Anxiety", 43, 80),
            ]),
        });
        &SCORING
    }
}
