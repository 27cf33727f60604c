use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// AUDIT: Alcohol Use Disorders Identification Test. 10 items, 0–40.
pub struct Audit;

impl Questionnaire for Audit {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::AlcoholUse
    }

    fn short_name(&self) -> &str {
        "AUDIT"
    }

    fn description(&self) -> &str {
        "Alcohol Use Disorders Identification Test"
    }

    fn offset(&self) -> usize {
        33
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Frequency,
                &[
                    "How often do you have a drink containing alcohol?",
                    "How many standard drinks do you have on a typical day?",
                    "How often do you have six or more drinks on one occasion?",
                    "Unable to stop drinking once you started?",
                    "Failed to do what was normally expected due to drinking?",
                    "Needed a drink in the morning to get yourself going?",
                    "Had a feeling of guilt or remorse after drinking?",
                    "Unable to remember what happened the night before?",
                    "Have you or someone else been injured as a result of drinking?",
                    "Has someone suggested you cut down on drinking?",
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
                ("Low Risk", 0, 7),
                ("Hazardous", 8, 15),
                ("Harmful", 16, 19),
                ("Dependent", 20, 40),
            ]),
        });
        &SCORING
    }
}
