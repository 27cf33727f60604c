use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// DAST-10: Drug Abuse Screening Test. Ten yes/no items, one point per yes.
pub struct Dast10;

impl Questionnaire for Dast10 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::DrugUse
    }

    fn short_name(&self) -> &str {
        "DAST-10"
    }

    fn description(&self) -> &str {
        "Drug Abuse Screening Test"
    }

    fn offset(&self) -> usize {
        59
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::YesNo,
                &[
                    "Used drugs other than for medical reasons?",
                    "Abused prescription drugs?",
                    "Used more than one drug at a time?",
                    "Can you get through the week without using drugs?",
                    "Are you always able to stop using drugs when you want to?",
                    "Had blackouts or flashbacks as a result of drug use?",
                    "Ever felt bad or guilty about your drug use?",
                    "Does your spouse/partner complain about your drug use?",
                    "Neglected your family because of drug use?",
                    "Engaged in illegal activities to obtain drugs?",
                ],
            )
        });
        &QUESTIONS
    }

    fn scoring(&self) -> &ScoringTable {
        static SCORING: LazyLock<ScoringTable> = LazyLock::new(|| ScoringTable {
            rule: ScoringRule::Sum,
            score_mapping: linear_mapping(1),
            severity_levels: levels(&[
                ("No Problems", 0, 0),
                ("Low Level", 1, 2),
                ("Moderate Level", 3, 5),
                ("Substantial Level", 6, 8),
                ("Severe Level", 9, 10),
            ]),
        });
        &SCORING
    }
}
