use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// MDQ: Mood Disorder Questionnaire.
/// 13 yes/no symptom items, a clustering item and an impairment rating.
/// Scored 1 (positive screen) or 0.
pub struct Mdq;

impl Questionnaire for Mdq {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Bipolar
    }

    fn short_name(&self) -> &str {
        "MDQ"
    }

    fn description(&self) -> &str {
        "Mood Disorder Questionnaire for bipolar symptoms"
    }

    fn offset(&self) -> usize {
        105
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            let mut questions = items(
                ResponseScale::YesNo,
                &[
                    "Feel so good or hyper that others thought you were not your normal self?",
                    "So irritable that you shouted at people or started fights?",
                    "Feel much more self-confident than usual?",
                    "Get much less sleep than usual and not miss it?",
                    "Much more talkative or spoke faster than usual?",
                    "Thoughts raced through your head?",
                    "So easily distracted that any interruption could derail you?",
                    "Much more energy than usual?",
                    "Much more active or did many more things than usual?",
                    "Much more social or outgoing than usual?",
                    "Much more interested in sex than usual?",
                    "Did things that were unusual or that others might think risky?",
                    "Spending money got you or your family in trouble?",
                    "Have several of these symptoms happened at the same time?",
                ],
            );
            questions.extend(items(
                ResponseScale::Frequency,
                &["How much of a problem did any of these cause you?"],
            ));
            questions
        });
        &QUESTIONS
    }

    fn scoring(&self) -> &ScoringTable {
        static SCORING: LazyLock<ScoringTable> = LazyLock::new(|| ScoringTable {
            rule: ScoringRule::MdqScreen,
            score_mapping: linear_mapping(1),
            severity_levels: levels(&[
                ("Negative Screen", 0, 0),
                ("Positive Bipolar Screen (All 3 Criteria Met)", 1, 1),
            ]),
        });
        &SCORING
    }
}
