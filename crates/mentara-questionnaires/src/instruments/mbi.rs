use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// MBI: Maslach Burnout Inventory.
///
/// 22 items split into Emotional Exhaustion (1–7), Depersonalization (8–14)
/// and Personal Accomplishment (15–22). Each subscale is banded on its own;
/// the severity table only carries the overall scale label.
pub struct Mbi;

impl Questionnaire for Mbi {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Burnout
    }

    fn short_name(&self) -> &str {
        "MBI"
    }

    fn description(&self) -> &str {
        "Maslach Burnout Inventory"
    }

    fn offset(&self) -> usize {
        83
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Frequency,
                &[
                    "Feel emotionally drained from your work",
                    "Feel used up at the end of the workday",
                    "Feel fatigued when you get up in the morning",
                    "Working with people all day is strain for you",
                    "Feel burned out from your work",
                    "Feel frustrated by your job",
                    "Feel you're working too hard on your job",
                    "Working directly with people puts too much stress on you",
                    "Feel like you're at the end of your rope",
                    "Deal effectively with problems of others",
                    "Feel you're positively influencing others' lives",
                    "Can easily understand how others feel",
                    "Deal effectively with others' problems",
                    "Feel energized by working closely with others",
                    "Accomplished many worthwhile things in this job",
                    "Feel exhilarated after working closely with others",
                    "Created a relaxed atmosphere with others",
                    "Treat some people as if they were impersonal objects",
                    "Become more callous toward people",
                    "Worry that this job is hardening you emotionally",
                    "Don't really care what happens to some people",
                    "Feel others blame you for some of their problems",
                ],
            )
        });
        &QUESTIONS
    }

    fn scoring(&self) -> &ScoringTable {
        static SCORING: LazyLock<ScoringTable> = LazyLock::new(|| ScoringTable {
            rule: ScoringRule::MbiSubscales,
            score_mapping: linear_mapping(6),
            severity_levels: levels(&[("MBI Scale", 0, 100)]),
        });
        &SCORING
    }
}
