use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{
    levels, linear_mapping, ScoringRule, ScoringTable, ASRS_SCREEN_NEGATIVE, ASRS_SCREEN_POSITIVE,
};
use crate::Questionnaire;

/// ASRS v1.1: Adult ADHD Self-Report Scale.
///
/// 18 items rated 0–4, raw total 0–72. Items 1–6 form Part A; four or more
/// answers in the shaded boxes is a positive screen regardless of the total.
/// The two sentinel bands at 100 and 101 exist so the screen labels appear in
/// the severity table alongside the total-score bands.
pub struct Asrs;

impl Questionnaire for Asrs {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Adhd
    }

    fn short_name(&self) -> &str {
        "ASRS"
    }

    fn description(&self) -> &str {
        "Adult ADHD Self-Report Scale for attention deficit and hyperactivity symptoms"
    }

    fn offset(&self) -> usize {
        15
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Frequency,
                &[
                    "Trouble wrapping up final details of a project",
                    "Difficulty getting things in order",
                    "Problems remembering appointments or obligations",
                    "Avoid or delay getting started on tasks requiring concentration",
                    "Fidget or squirm when sitting for long time",
                    "Feel overly active or compelled to do things",
                    "Make careless mistakes when working on tasks",
                    "Difficulty keeping attention during tasks or activities",
                    "Difficulty concentrating on conversations",
                    "Misplace or have difficulty finding things",
                    "Distracted by activity or noise around you",
                    "Leave your seat in meetings or situations",
                    "Feel restless or fidgety",
                    "Difficulty unwinding and relaxing",
                    "Talk too much in social situations",
                    "Finish other people's sentences",
                    "Difficulty waiting your turn",
                    "Interrupt others when they are busy",
                ],
            )
        });
        &QUESTIONS
    }

    fn scoring(&self) -> &ScoringTable {
        static SCORING: LazyLock<ScoringTable> = LazyLock::new(|| ScoringTable {
            rule: ScoringRule::AsrsScreen,
            score_mapping: linear_mapping(4),
            severity_levels: levels(&[
                ("Low", 0, 30),
                ("Mild to Moderate", 31, 39),
                ("High", 40, 49),
                ("Very High", 50, 72),
                (ASRS_SCREEN_POSITIVE, 100, 100),
                (ASRS_SCREEN_NEGATIVE, 101, 101),
            ]),
        });
        &SCORING
    }
}
