use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// PCL-5: PTSD Checklist for DSM-5. 20 items, 0–80; 33+ is probable PTSD.
pub struct Pcl5;

impl Questionnaire for Pcl5 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Ptsd
    }

    fn short_name(&self) -> &str {
        "PCL-5"
    }

    fn description(&self) -> &str {
        "PTSD Checklist for DSM-5"
    }

    fn offset(&self) -> usize {
        138
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Days,
                &[
                    "Repeated, disturbing memories, thoughts, or images of stressful experience?",
                    "Repeated, disturbing dreams of stressful experience?",
                    "Suddenly feeling or acting as if stressful experience were happening again?",
                    "Feeling very upset when reminded of stressful experience?",
                    "Physical reactions when reminded of stressful experience?",
                    "Avoid thinking or talking about stressful experience?",
                    "Avoid activities or situations that remind you of experience?",
                    "Trouble remembering important parts of stressful experience?",
                    "Loss of interest in activities you used to enjoy?",
                    "Feeling distant or cut off from other people?",
                    "Feeling emotionally numb or unable to have loving feelings?",
                    "Feeling as if your future will be cut short?",
                    "Trouble falling or staying asleep?",
                    "Feeling irritable or having angry outbursts?",
                    "Having difficulty concentrating?",
                    "Being \"super alert\" or watchful or on guard?",
                    "Feeling jumpy or easily startled?",
                    "Being reckless or self-destructive?",
                    "Feeling guilty or blaming yourself?",
                    "Feeling ashamed or having negative beliefs about yourself?",
                ],
            )
        });
        &QUESTIONS
    }

    fn scoring(&self) -> &ScoringTable {
        static SCORING: LazyLock<ScoringTable> = LazyLock::new(|| ScoringTable {
            rule: ScoringRule::Sum,
            score_mapping: linear_mapping(4),
            severity_levels: levels(&[("Below Threshold", 0, 32), ("Probable PTSD", 33, 80)]),
        });
        &SCORING
    }
}
