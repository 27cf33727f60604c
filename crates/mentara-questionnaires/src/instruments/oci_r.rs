use std::sync::LazyLock;

use crate::id::QuestionnaireId;
use crate::questions::{items, Question, ResponseScale};
use crate::scoring::{levels, linear_mapping, ScoringRule, ScoringTable};
use crate::Questionnaire;

/// OCI-R: Obsessive-Compulsive Inventory, Revised.
/// 18 items, 0–72. Clinical cutoff at 21.
pub struct OciR;

impl Questionnaire for OciR {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Ocd
    }

    fn short_name(&self) -> &str {
        "OCI-R"
    }

    fn description(&self) -> &str {
        "Obsessive-Compulsive Inventory-Revised"
    }

    fn offset(&self) -> usize {
        120
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            items(
                ResponseScale::Frequency,
                &[
                    "Unpleasant thoughts come into your mind against your will",
                    "Check things more often than necessary",
                    "Get upset if objects are not arranged properly",
                    "Feel compelled to count while doing things",
                    "Difficulty making decisions",
                    "Feel you have to wash or clean excessively",
                    "Check that you did not harm anyone",
                    "Worried that things are not in the right place",
                    "Feel need to repeat certain numbers",
                    "Difficulty finishing things because can't get them right",
                    "Bothered by contamination worries",
                    "Check that you did not make a mistake",
                    "Concerned about orderliness or symmetry",
                    "Feel need to do things over and over",
                    "Need to collect certain things",
                    "Wash yourself or household items excessively",
                    "Repeatedly check doors, windows, drawers, etc.",
                    "Get upset if others change the way you arrange things",
                ],
            )
        });
        &QUESTIONS
    }

    fn scoring(&self) -> &ScoringTable {
        static SCORING: LazyLock<ScoringTable> = LazyLock::new(|| ScoringTable {
            rule: ScoringRule::Sum,
            score_mapping: linear_mapping(4),
            severity_levels: levels(&[("Below Threshold", 0, 20), ("Clinical Range", 21, 72)]),
        });
        &SCORING
    }
}
