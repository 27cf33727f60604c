use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::QuestionnaireError;
use crate::id::QuestionnaireId;
use crate::layout::{MatrixLayout, VECTOR_LEN};
use crate::matrix::{map_answers_to_vector, FlatAnswerVector};
use crate::scoring::{QuestionnaireScore, ScoringTable};

pub type QuestionnaireScores = BTreeMap<QuestionnaireId, QuestionnaireScore>;

/// Everything needed to map and score a pre-assessment: the vector layout
/// plus a scoring table per questionnaire.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    pub layout: MatrixLayout,
    pub scoring: BTreeMap<QuestionnaireId, ScoringTable>,
}

impl ScreeningConfig {
    /// Layout and scoring tables from the built-in questionnaire catalog.
    pub fn builtin() -> Self {
        let scoring = crate::all_questionnaires()
            .iter()
            .map(|q| (q.id(), q.scoring().clone()))
            .collect();
        Self {
            layout: MatrixLayout::standard(),
            scoring,
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, QuestionnaireError> {
        let config: ScreeningConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a broken layout or a questionnaire without scoring. Overlapping
    /// severity ranges are only logged, since classification stays
    /// well-defined (first match wins).
    ///
    /// Overrides may move offsets and change scoring. The vector length and
    /// each questionnaire's question count are fixed by the catalog.
    pub fn validate(&self) -> Result<(), QuestionnaireError> {
        if self.layout.vector_len != VECTOR_LEN {
            return Err(QuestionnaireError::InvalidLayout(format!(
                "vector length {} differs from the fixed length {VECTOR_LEN}",
                self.layout.vector_len
            )));
        }
        self.layout.validate()?;

        for (id, entry) in &self.layout.entries {
            let expected = crate::get_questionnaire(*id).question_count();
            if entry.question_count != expected {
                return Err(QuestionnaireError::InvalidLayout(format!(
                    "{id} has {} questions in the layout, expected {expected}",
                    entry.question_count
                )));
            }
            if !self.scoring.contains_key(id) {
                return Err(QuestionnaireError::MissingScoring(*id));
            }
        }

        for (id, table) in &self.scoring {
            for (i, a) in table.severity_levels.iter().enumerate() {
                for b in &table.severity_levels[i + 1..] {
                    if a.overlaps(b) {
                        tracing::warn!(
                            questionnaire = %id,
                            first = %a.label,
                            second = %b.label,
                            "overlapping severity ranges; first match wins"
                        );
                    }
                }
            }
        }

        Ok(())
    }

    pub fn map_answers<R: AsRef<[i32]>>(
        &self,
        selected: &[QuestionnaireId],
        answers: &[R],
    ) -> Result<FlatAnswerVector, QuestionnaireError> {
        map_answers_to_vector(&self.layout, selected, answers)
    }

    pub fn scoring_table(&self, id: QuestionnaireId) -> Result<&ScoringTable, QuestionnaireError> {
        self.scoring
            .get(&id)
            .ok_or(QuestionnaireError::MissingScoring(id))
    }

    pub fn score_questionnaire(
        &self,
        id: QuestionnaireId,
        answers: &[i32],
    ) -> Result<QuestionnaireScore, QuestionnaireError> {
        Ok(self.scoring_table(id)?.evaluate(answers))
    }

    /// Score only the questionnaires the client submitted. Every other range
    /// in the vector is unanswered, not a run of zero responses.
    pub fn score_vector(
        &self,
        vector: &FlatAnswerVector,
        submitted: &[QuestionnaireId],
    ) -> Result<QuestionnaireScores, QuestionnaireError> {
        self.check_len(vector)?;
        submitted
            .iter()
            .map(|&id| -> Result<_, QuestionnaireError> {
                let answers = vector.slice(&self.layout, id)?;
                Ok((id, self.score_questionnaire(id, answers)?))
            })
            .collect()
    }

    /// Score every questionnaire in the layout, as the portal does for
    /// stored vectors that carry no record of which instruments were shown.
    pub fn score_all(
        &self,
        vector: &FlatAnswerVector,
    ) -> Result<QuestionnaireScores, QuestionnaireError> {
        let ids: Vec<QuestionnaireId> = self.layout.entries.keys().copied().collect();
        self.score_vector(vector, &ids)
    }

    fn check_len(&self, vector: &FlatAnswerVector) -> Result<(), QuestionnaireError> {
        if vector.len() != self.layout.vector_len {
            return Err(QuestionnaireError::VectorLength {
                expected: self.layout.vector_len,
                actual: vector.len(),
            });
        }
        Ok(())
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn severity_levels(scores: &QuestionnaireScores) -> BTreeMap<QuestionnaireId, String> {
    scores
        .iter()
        .map(|(id, s)| (*id, s.severity.clone()))
        .collect()
}

pub fn score_values(scores: &QuestionnaireScores) -> BTreeMap<QuestionnaireId, i32> {
    scores.iter().map(|(id, s)| (*id, s.score)).collect()
}
