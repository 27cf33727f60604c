use std::collections::BTreeSet;

use serde::Serialize;
use ts_rs::TS;

use crate::error::QuestionnaireError;
use crate::id::QuestionnaireId;
use crate::layout::MatrixLayout;

/// Fixed-length answer vector covering every questionnaire slot.
///
/// Positions outside the questionnaires a client actually submitted are 0,
/// which is indistinguishable from an answered 0. Scoring must be limited
/// to the submitted questionnaires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FlatAnswerVector(Vec<i32>);

impl FlatAnswerVector {
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0; len])
    }

    /// Wrap a stored vector, rejecting any length other than `expected_len`.
    pub fn from_vec(values: Vec<i32>, expected_len: usize) -> Result<Self, QuestionnaireError> {
        if values.len() != expected_len {
            return Err(QuestionnaireError::VectorLength {
                expected: expected_len,
                actual: values.len(),
            });
        }
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.0
    }

    /// Read back the answers stored for `id`.
    pub fn slice(
        &self,
        layout: &MatrixLayout,
        id: QuestionnaireId,
    ) -> Result<&[i32], QuestionnaireError> {
        let range = layout.range(id)?;
        self.0.get(range.clone()).ok_or_else(|| {
            QuestionnaireError::InvalidLayout(format!(
                "'{id}' spans [{}, {}) past the vector length {}",
                range.start,
                range.end,
                self.0.len()
            ))
        })
    }
}

/// Scatter each answer row into its questionnaire's reserved range.
///
/// `selected[i]` names the questionnaire answered by `answers[i]`. The whole
/// input is checked before anything is written, so a malformed submission
/// can never spill into a neighbouring questionnaire's range.
pub fn map_answers_to_vector<R: AsRef<[i32]>>(
    layout: &MatrixLayout,
    selected: &[QuestionnaireId],
    answers: &[R],
) -> Result<FlatAnswerVector, QuestionnaireError> {
    if selected.len() != answers.len() {
        return Err(QuestionnaireError::ShapeMismatch {
            index: None,
            expected: selected.len(),
            actual: answers.len(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut rows = Vec::with_capacity(selected.len());
    for (index, (&id, row)) in selected.iter().zip(answers).enumerate() {
        if !seen.insert(id) {
            return Err(QuestionnaireError::DuplicateQuestionnaire(id));
        }

        let range = layout.range(id)?;
        let row = row.as_ref();
        if row.len() != range.len() {
            return Err(QuestionnaireError::ShapeMismatch {
                index: Some(index),
                expected: range.len(),
                actual: row.len(),
            });
        }
        if range.end > layout.vector_len {
            return Err(QuestionnaireError::InvalidLayout(format!(
                "'{id}' spans [{}, {}) past the vector length {}",
                range.start, range.end, layout.vector_len
            )));
        }
        rows.push((range, row));
    }

    let mut vector = FlatAnswerVector::zeroed(layout.vector_len);
    for (range, row) in rows {
        vector.0[range].copy_from_slice(row);
    }

    tracing::debug!(questionnaires = selected.len(), "mapped answer matrix");
    Ok(vector)
}
