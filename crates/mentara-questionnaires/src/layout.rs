use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::QuestionnaireError;
use crate::id::QuestionnaireId;

/// Length of the flat answer vector stored for every pre-assessment.
pub const VECTOR_LEN: usize = 201;

/// A questionnaire's reserved slice of the flat answer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LayoutEntry {
    pub offset: usize,
    pub question_count: usize,
}

impl LayoutEntry {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.question_count
    }
}

/// Offset table for the flat answer vector.
///
/// Passed explicitly to the mapper so that alternate layouts can be tested
/// without touching the built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixLayout {
    pub vector_len: usize,
    pub entries: BTreeMap<QuestionnaireId, LayoutEntry>,
}

impl MatrixLayout {
    /// The layout defined by the built-in questionnaire catalog.
    pub fn standard() -> Self {
        let entries = crate::all_questionnaires()
            .iter()
            .map(|q| (q.id(), q.layout_entry()))
            .collect();
        Self {
            vector_len: VECTOR_LEN,
            entries,
        }
    }

    pub fn entry(&self, id: QuestionnaireId) -> Result<&LayoutEntry, QuestionnaireError> {
        self.entries
            .get(&id)
            .ok_or_else(|| QuestionnaireError::UnknownQuestionnaire(id.to_string()))
    }

    pub fn range(&self, id: QuestionnaireId) -> Result<Range<usize>, QuestionnaireError> {
        Ok(self.entry(id)?.range())
    }

    /// Check that every range fits inside the vector and no two ranges
    /// share a position.
    pub fn validate(&self) -> Result<(), QuestionnaireError> {
        let mut ranges: Vec<(QuestionnaireId, Range<usize>)> = self
            .entries
            .iter()
            .map(|(id, entry)| (*id, entry.range()))
            .filter(|(_, range)| !range.is_empty())
            .collect();
        ranges.sort_by_key(|(_, range)| (range.start, range.end));

        for (id, range) in &ranges {
            if range.end > self.vector_len {
                return Err(QuestionnaireError::InvalidLayout(format!(
                    "'{id}' spans [{}, {}) past the vector length {}",
                    range.start, range.end, self.vector_len
                )));
            }
        }

        for pair in ranges.windows(2) {
            let (a_id, a) = &pair[0];
            let (b_id, b) = &pair[1];
            if a.end > b.start {
                return Err(QuestionnaireError::InvalidLayout(format!(
                    "'{a_id}' [{}, {}) overlaps '{b_id}' [{}, {})",
                    a.start, a.end, b.start, b.end
                )));
            }
        }

        Ok(())
    }
}
