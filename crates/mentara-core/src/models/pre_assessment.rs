use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// How the client completed the pre-assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum AssessmentMethod {
    #[default]
    Checklist,
    Chatbot,
}

/// A submitted pre-assessment, as handed to persistence.
///
/// `answer_matrix` is the flat per-question vector and never changes after
/// creation. `questionnaire_scores` is stored opaquely; it can always be
/// recomputed from the matrix and the list of submitted questionnaires.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PreAssessment {
    pub id: Uuid,
    pub client_id: Option<String>,
    pub method: AssessmentMethod,
    pub questionnaires: Vec<String>,
    pub answer_matrix: Vec<i32>,
    pub questionnaire_scores: serde_json::Value,
    pub created_at: jiff::Timestamp,
}

impl PreAssessment {
    pub fn new<S: Serialize>(
        client_id: Option<String>,
        method: AssessmentMethod,
        questionnaires: Vec<String>,
        answer_matrix: Vec<i32>,
        scores: &S,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id: Uuid::new_v4(),
            client_id,
            method,
            questionnaires,
            answer_matrix,
            questionnaire_scores: serde_json::to_value(scores)?,
            created_at: jiff::Timestamp::now(),
        })
    }
}

