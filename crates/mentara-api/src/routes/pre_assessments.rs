use std::collections::BTreeMap;
use std::str::FromStr;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use mentara_core::models::pre_assessment::{AssessmentMethod, PreAssessment};
use mentara_questionnaires::config::{score_values, severity_levels};
use mentara_questionnaires::error::QuestionnaireError;
use mentara_questionnaires::{FlatAnswerVector, QuestionnaireId, QuestionnaireScores};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePreAssessment {
    /// Questionnaire names, parallel to `answers`.
    pub questionnaires: Vec<String>,
    pub answers: Vec<Vec<i32>>,
    #[serde(default)]
    pub method: AssessmentMethod,
    #[serde(default)]
    pub client_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreAssessmentResponse {
    #[serde(flatten)]
    pub record: PreAssessment,
    pub scores: BTreeMap<QuestionnaireId, i32>,
    pub severity_levels: BTreeMap<QuestionnaireId, String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answer_matrix: Vec<i32>,
    /// Questionnaires the client actually answered. When omitted every
    /// configured questionnaire is scored.
    #[serde(default)]
    pub questionnaires: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub scores: QuestionnaireScores,
    pub severity_levels: BTreeMap<QuestionnaireId, String>,
}

fn parse_ids(names: &[String]) -> Result<Vec<QuestionnaireId>, QuestionnaireError> {
    names.iter().map(|n| QuestionnaireId::from_str(n)).collect()
}

/// Build the flat answer vector from a checklist submission and score the
/// submitted questionnaires.
pub async fn create_pre_assessment(
    State(state): State<AppState>,
    Json(body): Json<CreatePreAssessment>,
) -> Result<Json<PreAssessmentResponse>, ApiError> {
    let selected = parse_ids(&body.questionnaires)?;
    let vector = state.config.map_answers(&selected, &body.answers)?;
    let scores = state.config.score_vector(&vector, &selected)?;

    let record = PreAssessment::new(
        body.client_id,
        body.method,
        body.questionnaires,
        vector.into_inner(),
        &scores,
    )?;

    tracing::info!(
        id = %record.id,
        questionnaires = selected.len(),
        method = ?record.method,
        "pre-assessment scored"
    );

    Ok(Json(PreAssessmentResponse {
        scores: score_values(&scores),
        severity_levels: severity_levels(&scores),
        record,
    }))
}

/// Recompute scores from a stored answer matrix.
pub async fn score_pre_assessment(
    State(state): State<AppState>,
    Json(body): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let vector = FlatAnswerVector::from_vec(body.answer_matrix, state.config.layout.vector_len)?;

    let scores = match body.questionnaires {
        Some(names) => state.config.score_vector(&vector, &parse_ids(&names)?)?,
        None => state.config.score_all(&vector)?,
    };

    Ok(Json(ScoreResponse {
        severity_levels: severity_levels(&scores),
        scores,
    }))
}
