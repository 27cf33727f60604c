use std::str::FromStr;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use mentara_questionnaires::questions::{Question, ResponseOption, ResponseScale};
use mentara_questionnaires::scoring::ScoringTable;
use mentara_questionnaires::{get_questionnaire, LayoutEntry, QuestionnaireId};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuestionnaireSummary {
    id: QuestionnaireId,
    short_name: String,
    description: String,
    offset: usize,
    question_count: usize,
}

#[derive(Serialize)]
pub struct QuestionnaireDetail {
    id: QuestionnaireId,
    short_name: String,
    description: String,
    layout: LayoutEntry,
    questions: Vec<QuestionView>,
    scoring: ScoringTable,
}

/// A question with the answer choices a checklist client renders for it.
#[derive(Serialize)]
pub struct QuestionView {
    prompt: String,
    scale: ResponseScale,
    options: &'static [ResponseOption],
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            prompt: question.prompt.clone(),
            scale: question.scale,
            options: question.scale.options(),
        }
    }
}

/// Questionnaires in the active layout, in answer-vector order.
pub async fn list_questionnaires(State(state): State<AppState>) -> Json<Vec<QuestionnaireSummary>> {
    let summaries = state
        .config
        .layout
        .entries
        .iter()
        .map(|(id, entry)| {
            let questionnaire = get_questionnaire(*id);
            QuestionnaireSummary {
                id: *id,
                short_name: questionnaire.short_name().to_string(),
                description: questionnaire.description().to_string(),
                offset: entry.offset,
                question_count: entry.question_count,
            }
        })
        .collect();
    Json(summaries)
}

pub async fn get_questionnaire_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuestionnaireDetail>, ApiError> {
    let not_found = || ApiError::NotFound(format!("questionnaire not found: {id}"));

    let qid = QuestionnaireId::from_str(&id).map_err(|_| not_found())?;
    let layout = *state.config.layout.entry(qid).map_err(|_| not_found())?;
    let scoring = state.config.scoring_table(qid)?.clone();
    let questionnaire = get_questionnaire(qid);

    Ok(Json(QuestionnaireDetail {
        id: qid,
        short_name: questionnaire.short_name().to_string(),
        description: questionnaire.description().to_string(),
        layout,
        questions: questionnaire.questions().iter().map(QuestionView::from).collect(),
        scoring,
    }))
}
