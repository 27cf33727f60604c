use thiserror::Error;

use crate::id::QuestionnaireId;

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    /// `index` is `None` when the number of answer rows does not match the
    /// number of selected questionnaires.
    #[error(
        "shape mismatch{}: expected {expected}, got {actual}",
        .index.map(|i| format!(" at answer row {i}")).unwrap_or_default()
    )]
    ShapeMismatch {
        index: Option<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("questionnaire '{0}' selected more than once")]
    DuplicateQuestionnaire(QuestionnaireId),

    #[error("answer vector has {actual} entries, expected {expected}")]
    VectorLength { expected: usize, actual: usize },

    #[error("invalid matrix layout: {0}")]
    InvalidLayout(String),

    #[error("no scoring table configured for '{0}'")]
    MissingScoring(QuestionnaireId),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
