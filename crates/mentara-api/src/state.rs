use std::sync::Arc;

use mentara_questionnaires::ScreeningConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ScreeningConfig>,
}
