//! mentara-api
//!
//! HTTP surface for the pre-assessment: questionnaire catalog, answer
//! matrix construction and scoring. Runs behind API Gateway via
//! `lambda_http`; storage of the resulting record is the caller's concern.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/questionnaires",
            get(routes::questionnaires::list_questionnaires),
        )
        .route(
            "/questionnaires/{id}",
            get(routes::questionnaires::get_questionnaire_detail),
        )
        .route(
            "/pre-assessments",
            post(routes::pre_assessments::create_pre_assessment),
        )
        .route(
            "/pre-assessments/scores",
            post(routes::pre_assessments::score_pre_assessment),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
