use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mentara_api::state::AppState;
use mentara_api::{config, router};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let screening = config::load_screening_config()?;
    let state = AppState {
        config: Arc::new(screening),
    };

    lambda_http::run(router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
