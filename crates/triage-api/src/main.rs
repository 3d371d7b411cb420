use std::env;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use state::AppState;
use triage_bedrock::assess::Assessor;
use triage_core::signs::SignRegistry;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    // Fails fast on a duplicate sign identifier across system tables.
    let registry = SignRegistry::standard()?;

    // An absent model id is not an error: the service runs in degraded
    // mode and serves the fixed safe-default disposition.
    let assessor = match env::var("TRIAGE_MODEL_ID") {
        Ok(model_id) => {
            let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            tracing::info!(%model_id, "assessment model configured");
            Assessor::new(config, model_id, registry)
        }
        Err(_) => {
            tracing::warn!("TRIAGE_MODEL_ID not set, running in degraded mode");
            Assessor::unconfigured(registry)
        }
    };

    let state = AppState {
        assessor: Arc::new(assessor),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/guidelines", get(routes::guidelines::get_guidelines))
        .route("/triage", post(routes::triage::triage))
        .layer(cors)
        .with_state(state);

    let addr = env::var("TRIAGE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "triage service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
