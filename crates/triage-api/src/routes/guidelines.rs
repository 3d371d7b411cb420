use axum::extract::{Query, State};
use serde::Deserialize;

use triage_core::guidelines::render_guidelines;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct GuidelinesQuery {
    age: Option<u32>,
}

/// Public rendering of the scoring guidelines — the same text the
/// assessment model receives as grounding context.
pub async fn get_guidelines(
    State(state): State<AppState>,
    Query(query): Query<GuidelinesQuery>,
) -> String {
    render_guidelines(state.assessor.registry(), query.age)
}
