use std::sync::Arc;

use triage_bedrock::assess::Assessor;

/// Shared application state, injected into all route handlers via Axum
/// state. The assessor is read-only after startup; requests share it
/// without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub assessor: Arc<Assessor>,
}
