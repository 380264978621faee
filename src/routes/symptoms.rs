use axum::{
    Router,
    routing::get,
    extract::State,
    Json,
    http::StatusCode,
};
use crate::models::SymptomEntry;
use super::{reject, AppState};

pub fn routes(journal: AppState) -> Router {
    Router::new()
        .route("/symptoms", get(get_symptoms))
        .with_state(journal)
}

/// Symptom check-ins, newest first.
async fn get_symptoms(
    State(journal): State<AppState>,
) -> Result<Json<Vec<SymptomEntry>>, (StatusCode, String)> {
    let entries = journal.symptom_entries().await.map_err(reject)?;
    Ok(Json(entries))
}
