use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use crate::models::CycleStats;
use super::{reject, AppState};

pub async fn get_cycle_stats(
    State(journal): State<AppState>,
) -> Result<Json<CycleStats>, (StatusCode, String)> {
    let stats = journal.cycle_stats().await.map_err(reject)?;
    Ok(Json(stats))
}

pub fn routes(journal: AppState) -> Router {
    Router::new()
        .route("/cycle-stats", get(get_cycle_stats))
        .with_state(journal)
}
