use axum::{extract::State, routing::get, Json, Router, http::StatusCode};
use serde::{Deserialize, Serialize};
use crate::chat::{respond, GREETING};
use crate::models::Phase;
use crate::predictor::classify_phase;
use super::{reject, AppState};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatReply {
    pub reply: &'static str,
    pub phase: Phase,
}

pub fn routes(journal: AppState) -> Router {
    Router::new()
        .route("/chat", get(greeting).post(send_message))
        .with_state(journal)
}

async fn greeting(
    State(journal): State<AppState>,
) -> Result<Json<ChatReply>, (StatusCode, String)> {
    let config = journal.cycle_config().await.map_err(reject)?;
    let phase = classify_phase(&config, journal.today());
    Ok(Json(ChatReply { reply: GREETING, phase }))
}

async fn send_message(
    State(journal): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, String)> {
    if body.message.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Message is empty".into()));
    }

    let config = journal.cycle_config().await.map_err(reject)?;
    let phase = classify_phase(&config, journal.today());

    Ok(Json(ChatReply { reply: respond(&body.message, phase), phase }))
}
