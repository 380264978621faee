use axum::{
    Router,
    routing::get,
    extract::State,
    Json,
    http::StatusCode,
};
use serde::Deserialize;
use crate::journal::NewMood;
use crate::models::{Mood, MoodEntry, Symptom};
use super::{reject, AppState};

#[derive(Deserialize)]
pub struct MoodCheckIn {
    pub mood: Mood,
    pub energy: u8,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
}

pub fn routes(journal: AppState) -> Router {
    Router::new()
        .route("/mood", get(list_moods).post(log_mood))
        .route("/mood/today", get(todays_mood))
        .with_state(journal)
}

async fn log_mood(
    State(journal): State<AppState>,
    Json(body): Json<MoodCheckIn>,
) -> Result<(StatusCode, Json<MoodEntry>), (StatusCode, String)> {
    let entry = journal
        .add_mood_entry(NewMood {
            mood: body.mood,
            energy: body.energy,
            notes: body.notes,
            symptoms: body.symptoms,
        })
        .await
        .map_err(reject)?;

    tracing::info!("📝 Mood {:?} logged for {}", entry.mood, entry.date);
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn list_moods(
    State(journal): State<AppState>,
) -> Result<Json<Vec<MoodEntry>>, (StatusCode, String)> {
    Ok(Json(journal.mood_entries().await.map_err(reject)?))
}

async fn todays_mood(
    State(journal): State<AppState>,
) -> Result<Json<MoodEntry>, (StatusCode, String)> {
    journal
        .todays_mood()
        .await
        .map_err(reject)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "No mood logged today".into()))
}
