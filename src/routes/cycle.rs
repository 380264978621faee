use axum::{Router, routing::{get, post}, Json, extract::State};
use chrono::NaiveDate;
use serde::Deserialize;
use axum::http::StatusCode;
use crate::chat::phase_info;
use crate::journal::Onboarding;
use crate::models::{CycleConfiguration, CycleSummary};
use crate::predictor;
use super::{reject, AppState};

#[derive(Deserialize)]
pub struct OnboardingRequest {
    pub last_period_start: NaiveDate,
    pub cycle_length: i64,
    pub period_length: Option<i64>,
}

pub fn routes(journal: AppState) -> Router {
    Router::new()
        .route("/cycle", get(get_cycle_summary))
        .route("/cycle/period", post(log_period))
        .route("/onboarding", post(complete_onboarding))
        .with_state(journal)
}

fn summarize(config: CycleConfiguration, today: NaiveDate) -> CycleSummary {
    let forecast = predictor::forecast(&config, today);
    CycleSummary {
        today,
        insight: phase_info(forecast.phase),
        forecast,
        config,
    }
}

async fn get_cycle_summary(
    State(journal): State<AppState>,
) -> Result<Json<CycleSummary>, (StatusCode, String)> {
    let config = journal.cycle_config().await.map_err(reject)?;
    Ok(Json(summarize(config, journal.today())))
}

async fn log_period(
    State(journal): State<AppState>,
) -> Result<Json<CycleSummary>, (StatusCode, String)> {
    let config = journal.log_period_today().await.map_err(reject)?;
    Ok(Json(summarize(config, journal.today())))
}

async fn complete_onboarding(
    State(journal): State<AppState>,
    Json(body): Json<OnboardingRequest>,
) -> Result<Json<CycleSummary>, (StatusCode, String)> {
    let config = journal
        .complete_onboarding(Onboarding {
            last_period_start: body.last_period_start,
            cycle_length: body.cycle_length,
            period_length: body.period_length,
        })
        .await
        .map_err(reject)?;

    Ok(Json(summarize(config, journal.today())))
}
