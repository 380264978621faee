use axum::{extract::{State, Query}, Json, Router, routing::get, http::StatusCode};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use crate::models::{CalendarDay, CalendarMonth};
use crate::predictor::{is_period_day, is_predicted_period};
use super::{reject, AppState};

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub fn routes(journal: AppState) -> Router {
    Router::new()
        .route("/calendar", get(get_calendar))
        .with_state(journal)
}

/// Month grid with logged and projected period days; defaults to the current month.
pub async fn get_calendar(
    State(journal): State<AppState>,
    Query(params): Query<CalendarQuery>,
) -> Result<Json<CalendarMonth>, (StatusCode, String)> {
    let today = journal.today();
    let year = params.year.unwrap_or(today.year());
    let month = params.month.unwrap_or(today.month());

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        (StatusCode::BAD_REQUEST, format!("Invalid month {year}-{month}"))
    })?;

    let config = journal.cycle_config().await.map_err(reject)?;

    let days = first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| CalendarDay {
            date,
            is_today: date == today,
            is_period: is_period_day(&config, date),
            is_predicted_period: is_predicted_period(&config, date, today),
        })
        .collect();

    Ok(Json(CalendarMonth {
        year,
        month,
        first_weekday: first.weekday().num_days_from_sunday(),
        days,
    }))
}
