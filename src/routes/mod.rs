use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::journal::{Journal, JournalError};

pub mod calendar;
pub mod chat;
pub mod cycle;
pub mod cycle_stats;
pub mod mood;
pub mod symptoms;

pub type AppState = Arc<Journal>;

pub fn app(journal: AppState) -> Router {
    Router::new()
        .merge(cycle::routes(journal.clone()))
        .merge(calendar::routes(journal.clone()))
        .merge(cycle_stats::routes(journal.clone()))
        .merge(mood::routes(journal.clone()))
        .merge(symptoms::routes(journal.clone()))
        .merge(chat::routes(journal))
        .route("/health", get(|| async { "✅ Backend up" }))
}

/// Validation problems go back to the caller, storage problems get logged.
pub(crate) fn reject(err: JournalError) -> (StatusCode, String) {
    match err {
        JournalError::Store(e) => {
            tracing::error!("❌ Store error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".into())
        }
        other => {
            tracing::info!("ℹ️ Rejected request: {}", other);
            (StatusCode::UNPROCESSABLE_ENTITY, other.to_string())
        }
    }
}
