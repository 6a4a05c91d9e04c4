use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{db, state::AppState};

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

/// Friendly greeting. Pings the datastore on the way; the outcome is only logged.
#[instrument(skip(state))]
pub async fn welcome(State(state): State<AppState>) -> Json<Welcome> {
    match db::ping(&state.db).await {
        Ok(()) => info!("database connected"),
        Err(e) => warn!(error = %e, "database connection failed"),
    }
    Json(Welcome {
        message: "Welcome to the REST API project!",
    })
}
