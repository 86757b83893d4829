//! Liveness and dataset status.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use lifexp_common::ApiError;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub records: usize,
    pub continents: Vec<String>,
    pub data_path: String,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Result<Json<Health>, ApiError> {
    let dataset = state.dataset()?;
    Ok(Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        records: dataset.len(),
        continents: dataset.continents().into_iter().map(str::to_string).collect(),
        data_path: state.datasets.path().display().to_string(),
        loaded_at: state.datasets.loaded_at(),
    }))
}
