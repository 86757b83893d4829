//! JSON and CSV views of the same filtered data the page shows.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Query;
use lifexp_common::{ApiError, LifexpError};
use lifexp_data::Record;
use lifexp_explorer::{render, Narrative, Selection, SelectionQuery};
use serde::Serialize;

use crate::handlers::explorer::selection_from;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub selection: Selection,
    pub narrative: Narrative,
    pub narrative_text: String,
    pub count: usize,
    pub rows: Vec<Record>,
}

/// GET /api/view - selection, narrative and filtered rows
pub async fn api_view(
    State(state): State<SharedState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<ViewResponse>, ApiError> {
    let dataset = state.dataset()?;
    let selection = selection_from(&state, &query, &dataset)?;
    let page = render(&selection, &dataset);

    let rows: Vec<Record> = page.view.iter().cloned().collect();
    Ok(Json(ViewResponse {
        narrative_text: page.narrative.to_text(),
        count: rows.len(),
        selection: page.selection,
        narrative: page.narrative,
        rows,
    }))
}

/// GET /api/chart - Vega-Lite spec for the current selection
pub async fn api_chart(
    State(state): State<SharedState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let dataset = state.dataset()?;
    let selection = selection_from(&state, &query, &dataset)?;
    let page = render(&selection, &dataset);
    let spec = serde_json::to_value(&page.chart).map_err(LifexpError::from)?;
    Ok(Json(spec))
}

/// GET /api/view.csv - filtered rows as a CSV download
pub async fn api_view_csv(
    State(state): State<SharedState>,
    Query(query): Query<SelectionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let dataset = state.dataset()?;
    let selection = selection_from(&state, &query, &dataset)?;
    let view = dataset.filter(selection.year(), selection.continents());

    let body = write_csv(view.iter())?;
    let disposition = format!(
        "attachment; filename=\"life_expectancy_{}.csv\"",
        selection.year()
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

fn write_csv<'a>(records: impl Iterator<Item = &'a Record>) -> Result<Vec<u8>, LifexpError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let mut written = 0usize;
    for record in records {
        writer.serialize(record)?;
        written += 1;
    }
    if written == 0 {
        // No row to derive a header from; emit it explicitly.
        writer.write_record(lifexp_explorer::panel::TABLE_COLUMNS)?;
    }
    writer
        .into_inner()
        .map_err(|e| LifexpError::Other(anyhow::anyhow!("CSV flush failed: {}", e.error())))
}
