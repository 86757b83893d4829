//! Dashboard page — the whole page is rebuilt on every control change.

use axum::{extract::State, response::Html};
use axum_extra::extract::Query;
use lifexp_common::ApiError;
use lifexp_explorer::{render, Selection, SelectionQuery};

use crate::state::SharedState;
use crate::templates::render_explorer;

pub async fn explorer_page(
    State(state): State<SharedState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>, ApiError> {
    let dataset = state.dataset()?;
    let selection = selection_from(&state, &query, &dataset)?;
    let page = render(&selection, &dataset);
    Ok(Html(render_explorer(&state.templates, &page)?))
}

/// Decode the sidebar query against the loaded data.
pub(crate) fn selection_from(
    state: &SharedState,
    query: &SelectionQuery,
    dataset: &lifexp_data::Dataset,
) -> Result<Selection, ApiError> {
    Selection::from_query(query, &state.config.defaults, dataset)
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}
