//! Form page handler.

use axum::extract::State;
use axum::response::Html;

use super::super::types::AppState;
use crate::error_handling::RequestError;

/// Renders the empty form. Also serves every path not routed elsewhere.
pub async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, RequestError> {
    Ok(Html(state.renderer.render_form()?))
}
