//! Domain check handler.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::Html;
use log::debug;

use super::super::types::{AppState, CheckForm};
use crate::check::classify;
use crate::error_handling::RequestError;

/// Classifies the posted domain and renders the result page.
///
/// A missing, empty, or unparseable form is a 400 and no lookup is made. When
/// the field repeats, the first value is used.
pub async fn check_handler(
    State(state): State<AppState>,
    form: Result<Form<CheckForm>, FormRejection>,
) -> Result<Html<String>, RequestError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Rejected check form: {rejection}");
            return Err(RequestError::MissingDomain);
        }
    };
    let domain = match form.domain() {
        Some(domain) if !domain.is_empty() => domain,
        _ => return Err(RequestError::MissingDomain),
    };

    let result = classify(domain, state.lookup.as_ref()).await;
    Ok(Html(state.renderer.render_result(&result)?))
}

/// Any method other than POST on `/check`.
pub async fn method_not_allowed_handler() -> RequestError {
    RequestError::MethodNotAllowed
}
