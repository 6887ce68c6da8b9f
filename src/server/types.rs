//! Server data structures.

use std::sync::Arc;

use serde::Deserialize;

use super::template::PageRenderer;
use crate::dns::RecordLookup;

/// Shared state for request handlers.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// DNS record source for classification
    pub lookup: Arc<dyn RecordLookup>,
    /// Compiled page template
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    /// Bundles the lookup and renderer for the router.
    pub fn new(lookup: Arc<dyn RecordLookup>, renderer: Arc<PageRenderer>) -> Self {
        Self { lookup, renderer }
    }
}

/// Form body posted to `/check`.
///
/// Kept as raw pairs so a repeated field is not a parse error.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CheckForm {
    fields: Vec<(String, String)>,
}

impl CheckForm {
    /// First value of the `domain` field, if the field is present.
    pub fn domain(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == "domain")
            .map(|(_, value)| value.as_str())
    }
}
