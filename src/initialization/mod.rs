//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - DNS resolver
//! - Page renderer
//!
//! Each resource is built once at startup and handed to the server explicitly.

mod logger;
mod resolver;

use std::sync::Arc;

use crate::error_handling::InitializationError;
use crate::server::PageRenderer;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Compiles the page template.
///
/// # Errors
///
/// Returns `InitializationError::TemplateError` if the template doesn't parse.
pub fn init_renderer() -> Result<Arc<PageRenderer>, InitializationError> {
    Ok(Arc::new(PageRenderer::new()?))
}
