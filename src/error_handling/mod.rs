//! Error types.
//!
//! This module provides:
//! - Initialization errors (logger, page template)
//! - DNS lookup errors, which the classifier absorbs as "record absent"
//! - Request errors, which map onto HTTP status codes

mod types;

// Re-export public API
pub use types::{DnsLookupError, InitializationError, RequestError};
