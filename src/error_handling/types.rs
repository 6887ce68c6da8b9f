//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use log::SetLoggerError;
use thiserror::Error;

use crate::dns::RecordKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error compiling the page template.
    #[error("Page template initialization error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),
}

/// Errors returned by a single DNS query.
///
/// Both variants mean "record absent" to the classifier. The split only
/// decides how loudly the failure is logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsLookupError {
    /// NXDOMAIN or an empty answer.
    #[error("no {kind} records found for {name}")]
    NoRecords {
        /// Name that was queried
        name: String,
        /// Record type that was queried
        kind: RecordKind,
    },

    /// Timeouts, network errors, SERVFAIL, malformed names.
    #[error("{kind} lookup failed for {name}: {message}")]
    Failed {
        /// Name that was queried
        name: String,
        /// Record type that was queried
        kind: RecordKind,
        /// Resolver error message
        message: String,
    },
}

impl DnsLookupError {
    /// The name doesn't exist or publishes no records of this type.
    pub fn no_records(name: &str, kind: RecordKind) -> Self {
        Self::NoRecords {
            name: name.to_string(),
            kind,
        }
    }

    /// The query itself failed.
    pub fn failed(name: &str, kind: RecordKind, message: impl Into<String>) -> Self {
        Self::Failed {
            name: name.to_string(),
            kind,
            message: message.into(),
        }
    }

    /// Whether the error is an expected "no such record" answer.
    pub fn is_no_records(&self) -> bool {
        matches!(self, Self::NoRecords { .. })
    }
}

/// Errors surfaced to the HTTP client.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The `domain` form field is missing or empty.
    #[error("Domain is required")]
    MissingDomain,

    /// `/check` was called with a method other than POST.
    #[error("Invalid request method")]
    MethodNotAllowed,

    /// The result page failed to render.
    #[error("Failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl RequestError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingDomain => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::MethodNotAllowed => {
                (status, [(header::ALLOW, "POST")], self.to_string()).into_response()
            }
            Self::Render(ref e) => {
                log::error!("Failed to render page: {e}");
                (status, "Internal server error").into_response()
            }
            Self::MissingDomain => (status, self.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_records_display() {
        let err = DnsLookupError::no_records("nodns.invalid", RecordKind::Mx);
        assert!(err.is_no_records());
        assert_eq!(err.to_string(), "no MX records found for nodns.invalid");
    }

    #[test]
    fn test_failed_display() {
        let err = DnsLookupError::failed("example.com", RecordKind::Txt, "request timed out");
        assert!(!err.is_no_records());
        assert_eq!(
            err.to_string(),
            "TXT lookup failed for example.com: request timed out"
        );
    }

    #[test]
    fn test_check_error_status_codes() {
        assert_eq!(
            RequestError::MissingDomain.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RequestError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = RequestError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    }
}
