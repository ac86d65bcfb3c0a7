//! Classified failure values and their translation into envelopes.

pub mod handler;

pub use handler::ApiExceptionHandler;

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;

use serde_json::{Map, Value};
use thiserror::Error;

/// The failure categories the exception handler translates.
///
/// Each variant carries the detail surfaced in the envelope's errors map;
/// `Validation` carries the full structured field->messages map verbatim.
#[derive(Debug, Error)]
pub enum ExceptionKind {
    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Authorization(String),

    #[error("The given data was invalid")]
    Validation(Map<String, Value>),

    #[error("{0}")]
    Throttle(String),

    /// A looked-up record does not exist.
    #[error("{0}")]
    ModelNotFound(String),

    /// Query failure; carries the raw driver error text for classification.
    #[error("{0}")]
    Query(String),

    /// Low-level database driver or connection failure.
    #[error("{0}")]
    DatabaseConnection(String),

    /// No route matched the request path.
    #[error("{0}")]
    RouteNotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    FileNotFound(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    /// Generic HTTP failure carrying its own status code.
    #[error("{message}")]
    Http { code: u16, message: String },

    /// Anything the categories above do not cover.
    #[error("{0}")]
    Other(String),
}

/// A failure condition on its way to becoming a response.
///
/// Captures the construction site and a backtrace so server faults can be
/// logged (and, outside production, surfaced in the envelope's debug block)
/// with `file`/`line`/`trace` detail.
#[derive(Debug)]
pub struct ApiException {
    kind: ExceptionKind,
    location: &'static Location<'static>,
    trace: Backtrace,
}

impl ApiException {
    #[track_caller]
    pub fn new(kind: ExceptionKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
            trace: Backtrace::capture(),
        }
    }

    #[track_caller]
    pub fn authentication(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::Authentication(detail.into()))
    }

    #[track_caller]
    pub fn authorization(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::Authorization(detail.into()))
    }

    #[track_caller]
    pub fn validation(errors: Map<String, Value>) -> Self {
        Self::new(ExceptionKind::Validation(errors))
    }

    #[track_caller]
    pub fn throttle(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::Throttle(detail.into()))
    }

    #[track_caller]
    pub fn model_not_found(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::ModelNotFound(detail.into()))
    }

    #[track_caller]
    pub fn query(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::Query(detail.into()))
    }

    #[track_caller]
    pub fn database_connection(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::DatabaseConnection(detail.into()))
    }

    #[track_caller]
    pub fn route_not_found(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::RouteNotFound(detail.into()))
    }

    #[track_caller]
    pub fn method_not_allowed(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::MethodNotAllowed(detail.into()))
    }

    #[track_caller]
    pub fn payload_too_large(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::PayloadTooLarge(detail.into()))
    }

    #[track_caller]
    pub fn file_not_found(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::FileNotFound(detail.into()))
    }

    #[track_caller]
    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::ServiceUnavailable(detail.into()))
    }

    #[track_caller]
    pub fn http(code: u16, message: impl Into<String>) -> Self {
        Self::new(ExceptionKind::Http {
            code,
            message: message.into(),
        })
    }

    #[track_caller]
    pub fn other(detail: impl Into<String>) -> Self {
        Self::new(ExceptionKind::Other(detail.into()))
    }

    pub fn kind(&self) -> &ExceptionKind {
        &self.kind
    }

    /// The variant name, surfaced as the `exception` field of debug blocks.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ExceptionKind::Authentication(_) => "Authentication",
            ExceptionKind::Authorization(_) => "Authorization",
            ExceptionKind::Validation(_) => "Validation",
            ExceptionKind::Throttle(_) => "Throttle",
            ExceptionKind::ModelNotFound(_) => "ModelNotFound",
            ExceptionKind::Query(_) => "Query",
            ExceptionKind::DatabaseConnection(_) => "DatabaseConnection",
            ExceptionKind::RouteNotFound(_) => "RouteNotFound",
            ExceptionKind::MethodNotAllowed(_) => "MethodNotAllowed",
            ExceptionKind::PayloadTooLarge(_) => "PayloadTooLarge",
            ExceptionKind::FileNotFound(_) => "FileNotFound",
            ExceptionKind::ServiceUnavailable(_) => "ServiceUnavailable",
            ExceptionKind::Http { .. } => "Http",
            ExceptionKind::Other(_) => "Other",
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The HTTP status code this failure naturally maps to, if any.
    ///
    /// Database and uncategorized failures carry none and default to 500 in
    /// [`ApiResponder::handle_exception`](crate::ApiResponder::handle_exception).
    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            ExceptionKind::Authentication(_) => Some(401),
            ExceptionKind::Authorization(_) => Some(403),
            ExceptionKind::Validation(_) => Some(422),
            ExceptionKind::Throttle(_) => Some(429),
            ExceptionKind::ModelNotFound(_)
            | ExceptionKind::RouteNotFound(_)
            | ExceptionKind::FileNotFound(_) => Some(404),
            ExceptionKind::MethodNotAllowed(_) => Some(405),
            ExceptionKind::PayloadTooLarge(_) => Some(413),
            ExceptionKind::ServiceUnavailable(_) => Some(503),
            ExceptionKind::Http { code, .. } => Some(code),
            ExceptionKind::Query(_)
            | ExceptionKind::DatabaseConnection(_)
            | ExceptionKind::Other(_) => None,
        }
    }

    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }

    pub fn trace(&self) -> String {
        self.trace.to_string()
    }
}

impl fmt::Display for ApiException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ApiException {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
