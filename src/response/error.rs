use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Environment;
use crate::exceptions::ApiException;
use crate::status::{transport_status, StatusKind};

/// Error envelope for server-fault outcomes.
///
/// Always carries a reference code and an errors map (possibly empty). The
/// debug block is attached only outside production and only when an
/// underlying exception was supplied; production callers get the reference
/// code alone and operators match it against the log entry.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    message: Option<String>,
    errors: Map<String, Value>,
    code: u16,
    ref_code: String,
    debug: Option<DebugInfo>,
}

/// Exception detail snapshot surfaced in non-production error envelopes.
#[derive(Debug, Clone, Serialize)]
pub struct DebugInfo {
    environment: &'static str,
    exception: &'static str,
    error_message: String,
    file: &'static str,
    line: u32,
    trace: String,
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    code: u16,
    message: String,
    #[serde(rename = "ref")]
    ref_code: String,
    errors: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug: Option<DebugInfo>,
}

impl ApiErrorResponse {
    pub fn new(
        message: Option<String>,
        errors: Map<String, Value>,
        code: u16,
        ref_code: String,
        environment: Environment,
        exception: Option<&ApiException>,
    ) -> Self {
        let debug = match exception {
            Some(exception) if !environment.is_production() => Some(DebugInfo {
                environment: environment.as_str(),
                exception: exception.kind_name(),
                error_message: exception.message(),
                file: exception.file(),
                line: exception.line(),
                trace: exception.trace(),
            }),
            _ => None,
        };

        Self {
            message,
            errors,
            code,
            ref_code,
            debug,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: StatusKind::classify(self.code).label(),
            code: self.code,
            message: self.message.unwrap_or_else(|| "Server Error".to_string()),
            ref_code: self.ref_code,
            errors: self.errors,
            debug: self.debug,
        };

        (transport_status(self.code), Json(body)).into_response()
    }
}
