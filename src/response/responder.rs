use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use chrono::Utc;
use rand::Rng;
use serde_json::{Map, Value};

use crate::config::Environment;
use crate::exceptions::ApiException;
use crate::logging::{mask_sensitive_data, ApiLogger, TracingApiLogger};
use crate::status::{canonical_message, StatusKind};

use super::{ApiErrorResponse, ApiFailResponse, ApiSuccessResponse};

/// Per-process sequence mixed into reference codes so concurrent calls in
/// the same instant cannot collide.
static REF_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Builds the three envelope kinds and routes outcomes to the right one.
///
/// Construct one per process with the deployment [`Environment`] and share
/// it by cloning; all methods are `&self` and the handle is `Send + Sync`.
/// Server faults are logged through the configured [`ApiLogger`] with
/// sensitive fields masked; client faults are not logged.
#[derive(Clone)]
pub struct ApiResponder {
    environment: Environment,
    logger: Arc<dyn ApiLogger>,
}

impl ApiResponder {
    pub fn new(environment: Environment) -> Self {
        Self::with_logger(environment, Arc::new(TracingApiLogger))
    }

    pub fn with_logger(environment: Environment, logger: Arc<dyn ApiLogger>) -> Self {
        Self {
            environment,
            logger,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Generate a reference code correlating an error response with its log
    /// entry, e.g. `ERR-20260805-REF-1A2B3C4D0001`.
    pub fn ref_code() -> String {
        let sequence = REF_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let entropy: u32 = rand::rng().random();

        format!(
            "ERR-{}-REF-{:08X}{:04X}",
            Utc::now().format("%Y%m%d"),
            entropy,
            sequence & 0xFFFF
        )
    }

    /// Build the envelope matching `code`'s classification.
    ///
    /// Client-error codes reuse an object-shaped `data` as the errors map;
    /// server-error and unclassifiable codes produce a logged error envelope
    /// with a fresh reference code.
    pub fn respond(
        &self,
        data: Option<Value>,
        message: Option<&str>,
        meta: Map<String, Value>,
        code: u16,
        ref_code: Option<String>,
        exception: Option<&ApiException>,
    ) -> Response {
        match StatusKind::classify(code) {
            StatusKind::Success => self.success(data, message, meta, code),
            StatusKind::Redirect => self.fail(message, Map::new(), code, ref_code),
            StatusKind::ClientError => self.fail(message, object_errors(data), code, ref_code),
            StatusKind::ServerError => self.error(
                message.or(Some(canonical_message(code))),
                object_errors(data),
                code,
                Some(Self::ref_code()),
                exception,
            ),
            StatusKind::Unknown => self.error(
                Some(message.unwrap_or("Unknown Error")),
                object_errors(data),
                code,
                Some(Self::ref_code()),
                exception,
            ),
        }
    }

    /// Build the envelope matching an exception's natural status code.
    ///
    /// Client-fault codes yield an unlogged fail envelope; everything else
    /// (including kinds with no natural code, which default to 500) yields a
    /// logged error envelope with a fresh reference code.
    pub fn handle_exception(
        &self,
        exception: &ApiException,
        message: Option<&str>,
        errors: Map<String, Value>,
        ref_code: Option<String>,
    ) -> Response {
        let code = exception.status_code().unwrap_or(500);
        let fallback = exception.message();
        let message = message.unwrap_or(&fallback);

        if StatusKind::classify(code) == StatusKind::ClientError {
            self.fail(Some(message), errors, code, ref_code)
        } else {
            self.error(
                Some(message),
                errors,
                code,
                Some(Self::ref_code()),
                Some(exception),
            )
        }
    }

    pub fn success(
        &self,
        data: Option<Value>,
        message: Option<&str>,
        meta: Map<String, Value>,
        code: u16,
    ) -> Response {
        ApiSuccessResponse::new(data, message.map(str::to_owned), meta, code).into_response()
    }

    /// Build an error envelope and log it with masked errors.
    pub fn error(
        &self,
        message: Option<&str>,
        errors: Map<String, Value>,
        code: u16,
        ref_code: Option<String>,
        exception: Option<&ApiException>,
    ) -> Response {
        let ref_code = ref_code.unwrap_or_else(Self::ref_code);

        let masked = mask_sensitive_data(&errors);
        self.logger
            .log_error(&ref_code, message, &masked, code, exception);

        ApiErrorResponse::new(
            message.map(str::to_owned),
            errors,
            code,
            ref_code,
            self.environment,
            exception,
        )
        .into_response()
    }

    pub fn fail(
        &self,
        message: Option<&str>,
        errors: Map<String, Value>,
        code: u16,
        ref_code: Option<String>,
    ) -> Response {
        ApiFailResponse::new(
            message.map(str::to_owned),
            errors,
            code,
            ref_code,
            self.environment,
        )
        .into_response()
    }

    pub fn created(
        &self,
        data: Option<Value>,
        message: Option<&str>,
        meta: Map<String, Value>,
    ) -> Response {
        self.success(data, message, meta, 201)
    }

    pub fn no_content(&self, message: Option<&str>) -> Response {
        self.success(None, message, Map::new(), 204)
    }

    pub fn accepted(
        &self,
        data: Option<Value>,
        message: Option<&str>,
        meta: Map<String, Value>,
    ) -> Response {
        self.success(data, message, meta, 202)
    }

    pub fn deleted(&self, message: Option<&str>) -> Response {
        self.success(
            None,
            Some(message.unwrap_or("Resource deleted successfully")),
            Map::new(),
            200,
        )
    }

    pub fn updated(
        &self,
        data: Option<Value>,
        message: Option<&str>,
        meta: Map<String, Value>,
    ) -> Response {
        self.success(
            data,
            Some(message.unwrap_or("Resource updated successfully")),
            meta,
            200,
        )
    }

    pub fn forbidden(&self, message: Option<&str>, errors: Map<String, Value>) -> Response {
        self.fail(message, errors, 403, None)
    }

    pub fn unauthorized(&self, message: Option<&str>, errors: Map<String, Value>) -> Response {
        self.fail(message, errors, 401, None)
    }

    pub fn validation_error(&self, errors: Map<String, Value>, message: Option<&str>) -> Response {
        self.fail(
            Some(message.unwrap_or("The given data was invalid")),
            errors,
            422,
            None,
        )
    }

    pub fn not_found(&self, message: Option<&str>, errors: Map<String, Value>) -> Response {
        self.fail(message, errors, 404, None)
    }

    pub fn too_many_requests(&self, message: Option<&str>, errors: Map<String, Value>) -> Response {
        self.fail(message, errors, 429, None)
    }

    pub fn service_unavailable(&self, message: Option<&str>, errors: Map<String, Value>) -> Response {
        self.error(
            Some(message.unwrap_or(canonical_message(503))),
            errors,
            503,
            Some(Self::ref_code()),
            None,
        )
    }

    pub fn maintenance(&self, message: Option<&str>, errors: Map<String, Value>) -> Response {
        self.error(
            Some(message.unwrap_or("System is under maintenance")),
            errors,
            503,
            Some(Self::ref_code()),
            None,
        )
    }
}

fn object_errors(data: Option<Value>) -> Map<String, Value> {
    match data {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
