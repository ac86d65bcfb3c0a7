//! Logging seam for server-side error reporting.
//!
//! The responder masks sensitive fields and hands the already-masked errors
//! map to an [`ApiLogger`]. The default implementation forwards to `tracing`;
//! applications can substitute their own sink.

pub mod masking;

pub use masking::{is_sensitive_key, mask_sensitive_data, MASK};

use serde_json::{Map, Value};

use crate::exceptions::ApiException;

/// Sink for server-side error and fail records.
///
/// Implementations receive errors maps that have already been masked; they
/// must not re-expose raw values from elsewhere.
pub trait ApiLogger: Send + Sync {
    /// Record a server fault, keyed by its reference code.
    fn log_error(
        &self,
        ref_code: &str,
        message: Option<&str>,
        errors: &Map<String, Value>,
        code: u16,
        exception: Option<&ApiException>,
    );

    /// Record a client fault. Not invoked by the responder's fail path;
    /// available to callers that want fail-level records.
    fn log_fail(&self, ref_code: &str, message: Option<&str>, errors: &Map<String, Value>, code: u16);
}

/// Default logger emitting structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingApiLogger;

impl ApiLogger for TracingApiLogger {
    fn log_error(
        &self,
        ref_code: &str,
        message: Option<&str>,
        errors: &Map<String, Value>,
        code: u16,
        exception: Option<&ApiException>,
    ) {
        let errors = Value::Object(errors.clone());

        match exception {
            Some(exception) => tracing::error!(
                ref_code,
                code,
                message = message.unwrap_or_default(),
                %errors,
                exception = exception.kind_name(),
                exception_message = %exception,
                file = exception.file(),
                line = exception.line(),
                trace = %exception.trace(),
                "API error response"
            ),
            None => tracing::error!(
                ref_code,
                code,
                message = message.unwrap_or_default(),
                %errors,
                "API error response"
            ),
        }
    }

    fn log_fail(&self, ref_code: &str, message: Option<&str>, errors: &Map<String, Value>, code: u16) {
        let errors = Value::Object(errors.clone());

        tracing::warn!(
            ref_code,
            code,
            message = message.unwrap_or_default(),
            %errors,
            "API fail response"
        );
    }
}
