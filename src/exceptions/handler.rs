use axum::response::Response;
use serde_json::{Map, Value};

use crate::response::ApiResponder;

use super::{ApiException, ExceptionKind};

/// Phrase returned for server-side detail that must not leak.
const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Translates an [`ApiException`] into the matching envelope response.
///
/// Each failure category maps to a fixed outcome, code, and message; database
/// and uncategorized failures become logged error envelopes, the rest become
/// fail envelopes. No exception escapes: the `Other` arm guarantees every
/// value ends in a well-formed envelope.
#[derive(Clone)]
pub struct ApiExceptionHandler {
    responder: ApiResponder,
}

impl ApiExceptionHandler {
    pub fn new(responder: ApiResponder) -> Self {
        Self { responder }
    }

    pub fn handle(&self, exception: &ApiException) -> Response {
        let ref_code = ApiResponder::ref_code();

        match exception.kind() {
            ExceptionKind::Authentication(detail) => self
                .responder
                .unauthorized(Some("Unauthenticated"), detail_map("authentication", detail)),

            ExceptionKind::Authorization(detail) => self
                .responder
                .forbidden(Some("Unauthorized action"), detail_map("authorization", detail)),

            ExceptionKind::Validation(errors) => self
                .responder
                .validation_error(errors.clone(), Some("The given data was invalid")),

            ExceptionKind::Throttle(detail) => self
                .responder
                .too_many_requests(Some("Too Many Attempts"), detail_map("throttle", detail)),

            ExceptionKind::ModelNotFound(_) => self.responder.not_found(
                Some("Resource not found"),
                detail_map("model", "The requested resource was not found."),
            ),

            ExceptionKind::Query(raw) => self.responder.error(
                Some("Database Error"),
                detail_map("database", &self.database_error_message(raw, exception)),
                500,
                Some(ref_code),
                Some(exception),
            ),

            ExceptionKind::DatabaseConnection(_) => self.responder.error(
                Some("Database Connection Error"),
                detail_map("database", &self.error_message(exception)),
                500,
                Some(ref_code),
                Some(exception),
            ),

            ExceptionKind::RouteNotFound(detail) => self
                .responder
                .not_found(Some("Not Found"), detail_map("http", detail)),

            ExceptionKind::MethodNotAllowed(detail) => self.responder.fail(
                Some("Method Not Allowed"),
                detail_map("method", detail),
                405,
                Some(ref_code),
            ),

            ExceptionKind::PayloadTooLarge(_) => self.responder.fail(
                Some("File Too Large"),
                detail_map("upload", "The uploaded file exceeds the maximum allowed size."),
                413,
                Some(ref_code),
            ),

            ExceptionKind::FileNotFound(_) => self.responder.not_found(
                Some("File Not Found"),
                detail_map("file", "The requested file was not found."),
            ),

            ExceptionKind::ServiceUnavailable(detail) => self
                .responder
                .service_unavailable(Some("Service Unavailable"), detail_map("service", detail)),

            ExceptionKind::Http { code, message } => {
                self.responder
                    .respond(None, Some(message), Map::new(), *code, None, None)
            }

            ExceptionKind::Other(_) => self.responder.error(
                Some("Server Error"),
                detail_map("server", &self.error_message(exception)),
                500,
                Some(ref_code),
                Some(exception),
            ),
        }
    }

    /// Classify raw driver error text into a stable, safe phrase.
    fn database_error_message(&self, raw: &str, exception: &ApiException) -> String {
        if raw.contains("Duplicate entry") {
            "Duplicate entry found.".to_string()
        } else if raw.contains("Foreign key constraint") {
            "Related record not found.".to_string()
        } else if raw.contains("Data too long") {
            "Data exceeds maximum length.".to_string()
        } else if raw.contains("Column not found") {
            "Invalid database column.".to_string()
        } else if raw.contains("Table") && raw.contains("doesn't exist") {
            "Database table not found.".to_string()
        } else if raw.contains("Connection refused") {
            "Database connection failed.".to_string()
        } else {
            self.error_message(exception)
        }
    }

    /// The exception's own message, unless running in production or the
    /// message is empty.
    fn error_message(&self, exception: &ApiException) -> String {
        if self.responder.environment().is_production() {
            return GENERIC_ERROR_MESSAGE.to_string();
        }

        let message = exception.message();
        if message.is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

fn detail_map(key: &str, detail: &str) -> Map<String, Value> {
    let mut errors = Map::new();
    errors.insert(key.to_string(), Value::String(detail.to_string()));
    errors
}
