use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Environment;
use crate::status::{canonical_message, transport_status, StatusKind};

/// Fail envelope for client-fault and redirect outcomes.
///
/// `errors` is included only when non-empty, and is then accompanied by an
/// `env` field naming the current environment. `ref` is included only when
/// one was supplied. The fail path does not log.
#[derive(Debug, Clone)]
pub struct ApiFailResponse {
    message: Option<String>,
    errors: Map<String, Value>,
    code: u16,
    ref_code: Option<String>,
    environment: Environment,
}

#[derive(Serialize)]
struct FailBody {
    status: &'static str,
    message: String,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    env: Option<&'static str>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    errors: Map<String, Value>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    ref_code: Option<String>,
}

impl ApiFailResponse {
    pub fn new(
        message: Option<String>,
        errors: Map<String, Value>,
        code: u16,
        ref_code: Option<String>,
        environment: Environment,
    ) -> Self {
        Self {
            message,
            errors,
            code,
            ref_code,
            environment,
        }
    }
}

impl IntoResponse for ApiFailResponse {
    fn into_response(self) -> Response {
        let env = (!self.errors.is_empty()).then(|| self.environment.as_str());

        let body = FailBody {
            status: StatusKind::classify(self.code).label(),
            message: self
                .message
                .unwrap_or_else(|| canonical_message(self.code).to_string()),
            code: self.code,
            env,
            errors: self.errors,
            ref_code: self.ref_code,
        };

        (transport_status(self.code), Json(body)).into_response()
    }
}
